//! Identity infrastructure module

mod local_provider;
mod password;

pub use local_provider::LocalIdentityProvider;
pub use password::{Argon2Hasher, PasswordHasher};
