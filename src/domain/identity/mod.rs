//! Identity domain
//!
//! The provider trait the core consumes for account creation and sessions,
//! plus the session types and change events.

mod provider;
mod session;

pub use provider::IdentityProvider;
pub use session::{Session, SessionEvent, SessionId};
