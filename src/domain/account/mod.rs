//! Account domain
//!
//! Identity records, roles, signup requests, and the errors the provisioning
//! path can surface.

mod entity;
mod signup;
mod validation;

pub use entity::{Account, AccountId, Role};
pub use signup::{SignupError, SignupRequest};
pub use validation::{
    validate_display_name, validate_email, validate_password, AccountValidationError,
};
