//! Invitation domain
//!
//! Types and traits for the invitation lifecycle: the opaque token, the
//! invitation entity with its usability rules, the tagged refusal causes,
//! and the repository trait with conditional consumption.

mod entity;
mod error;
mod repository;

pub use entity::{Invitation, InviteToken};
pub use error::InviteError;
pub use repository::InvitationRepository;
