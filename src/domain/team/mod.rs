//! Team domain
//!
//! This module provides domain types and traits for teams, including the
//! team entity, validation, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{Team, TeamId};
pub use repository::TeamRepository;
pub use validation::{validate_team_id, validate_team_name, TeamValidationError};
