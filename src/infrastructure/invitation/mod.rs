//! Invitation infrastructure module
//!
//! Token generation, in-memory and PostgreSQL repositories, and the
//! invitation service.

mod generator;
mod postgres_repository;
mod repository;
mod service;

pub use generator::InviteTokenGenerator;
pub use postgres_repository::PostgresInvitationRepository;
pub use repository::InMemoryInvitationRepository;
pub use service::{CreateInviteRequest, InvitationService, InvitationView};
