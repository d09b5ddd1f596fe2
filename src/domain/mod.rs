//! Domain layer - Core business logic and entities

pub mod account;
pub mod audit;
pub mod error;
pub mod identity;
pub mod invitation;
pub mod profile;
pub mod team;

pub use account::{Account, AccountId, Role, SignupError, SignupRequest};
pub use audit::{ActorProfile, AuditAction, AuditLogEntry, AuditLogRepository, CorrelatedAuditEntry};
pub use error::DomainError;
pub use identity::{IdentityProvider, Session, SessionEvent, SessionId};
pub use invitation::{Invitation, InvitationRepository, InviteError, InviteToken};
pub use profile::{Profile, ProfileRepository};
pub use team::{Team, TeamId, TeamRepository};
