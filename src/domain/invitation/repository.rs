//! Invitation repository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt::Debug;

use super::entity::{Invitation, InviteToken};
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// Repository trait for invitation storage
#[async_trait]
pub trait InvitationRepository: Send + Sync + Debug {
    /// Get an invitation by its token, used or not
    async fn get(&self, token: &InviteToken) -> Result<Option<Invitation>, DomainError>;

    /// Create a new invitation
    async fn create(&self, invitation: Invitation) -> Result<Invitation, DomainError>;

    /// Conditionally mark an invitation used
    ///
    /// The write only succeeds for an existing, still-unused token (a single
    /// `used_at IS NULL` guarded update). Returns `true` when this caller won
    /// the consumption; `false` means the token was absent or a rival caller
    /// consumed it first.
    async fn consume(&self, token: &InviteToken, at: DateTime<Utc>) -> Result<bool, DomainError>;

    /// List invitations belonging to a team, newest first
    async fn list_for_team(&self, team_id: &TeamId) -> Result<Vec<Invitation>, DomainError>;
}
