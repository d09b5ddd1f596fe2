//! In-memory invitation repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::invitation::{Invitation, InvitationRepository, InviteToken};
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// In-memory implementation of InvitationRepository
#[derive(Debug, Default)]
pub struct InMemoryInvitationRepository {
    invitations: Arc<RwLock<HashMap<String, Invitation>>>,
}

impl InMemoryInvitationRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InvitationRepository for InMemoryInvitationRepository {
    async fn get(&self, token: &InviteToken) -> Result<Option<Invitation>, DomainError> {
        let invitations = self.invitations.read().await;
        Ok(invitations.get(token.as_str()).cloned())
    }

    async fn create(&self, invitation: Invitation) -> Result<Invitation, DomainError> {
        let mut invitations = self.invitations.write().await;
        let token = invitation.token().as_str().to_string();

        if invitations.contains_key(&token) {
            return Err(DomainError::conflict(
                "Invitation with this token already exists",
            ));
        }

        invitations.insert(token, invitation.clone());
        Ok(invitation)
    }

    async fn consume(&self, token: &InviteToken, at: DateTime<Utc>) -> Result<bool, DomainError> {
        // Single guarded write under the lock, mirroring a conditional
        // `used_at IS NULL` update: only the first caller wins.
        let mut invitations = self.invitations.write().await;

        match invitations.get_mut(token.as_str()) {
            Some(invitation) if !invitation.is_used() => {
                invitation.mark_used(at);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn list_for_team(&self, team_id: &TeamId) -> Result<Vec<Invitation>, DomainError> {
        let invitations = self.invitations.read().await;

        let mut result: Vec<Invitation> = invitations
            .values()
            .filter(|i| i.team_id() == team_id)
            .cloned()
            .collect();

        result.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        Ok(result)
    }
}
