//! Signup request and error types

use thiserror::Error;

use super::entity::Role;
use crate::domain::invitation::{InviteError, InviteToken};
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// Request for creating a new identity
///
/// The role is an explicit, typed field rather than free-form metadata: the
/// signup path decides it and the identity provider records it verbatim.
#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    pub team_id: Option<TeamId>,
    /// Token the signup was made through, carried for audit attribution
    pub invite_token: Option<InviteToken>,
}

impl SignupRequest {
    /// Self-serve signup: role `admin`, no team affiliation
    pub fn admin(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
            role: Role::Admin,
            team_id: None,
            invite_token: None,
        }
    }

    /// Invite-based signup: role `member`, team taken from the invitation
    pub fn member(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        team_id: TeamId,
        invite_token: InviteToken,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
            role: Role::Member,
            team_id: Some(team_id),
            invite_token: Some(invite_token),
        }
    }
}

/// Errors surfaced by the provisioning operations
#[derive(Debug, Error)]
pub enum SignupError {
    /// The invitation cannot be used; the cause is tagged
    #[error("Invalid invitation: {0}")]
    Invitation(#[from] InviteError),

    /// The identity provider rejected the signup; message passed through
    /// verbatim
    #[error("Provisioning failed: {message}")]
    Provisioning { message: String },

    /// Write-path storage failure, surfaced as-is
    #[error(transparent)]
    Storage(#[from] DomainError),
}

impl SignupError {
    pub fn provisioning(message: impl Into<String>) -> Self {
        Self::Provisioning {
            message: message.into(),
        }
    }
}
