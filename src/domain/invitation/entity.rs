//! Invitation entity and token type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::team::TeamId;

/// Opaque invitation token
///
/// No format is assumed beyond equality lookup; tokens produced by this crate
/// carry an `inv_` prefix but foreign tokens are accepted as-is.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InviteToken(String);

impl InviteToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short non-secret prefix, safe to put in logs and audit details
    pub fn prefix(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .map(|(i, _)| i)
            .nth(12)
            .unwrap_or(self.0.len());
        &self.0[..end]
    }
}

impl From<String> for InviteToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<InviteToken> for String {
    fn from(token: InviteToken) -> Self {
        token.0
    }
}

impl std::fmt::Display for InviteToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Tokens grant signup rights; keep the full value out of debug output.
impl std::fmt::Debug for InviteToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InviteToken({}…)", self.prefix())
    }
}

/// Invitation entity
///
/// An invitation is *usable* iff `used_at` is none and the current time is
/// before `expires_at`. Invitations are consumed at most once and never
/// deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invitation {
    /// Unique opaque token
    token: InviteToken,
    /// Email address the invitation was sent to
    email: String,
    /// Team the invitation grants membership of
    team_id: TeamId,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Expiry timestamp
    expires_at: DateTime<Utc>,
    /// Consumption timestamp, set exactly once
    #[serde(skip_serializing_if = "Option::is_none")]
    used_at: Option<DateTime<Utc>>,
}

impl Invitation {
    /// Create a new unused invitation
    pub fn new(
        token: InviteToken,
        email: impl Into<String>,
        team_id: TeamId,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            token,
            email: email.into(),
            team_id,
            created_at: Utc::now(),
            expires_at,
            used_at: None,
        }
    }

    /// Restore an invitation from its persisted fields
    pub fn from_parts(
        token: InviteToken,
        email: String,
        team_id: TeamId,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        used_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            token,
            email,
            team_id,
            created_at,
            expires_at,
            used_at,
        }
    }

    // Getters

    pub fn token(&self) -> &InviteToken {
        &self.token
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn used_at(&self) -> Option<DateTime<Utc>> {
        self.used_at
    }

    // Status checks

    pub fn is_used(&self) -> bool {
        self.used_at.is_some()
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Check usability at the given instant
    pub fn is_usable_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_used() && !self.is_expired_at(now)
    }

    /// Record consumption
    pub fn mark_used(&mut self, at: DateTime<Utc>) {
        self.used_at = Some(at);
    }
}
