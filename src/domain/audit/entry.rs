//! Audit log entry types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::account::AccountId;
use crate::domain::profile::Profile;

/// Kind of security-relevant action recorded in the audit log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuditAction {
    AccountCreated,
    SessionStarted,
    InvitationCreated,
    /// Forward-compatible catch-all for actions this version does not know
    Other(String),
}

impl AuditAction {
    pub fn as_str(&self) -> &str {
        match self {
            Self::AccountCreated => "account_created",
            Self::SessionStarted => "session_started",
            Self::InvitationCreated => "invitation_created",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for AuditAction {
    fn from(s: String) -> Self {
        match s.as_str() {
            "account_created" => Self::AccountCreated,
            "session_started" => Self::SessionStarted,
            "invitation_created" => Self::InvitationCreated,
            _ => Self::Other(s),
        }
    }
}

impl From<AuditAction> for String {
    fn from(action: AuditAction) -> Self {
        action.as_str().to_string()
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable, append-only audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Unique identifier
    id: Uuid,
    /// Acting identity
    user_id: AccountId,
    /// What happened
    action: AuditAction,
    /// Free-form structured payload
    details: Value,
    /// When it happened
    created_at: DateTime<Utc>,
}

impl AuditLogEntry {
    pub fn new(user_id: AccountId, action: AuditAction, details: Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            action,
            details,
            created_at: Utc::now(),
        }
    }

    /// Override the timestamp (builder pattern)
    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    /// Restore an entry from its persisted fields
    pub fn from_parts(
        id: Uuid,
        user_id: AccountId,
        action: AuditAction,
        details: Value,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            action,
            details,
            created_at,
        }
    }

    // Getters

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> AccountId {
        self.user_id
    }

    pub fn action(&self) -> &AuditAction {
        &self.action
    }

    pub fn details(&self) -> &Value {
        &self.details
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Display name and email of the actor behind an audit entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorProfile {
    pub name: String,
    pub email: String,
}

impl ActorProfile {
    /// Placeholder for actors with no resolvable profile
    pub fn unknown() -> Self {
        Self {
            name: "Unknown".to_string(),
            email: "unknown@example.com".to_string(),
        }
    }
}

impl From<&Profile> for ActorProfile {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name().to_string(),
            email: profile.email().to_string(),
        }
    }
}

/// An audit entry joined with its resolved actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelatedAuditEntry {
    entry: AuditLogEntry,
    actor: ActorProfile,
}

impl CorrelatedAuditEntry {
    pub fn new(entry: AuditLogEntry, actor: ActorProfile) -> Self {
        Self { entry, actor }
    }

    pub fn entry(&self) -> &AuditLogEntry {
        &self.entry
    }

    pub fn actor(&self) -> &ActorProfile {
        &self.actor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_round_trip() {
        assert_eq!(
            AuditAction::from("account_created".to_string()),
            AuditAction::AccountCreated
        );
        assert_eq!(
            AuditAction::from("password_changed".to_string()),
            AuditAction::Other("password_changed".to_string())
        );
        assert_eq!(AuditAction::SessionStarted.as_str(), "session_started");
    }

    #[test]
    fn test_entry_creation() {
        let actor = AccountId::generate();
        let entry = AuditLogEntry::new(
            actor,
            AuditAction::AccountCreated,
            json!({"email": "a@x.com"}),
        );

        assert_eq!(entry.user_id(), actor);
        assert_eq!(entry.action(), &AuditAction::AccountCreated);
        assert_eq!(entry.details()["email"], "a@x.com");
    }

    #[test]
    fn test_unknown_actor_placeholder() {
        let unknown = ActorProfile::unknown();

        assert_eq!(unknown.name, "Unknown");
        assert_eq!(unknown.email, "unknown@example.com");
    }
}
