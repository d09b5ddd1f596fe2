//! Account entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::team::TeamId;

/// Account identifier assigned by the identity provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for AccountId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse authorization role, fixed at account creation by the signup path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Self-serve signup - owns a workspace
    Admin,
    /// Invite-based signup - joins an existing team
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// Account identity record
///
/// The password credential is opaque to this type; only the identity
/// provider holds (a hash of) it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    id: AccountId,
    /// Email address, unique per provider
    email: String,
    /// Display name
    name: String,
    /// Authorization role - never mutated after creation
    role: Role,
    /// Team affiliation; admins created via self-serve signup have none
    #[serde(skip_serializing_if = "Option::is_none")]
    team_id: Option<TeamId>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account record
    pub fn new(
        id: AccountId,
        email: impl Into<String>,
        name: impl Into<String>,
        role: Role,
        team_id: Option<TeamId>,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            name: name.into(),
            role,
            team_id,
            created_at: Utc::now(),
        }
    }

    // Getters

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn team_id(&self) -> Option<&TeamId> {
        self.team_id.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("member".parse::<Role>().unwrap(), Role::Member);
        assert!("owner".parse::<Role>().is_err());
        assert_eq!(Role::Admin.as_str(), "admin");
    }

    #[test]
    fn test_account_creation() {
        let team = TeamId::new("team-a").unwrap();
        let account = Account::new(
            AccountId::generate(),
            "a@x.com",
            "Ada",
            Role::Member,
            Some(team.clone()),
        );

        assert_eq!(account.email(), "a@x.com");
        assert_eq!(account.role(), Role::Member);
        assert_eq!(account.team_id(), Some(&team));
    }

    #[test]
    fn test_admin_account_has_no_team() {
        let account = Account::new(AccountId::generate(), "b@x.com", "B", Role::Admin, None);

        assert!(account.role().is_admin());
        assert!(account.team_id().is_none());
    }
}
