//! Profile entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::account::{Account, AccountId, Role};
use crate::domain::team::TeamId;

/// App-side mirror of an identity record
///
/// Written once at signup and read when correlating audit entries back to a
/// display name and email. Mutation of the underlying identity is the
/// provider's business; the mirror is best-effort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Identity the profile belongs to
    user_id: AccountId,
    /// Display name
    name: String,
    /// Email address
    email: String,
    /// Role copied from the identity record
    role: Role,
    /// Team affiliation, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    team_id: Option<TeamId>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(
        user_id: AccountId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        team_id: Option<TeamId>,
    ) -> Self {
        Self {
            user_id,
            name: name.into(),
            email: email.into(),
            role,
            team_id,
            created_at: Utc::now(),
        }
    }

    /// Restore a profile from its persisted fields
    pub fn from_parts(
        user_id: AccountId,
        name: String,
        email: String,
        role: Role,
        team_id: Option<TeamId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            name,
            email,
            role,
            team_id,
            created_at,
        }
    }

    // Getters

    pub fn user_id(&self) -> AccountId {
        self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
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

impl From<&Account> for Profile {
    fn from(account: &Account) -> Self {
        Self::new(
            account.id(),
            account.name(),
            account.email(),
            account.role(),
            account.team_id().cloned(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_account() {
        let team = TeamId::new("team-a").unwrap();
        let account = Account::new(
            AccountId::generate(),
            "a@x.com",
            "Ada",
            Role::Member,
            Some(team.clone()),
        );

        let profile = Profile::from(&account);

        assert_eq!(profile.user_id(), account.id());
        assert_eq!(profile.name(), "Ada");
        assert_eq!(profile.email(), "a@x.com");
        assert_eq!(profile.role(), Role::Member);
        assert_eq!(profile.team_id(), Some(&team));
    }
}
