//! Session types and change events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::account::Account;

/// Opaque session identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An authenticated session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    account: Account,
    started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(account: Account) -> Self {
        Self {
            id: SessionId::generate(),
            account,
            started_at: Utc::now(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

/// Identity/session state change, broadcast to subscribers
///
/// This replaces an ambient "current session" global: interested consumers
/// subscribe and keep their own view of the state.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    SignedIn(Session),
    SignedOut(SessionId),
}
