//! Identity provider trait

use async_trait::async_trait;
use std::fmt::Debug;
use tokio::sync::broadcast;

use super::session::{Session, SessionEvent, SessionId};
use crate::domain::account::{Account, SignupRequest};
use crate::domain::DomainError;

/// Boundary to the identity subsystem
///
/// Account creation, credential checks, and session state live behind this
/// trait; the rest of the core treats identities as opaque. Provider
/// rejections (duplicate email, weak password) come back as errors whose
/// messages callers surface verbatim.
#[async_trait]
pub trait IdentityProvider: Send + Sync + Debug {
    /// Create an identity with the role and team affiliation the signup path
    /// decided
    async fn sign_up(&self, request: SignupRequest) -> Result<Account, DomainError>;

    /// Authenticate with email and password, starting a session
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, DomainError>;

    /// End a session; a no-op when the session is already gone
    async fn sign_out(&self, session_id: SessionId) -> Result<(), DomainError>;

    /// Look up a live session
    async fn session(&self, session_id: SessionId) -> Result<Option<Session>, DomainError>;

    /// Subscribe to session state changes
    fn subscribe(&self) -> broadcast::Receiver<SessionEvent>;
}
