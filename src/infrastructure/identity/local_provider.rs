//! Local identity provider
//!
//! A self-contained implementation of [`IdentityProvider`]: accounts are held
//! in memory with Argon2-hashed credentials, sessions are opaque UUIDs, and
//! session changes go out over a broadcast channel. On signup it writes the
//! app-side profile mirror and the `account_created` audit entry, the work a
//! hosted identity backend would do with triggers.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use crate::domain::account::{
    validate_display_name, validate_email, validate_password, Account, AccountId, SignupRequest,
};
use crate::domain::audit::{AuditAction, AuditLogEntry, AuditLogRepository};
use crate::domain::identity::{IdentityProvider, Session, SessionEvent, SessionId};
use crate::domain::profile::{Profile, ProfileRepository};
use crate::domain::DomainError;

use super::password::PasswordHasher;

const EVENT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone)]
struct StoredAccount {
    account: Account,
    password_hash: String,
}

/// In-process implementation of the identity provider boundary
#[derive(Debug)]
pub struct LocalIdentityProvider {
    /// Accounts keyed by lowercased email
    accounts: Arc<RwLock<HashMap<String, StoredAccount>>>,
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
    hasher: Arc<dyn PasswordHasher>,
    profiles: Arc<dyn ProfileRepository>,
    audit: Arc<dyn AuditLogRepository>,
    events: broadcast::Sender<SessionEvent>,
}

impl LocalIdentityProvider {
    pub fn new(
        hasher: Arc<dyn PasswordHasher>,
        profiles: Arc<dyn ProfileRepository>,
        audit: Arc<dyn AuditLogRepository>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            hasher,
            profiles,
            audit,
            events,
        }
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    async fn sign_up(&self, request: SignupRequest) -> Result<Account, DomainError> {
        validate_email(&request.email).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(&request.password).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_display_name(&request.name).map_err(|e| DomainError::validation(e.to_string()))?;

        let email_key = request.email.to_lowercase();
        let password_hash = self.hasher.hash(&request.password)?;

        let account = {
            let mut accounts = self.accounts.write().await;

            if accounts.contains_key(&email_key) {
                return Err(DomainError::conflict(format!(
                    "An account with email '{}' already exists",
                    request.email
                )));
            }

            let account = Account::new(
                AccountId::generate(),
                &request.email,
                &request.name,
                request.role,
                request.team_id.clone(),
            );

            accounts.insert(
                email_key,
                StoredAccount {
                    account: account.clone(),
                    password_hash,
                },
            );

            account
        };

        self.profiles.upsert(Profile::from(&account)).await?;

        self.audit
            .append(AuditLogEntry::new(
                account.id(),
                AuditAction::AccountCreated,
                json!({
                    "email": account.email(),
                    "role": account.role().as_str(),
                    "team_id": account.team_id().map(|t| t.as_str()),
                    "invite_token_prefix": request.invite_token.as_ref().map(|t| t.prefix()),
                }),
            ))
            .await?;

        tracing::info!(
            account_id = %account.id(),
            role = %account.role(),
            "Account created"
        );

        Ok(account)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, DomainError> {
        let stored = {
            let accounts = self.accounts.read().await;
            accounts.get(&email.to_lowercase()).cloned()
        };

        // One failure message for both unknown email and bad password
        let stored = stored.ok_or_else(|| DomainError::credential("Invalid email or password"))?;

        if !self.hasher.verify(password, &stored.password_hash) {
            return Err(DomainError::credential("Invalid email or password"));
        }

        let session = Session::new(stored.account.clone());

        self.sessions
            .write()
            .await
            .insert(session.id(), session.clone());

        let _ = self.events.send(SessionEvent::SignedIn(session.clone()));

        self.audit
            .append(AuditLogEntry::new(
                stored.account.id(),
                AuditAction::SessionStarted,
                json!({ "email": stored.account.email() }),
            ))
            .await?;

        Ok(session)
    }

    async fn sign_out(&self, session_id: SessionId) -> Result<(), DomainError> {
        let removed = self.sessions.write().await.remove(&session_id);

        if removed.is_some() {
            let _ = self.events.send(SessionEvent::SignedOut(session_id));
        }

        Ok(())
    }

    async fn session(&self, session_id: SessionId) -> Result<Option<Session>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(&session_id).cloned())
    }

    fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }
}
