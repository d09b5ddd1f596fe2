//! Time Tracker Core
//!
//! Invitation lifecycle and audit correlation for a team time-tracking
//! backend:
//! - Invite-token validation, creation, and single-use consumption
//! - Two signup paths: self-serve admins and invite-based members
//! - A local identity provider with sessions and change events
//! - An append-only audit log with batched actor resolution

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use chrono::Duration;
use sqlx::PgPool;

use domain::audit::AuditLogRepository;
use domain::identity::IdentityProvider;
use domain::invitation::InvitationRepository;
use domain::profile::ProfileRepository;
use domain::team::TeamRepository;
use infrastructure::account::ProvisionerService;
use infrastructure::audit::{
    AuditService, InMemoryAuditLogRepository, PostgresAuditLogRepository,
};
use infrastructure::identity::{Argon2Hasher, LocalIdentityProvider};
use infrastructure::invitation::{
    InMemoryInvitationRepository, InvitationService, PostgresInvitationRepository,
};
use infrastructure::profile::{InMemoryProfileRepository, PostgresProfileRepository};
use infrastructure::team::{InMemoryTeamRepository, PostgresTeamRepository};

/// Wired-up application core
///
/// Bundles the repositories and services behind a single constructor per
/// backend. Embedders grab the services they need; everything is
/// reference-counted and cheap to clone out.
#[derive(Debug)]
pub struct Core {
    pub teams: Arc<dyn TeamRepository>,
    pub invitations: Arc<InvitationService>,
    pub provisioner: Arc<ProvisionerService>,
    pub identity: Arc<dyn IdentityProvider>,
    pub audit: Arc<AuditService>,
}

impl Core {
    /// Build a core backed entirely by in-memory stores
    pub fn in_memory(config: &AppConfig) -> Self {
        let teams: Arc<dyn TeamRepository> = Arc::new(InMemoryTeamRepository::new());
        let invitations: Arc<dyn InvitationRepository> =
            Arc::new(InMemoryInvitationRepository::new());
        let profiles: Arc<dyn ProfileRepository> = Arc::new(InMemoryProfileRepository::new());
        let audit_log: Arc<dyn AuditLogRepository> = Arc::new(InMemoryAuditLogRepository::new());

        Self::wire(config, teams, invitations, profiles, audit_log)
    }

    /// Build a core backed by PostgreSQL
    ///
    /// The pool is shared across repositories. Run
    /// [`infrastructure::storage::PostgresMigrator`] before serving traffic.
    pub fn postgres(config: &AppConfig, pool: PgPool) -> Self {
        let teams: Arc<dyn TeamRepository> = Arc::new(PostgresTeamRepository::new(pool.clone()));
        let invitations: Arc<dyn InvitationRepository> =
            Arc::new(PostgresInvitationRepository::new(pool.clone()));
        let profiles: Arc<dyn ProfileRepository> =
            Arc::new(PostgresProfileRepository::new(pool.clone()));
        let audit_log: Arc<dyn AuditLogRepository> =
            Arc::new(PostgresAuditLogRepository::new(pool));

        Self::wire(config, teams, invitations, profiles, audit_log)
    }

    fn wire(
        config: &AppConfig,
        teams: Arc<dyn TeamRepository>,
        invitations: Arc<dyn InvitationRepository>,
        profiles: Arc<dyn ProfileRepository>,
        audit_log: Arc<dyn AuditLogRepository>,
    ) -> Self {
        let invitation_service = Arc::new(
            InvitationService::new(invitations, teams.clone(), audit_log.clone())
                .with_expires_in(Duration::days(config.invitations.expires_in_days)),
        );

        let identity: Arc<dyn IdentityProvider> = Arc::new(LocalIdentityProvider::new(
            Arc::new(Argon2Hasher::new()),
            profiles.clone(),
            audit_log.clone(),
        ));

        let provisioner = Arc::new(ProvisionerService::new(
            identity.clone(),
            invitation_service.clone(),
        ));

        let audit = Arc::new(AuditService::new(audit_log, profiles));

        Self {
            teams,
            invitations: invitation_service,
            provisioner,
            identity,
            audit,
        }
    }
}
