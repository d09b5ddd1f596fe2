//! Invitation service: validation, creation, and consumption

use chrono::{Duration, Utc};
use serde_json::json;
use std::sync::Arc;

use crate::domain::account::{validate_email, AccountId};
use crate::domain::audit::{AuditAction, AuditLogEntry, AuditLogRepository};
use crate::domain::invitation::{Invitation, InvitationRepository, InviteError, InviteToken};
use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::DomainError;

use super::generator::InviteTokenGenerator;

/// A usable invitation joined with its owning team
#[derive(Debug, Clone)]
pub struct InvitationView {
    invitation: Invitation,
    team: Team,
}

impl InvitationView {
    pub fn invitation(&self) -> &Invitation {
        &self.invitation
    }

    pub fn team(&self) -> &Team {
        &self.team
    }
}

/// Request for creating a new invitation
#[derive(Debug, Clone)]
pub struct CreateInviteRequest {
    pub email: String,
    pub team_id: TeamId,
    /// Admin issuing the invitation, recorded in the audit trail
    pub created_by: AccountId,
}

/// Service for the invitation lifecycle
///
/// Validation is read-only and fails closed: a storage failure on the read
/// path is reported as `NotFound` rather than leaking ambiguity to signup.
#[derive(Debug)]
pub struct InvitationService {
    invitations: Arc<dyn InvitationRepository>,
    teams: Arc<dyn TeamRepository>,
    audit: Arc<dyn AuditLogRepository>,
    generator: InviteTokenGenerator,
    expires_in: Duration,
}

impl InvitationService {
    /// Create a new invitation service with the default token generator and
    /// a 7-day expiry
    pub fn new(
        invitations: Arc<dyn InvitationRepository>,
        teams: Arc<dyn TeamRepository>,
        audit: Arc<dyn AuditLogRepository>,
    ) -> Self {
        Self {
            invitations,
            teams,
            audit,
            generator: InviteTokenGenerator::default(),
            expires_in: Duration::days(7),
        }
    }

    /// Override the invitation lifetime (builder pattern)
    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Override the token generator (builder pattern)
    pub fn with_generator(mut self, generator: InviteTokenGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Check whether a token is usable and resolve its team
    ///
    /// The refusal causes are distinguished: `NotFound`, `AlreadyUsed`, and
    /// `Expired`. Read-path storage failures fail closed as `NotFound`.
    pub async fn validate(&self, token: &InviteToken) -> Result<InvitationView, InviteError> {
        let invitation = match self.invitations.get(token).await {
            Ok(Some(invitation)) => invitation,
            Ok(None) => return Err(InviteError::NotFound),
            Err(e) => {
                tracing::warn!(error = %e, "Invitation lookup failed; failing closed");
                return Err(InviteError::NotFound);
            }
        };

        if invitation.is_used() {
            return Err(InviteError::AlreadyUsed);
        }

        if invitation.is_expired_at(Utc::now()) {
            return Err(InviteError::Expired);
        }

        let team = match self.teams.get(invitation.team_id()).await {
            Ok(Some(team)) => team,
            Ok(None) => {
                tracing::warn!(
                    team_id = %invitation.team_id(),
                    "Invitation references a missing team; failing closed"
                );
                return Err(InviteError::NotFound);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Team lookup failed; failing closed");
                return Err(InviteError::NotFound);
            }
        };

        Ok(InvitationView { invitation, team })
    }

    /// Issue a fresh invitation for a team
    ///
    /// Administrative action; `created_by` must identify the issuing admin.
    pub async fn create(&self, request: CreateInviteRequest) -> Result<Invitation, DomainError> {
        validate_email(&request.email).map_err(|e| DomainError::validation(e.to_string()))?;

        if !self.teams.exists(&request.team_id).await? {
            return Err(DomainError::not_found(format!(
                "Team '{}' not found",
                request.team_id
            )));
        }

        let token = self.generator.generate();
        let invitation = Invitation::new(
            token,
            &request.email,
            request.team_id.clone(),
            Utc::now() + self.expires_in,
        );

        let invitation = self.invitations.create(invitation).await?;

        self.audit
            .append(AuditLogEntry::new(
                request.created_by,
                AuditAction::InvitationCreated,
                json!({
                    "email": request.email,
                    "team_id": request.team_id.as_str(),
                    "token_prefix": invitation.token().prefix(),
                }),
            ))
            .await?;

        tracing::info!(
            team_id = %request.team_id,
            token_prefix = invitation.token().prefix(),
            "Invitation created"
        );

        Ok(invitation)
    }

    /// Conditionally mark an invitation used
    ///
    /// Returns `false` when a rival caller consumed the token first.
    pub async fn consume(&self, token: &InviteToken) -> Result<bool, DomainError> {
        self.invitations.consume(token, Utc::now()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::audit::InMemoryAuditLogRepository;
    use crate::infrastructure::invitation::InMemoryInvitationRepository;
    use crate::infrastructure::team::InMemoryTeamRepository;

    struct Fixture {
        service: InvitationService,
        invitations: Arc<InMemoryInvitationRepository>,
        audit: Arc<InMemoryAuditLogRepository>,
    }

    fn fixture() -> Fixture {
        let invitations = Arc::new(InMemoryInvitationRepository::new());
        let audit = Arc::new(InMemoryAuditLogRepository::new());

        let team = Team::new(TeamId::new("team-a").unwrap(), "Team A")
            .unwrap()
            .with_description("The first team");
        let teams = Arc::new(InMemoryTeamRepository::with_teams(vec![team]));

        let service = InvitationService::new(invitations.clone(), teams, audit.clone());

        Fixture {
            service,
            invitations,
            audit,
        }
    }

    fn team_a() -> TeamId {
        TeamId::new("team-a").unwrap()
    }

    #[tokio::test]
    async fn test_validate_unknown_token() {
        let f = fixture();

        let result = f.service.validate(&InviteToken::new("inv_missing")).await;
        assert_eq!(result.unwrap_err(), InviteError::NotFound);
    }

    #[tokio::test]
    async fn test_validate_used_token() {
        let f = fixture();
        let invitation = Invitation::new(
            InviteToken::new("inv_used"),
            "a@x.com",
            team_a(),
            Utc::now() + Duration::days(7),
        );
        let token = invitation.token().clone();

        f.invitations.create(invitation).await.unwrap();
        f.invitations.consume(&token, Utc::now()).await.unwrap();

        // Used wins over expiry: the token is still within its lifetime
        let result = f.service.validate(&token).await;
        assert_eq!(result.unwrap_err(), InviteError::AlreadyUsed);
    }

    #[tokio::test]
    async fn test_validate_expired_token() {
        let f = fixture();
        let invitation = Invitation::new(
            InviteToken::new("inv_expired"),
            "a@x.com",
            team_a(),
            Utc::now() - Duration::hours(1),
        );
        let token = invitation.token().clone();

        f.invitations.create(invitation).await.unwrap();

        let result = f.service.validate(&token).await;
        assert_eq!(result.unwrap_err(), InviteError::Expired);
    }

    #[tokio::test]
    async fn test_validate_fresh_token_joins_team() {
        let f = fixture();
        let invitation = Invitation::new(
            InviteToken::new("inv_fresh"),
            "a@x.com",
            team_a(),
            Utc::now() + Duration::days(7),
        );
        let token = invitation.token().clone();

        f.invitations.create(invitation).await.unwrap();

        let view = f.service.validate(&token).await.unwrap();

        assert_eq!(view.invitation().email(), "a@x.com");
        assert_eq!(view.team().name(), "Team A");
        assert_eq!(view.team().description(), Some("The first team"));
    }

    #[tokio::test]
    async fn test_create_issues_token_and_audits() {
        let f = fixture();
        let admin = AccountId::generate();

        let invitation = f
            .service
            .create(CreateInviteRequest {
                email: "new@x.com".to_string(),
                team_id: team_a(),
                created_by: admin,
            })
            .await
            .unwrap();

        assert!(invitation.token().as_str().starts_with("inv_"));
        assert!(!invitation.is_used());
        assert!(invitation.expires_at() > Utc::now());

        // The created token validates immediately
        f.service.validate(invitation.token()).await.unwrap();

        let entries = f.audit.list_recent(10).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].user_id(), admin);
        assert_eq!(entries[0].action(), &AuditAction::InvitationCreated);
        // The audit payload must not contain the full usable token
        assert!(entries[0].details()["token_prefix"]
            .as_str()
            .unwrap()
            .len() < invitation.token().as_str().len());
    }

    #[tokio::test]
    async fn test_create_for_missing_team() {
        let f = fixture();

        let result = f
            .service
            .create(CreateInviteRequest {
                email: "new@x.com".to_string(),
                team_id: TeamId::new("team-missing").unwrap(),
                created_by: AccountId::generate(),
            })
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_create_rejects_bad_email() {
        let f = fixture();

        let result = f
            .service
            .create(CreateInviteRequest {
                email: "not-an-email".to_string(),
                team_id: team_a(),
                created_by: AccountId::generate(),
            })
            .await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_custom_expiry() {
        let f = fixture();
        let service = InvitationService::new(
            f.invitations.clone(),
            Arc::new(InMemoryTeamRepository::with_teams(vec![Team::new(
                team_a(),
                "Team A",
            )
            .unwrap()])),
            f.audit.clone(),
        )
        .with_expires_in(Duration::hours(1));

        let invitation = service
            .create(CreateInviteRequest {
                email: "new@x.com".to_string(),
                team_id: team_a(),
                created_by: AccountId::generate(),
            })
            .await
            .unwrap();

        assert!(invitation.expires_at() <= Utc::now() + Duration::hours(1));
    }
}
