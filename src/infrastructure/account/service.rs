//! Account provisioning: the two signup paths
//!
//! Self-serve signup creates an `admin` with no team. Invite-based signup is
//! consume-and-provision: validate the token, create the identity with the
//! `member` role and the invitation's team, then conditionally consume the
//! token. A provisioning failure leaves the invitation untouched, so the
//! invitee can retry with the same link.

use std::sync::Arc;

use crate::domain::account::{Account, SignupError, SignupRequest};
use crate::domain::identity::IdentityProvider;
use crate::domain::invitation::{InviteError, InviteToken};
use crate::domain::DomainError;

use crate::infrastructure::invitation::InvitationService;

/// Service coordinating identity creation with the invitation lifecycle
#[derive(Debug)]
pub struct ProvisionerService {
    provider: Arc<dyn IdentityProvider>,
    invitations: Arc<InvitationService>,
}

impl ProvisionerService {
    pub fn new(provider: Arc<dyn IdentityProvider>, invitations: Arc<InvitationService>) -> Self {
        Self {
            provider,
            invitations,
        }
    }

    /// Self-serve signup: creates an `admin` account with no team affiliation
    pub async fn sign_up_admin(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Account, SignupError> {
        self.provider
            .sign_up(SignupRequest::admin(email, password, name))
            .await
            .map_err(provider_error)
    }

    /// Invite-based signup: creates a `member` account on the invitation's
    /// team and consumes the token
    ///
    /// Ordering is validate, provision, consume. The token is only consumed
    /// after the identity exists; when a rival caller consumed it in between,
    /// the account stays provisioned but the call reports `AlreadyUsed`.
    pub async fn sign_up_with_invite(
        &self,
        token: &InviteToken,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Account, SignupError> {
        let view = self.invitations.validate(token).await?;

        let account = self
            .provider
            .sign_up(SignupRequest::member(
                email,
                password,
                name,
                view.team().id().clone(),
                token.clone(),
            ))
            .await
            .map_err(provider_error)?;

        if !self.invitations.consume(token).await? {
            tracing::warn!(
                token_prefix = token.prefix(),
                account_id = %account.id(),
                "Invitation consumed by a rival signup after validation"
            );
            return Err(SignupError::Invitation(InviteError::AlreadyUsed));
        }

        tracing::info!(
            account_id = %account.id(),
            team_id = %view.team().id(),
            "Member provisioned via invitation"
        );

        Ok(account)
    }
}

/// Map provider rejections to `Provisioning` with the message intact;
/// storage failures stay storage failures.
fn provider_error(error: DomainError) -> SignupError {
    match error {
        DomainError::Storage { .. } => SignupError::Storage(error),
        other => SignupError::provisioning(other.to_string()),
    }
}
