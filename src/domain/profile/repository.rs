//! Profile repository trait

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;

use super::entity::Profile;
use crate::domain::account::AccountId;
use crate::domain::DomainError;

/// Repository trait for profile storage
#[async_trait]
pub trait ProfileRepository: Send + Sync + Debug {
    /// Get a profile by its owning identity
    async fn get(&self, user_id: &AccountId) -> Result<Option<Profile>, DomainError>;

    /// Insert or replace a profile
    async fn upsert(&self, profile: Profile) -> Result<Profile, DomainError>;

    /// Fetch profiles for exactly the given set of identities in one call
    ///
    /// Identities with no profile are simply absent from the result; callers
    /// decide how to fill the gap.
    async fn get_many(
        &self,
        user_ids: &[AccountId],
    ) -> Result<HashMap<AccountId, Profile>, DomainError>;
}
