//! In-memory profile repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::account::AccountId;
use crate::domain::profile::{Profile, ProfileRepository};
use crate::domain::DomainError;

/// In-memory implementation of ProfileRepository
#[derive(Debug, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<AccountId, Profile>>>,
}

impl InMemoryProfileRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get(&self, user_id: &AccountId) -> Result<Option<Profile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(user_id).cloned())
    }

    async fn upsert(&self, profile: Profile) -> Result<Profile, DomainError> {
        let mut profiles = self.profiles.write().await;
        profiles.insert(profile.user_id(), profile.clone());
        Ok(profile)
    }

    async fn get_many(
        &self,
        user_ids: &[AccountId],
    ) -> Result<HashMap<AccountId, Profile>, DomainError> {
        let profiles = self.profiles.read().await;

        Ok(user_ids
            .iter()
            .filter_map(|id| profiles.get(id).map(|p| (*id, p.clone())))
            .collect())
    }
}
