//! Audit log read service
//!
//! Joins recent audit entries with the profiles of their actors. Actor
//! resolution is one batched lookup over the distinct user ids in the page,
//! not a query per entry.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::account::AccountId;
use crate::domain::audit::{ActorProfile, AuditLogRepository, CorrelatedAuditEntry};
use crate::domain::profile::ProfileRepository;
use crate::domain::DomainError;

/// Default page size for the audit view
pub const DEFAULT_AUDIT_PAGE_SIZE: usize = 100;

/// Service for reading the audit log with resolved actors
#[derive(Debug)]
pub struct AuditService {
    audit: Arc<dyn AuditLogRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl AuditService {
    pub fn new(audit: Arc<dyn AuditLogRepository>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { audit, profiles }
    }

    /// Fetch the most recent entries, newest first, each joined with its
    /// actor's profile
    ///
    /// Entries whose actor has no profile get a fixed "Unknown" placeholder
    /// rather than being dropped.
    pub async fn list_recent(
        &self,
        limit: usize,
    ) -> Result<Vec<CorrelatedAuditEntry>, DomainError> {
        let entries = self.audit.list_recent(limit).await?;

        let user_ids: Vec<AccountId> = entries
            .iter()
            .map(|e| e.user_id())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let profiles = self.profiles.get_many(&user_ids).await?;

        tracing::debug!(
            entries = entries.len(),
            actors = user_ids.len(),
            resolved = profiles.len(),
            "Correlated audit page"
        );

        Ok(entries
            .into_iter()
            .map(|entry| {
                let actor = profiles
                    .get(&entry.user_id())
                    .map(ActorProfile::from)
                    .unwrap_or_else(ActorProfile::unknown);

                CorrelatedAuditEntry::new(entry, actor)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::Role;
    use crate::domain::audit::{AuditAction, AuditLogEntry};
    use crate::domain::profile::Profile;
    use crate::infrastructure::audit::InMemoryAuditLogRepository;
    use crate::infrastructure::profile::InMemoryProfileRepository;
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Wrapper that counts batch lookups
    #[derive(Debug)]
    struct CountingProfileRepository {
        inner: InMemoryProfileRepository,
        get_many_calls: AtomicUsize,
    }

    impl CountingProfileRepository {
        fn new() -> Self {
            Self {
                inner: InMemoryProfileRepository::new(),
                get_many_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ProfileRepository for CountingProfileRepository {
        async fn get(&self, user_id: &AccountId) -> Result<Option<Profile>, DomainError> {
            self.inner.get(user_id).await
        }

        async fn upsert(&self, profile: Profile) -> Result<Profile, DomainError> {
            self.inner.upsert(profile).await
        }

        async fn get_many(
            &self,
            user_ids: &[AccountId],
        ) -> Result<HashMap<AccountId, Profile>, DomainError> {
            self.get_many_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.get_many(user_ids).await
        }
    }

    fn entry_for(user_id: AccountId, offset_secs: i64) -> AuditLogEntry {
        AuditLogEntry::new(user_id, AuditAction::SessionStarted, json!({}))
            .with_created_at(Utc::now() + Duration::seconds(offset_secs))
    }

    #[tokio::test]
    async fn test_entries_join_actor_profiles() {
        let audit = Arc::new(InMemoryAuditLogRepository::new());
        let profiles = Arc::new(InMemoryProfileRepository::new());

        let actor = AccountId::generate();
        profiles
            .upsert(Profile::new(actor, "Ada", "ada@x.com", Role::Admin, None))
            .await
            .unwrap();
        audit.append(entry_for(actor, 0)).await.unwrap();

        let service = AuditService::new(audit, profiles);
        let page = service.list_recent(10).await.unwrap();

        assert_eq!(page.len(), 1);
        assert_eq!(page[0].actor().name, "Ada");
        assert_eq!(page[0].actor().email, "ada@x.com");
    }

    #[tokio::test]
    async fn test_missing_actor_gets_unknown_placeholder() {
        let audit = Arc::new(InMemoryAuditLogRepository::new());
        let profiles = Arc::new(InMemoryProfileRepository::new());

        audit
            .append(entry_for(AccountId::generate(), 0))
            .await
            .unwrap();

        let service = AuditService::new(audit, profiles);
        let page = service.list_recent(10).await.unwrap();

        assert_eq!(page.len(), 1);
        assert_eq!(page[0].actor().name, "Unknown");
        assert_eq!(page[0].actor().email, "unknown@example.com");
    }

    #[tokio::test]
    async fn test_one_batched_lookup_per_page() {
        let audit = Arc::new(InMemoryAuditLogRepository::new());
        let profiles = Arc::new(CountingProfileRepository::new());

        let first = AccountId::generate();
        let second = AccountId::generate();

        // Multiple entries per actor; resolution stays a single batch
        for offset in 0..3 {
            audit.append(entry_for(first, -offset)).await.unwrap();
            audit.append(entry_for(second, -offset)).await.unwrap();
        }

        let service = AuditService::new(audit, profiles.clone());
        let page = service.list_recent(10).await.unwrap();

        assert_eq!(page.len(), 6);
        assert_eq!(profiles.get_many_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_page_is_newest_first() {
        let audit = Arc::new(InMemoryAuditLogRepository::new());
        let profiles = Arc::new(InMemoryProfileRepository::new());

        let actor = AccountId::generate();
        let oldest = audit.append(entry_for(actor, -30)).await.unwrap();
        let newest = audit.append(entry_for(actor, 0)).await.unwrap();

        let service = AuditService::new(audit, profiles);
        let page = service.list_recent(10).await.unwrap();

        assert_eq!(page[0].entry().id(), newest.id());
        assert_eq!(page[1].entry().id(), oldest.id());
    }
}
