//! In-memory audit log repository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::audit::{AuditLogEntry, AuditLogRepository};
use crate::domain::DomainError;

/// In-memory implementation of AuditLogRepository
#[derive(Debug, Default)]
pub struct InMemoryAuditLogRepository {
    entries: Arc<RwLock<Vec<AuditLogEntry>>>,
}

impl InMemoryAuditLogRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryAuditLogRepository {
    async fn append(&self, entry: AuditLogEntry) -> Result<AuditLogEntry, DomainError> {
        let mut entries = self.entries.write().await;
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<AuditLogEntry>, DomainError> {
        let entries = self.entries.read().await;

        let mut recent: Vec<AuditLogEntry> = entries.clone();
        recent.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        recent.truncate(limit);

        Ok(recent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::AccountId;
    use crate::domain::audit::AuditAction;
    use chrono::{Duration, Utc};
    use serde_json::json;

    fn entry_at(offset_secs: i64) -> AuditLogEntry {
        AuditLogEntry::new(AccountId::generate(), AuditAction::SessionStarted, json!({}))
            .with_created_at(Utc::now() + Duration::seconds(offset_secs))
    }

    #[tokio::test]
    async fn test_list_recent_orders_newest_first() {
        let repo = InMemoryAuditLogRepository::new();

        let oldest = repo.append(entry_at(-20)).await.unwrap();
        let newest = repo.append(entry_at(0)).await.unwrap();
        let middle = repo.append(entry_at(-10)).await.unwrap();

        let entries = repo.list_recent(10).await.unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].id(), newest.id());
        assert_eq!(entries[1].id(), middle.id());
        assert_eq!(entries[2].id(), oldest.id());
    }

    #[tokio::test]
    async fn test_list_recent_respects_limit() {
        let repo = InMemoryAuditLogRepository::new();

        for offset in 0..5 {
            repo.append(entry_at(-offset)).await.unwrap();
        }

        let entries = repo.list_recent(2).await.unwrap();
        assert_eq!(entries.len(), 2);
    }
}
