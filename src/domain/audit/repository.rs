//! Audit log repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entry::AuditLogEntry;
use crate::domain::DomainError;

/// Repository trait for the append-only audit log
///
/// Entries are immutable once written; there is deliberately no update or
/// delete operation.
#[async_trait]
pub trait AuditLogRepository: Send + Sync + Debug {
    /// Append an entry
    async fn append(&self, entry: AuditLogEntry) -> Result<AuditLogEntry, DomainError>;

    /// Fetch the most recent entries, ordered by timestamp descending
    async fn list_recent(&self, limit: usize) -> Result<Vec<AuditLogEntry>, DomainError>;
}
