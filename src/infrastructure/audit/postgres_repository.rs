//! PostgreSQL audit log repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::account::AccountId;
use crate::domain::audit::{AuditAction, AuditLogEntry, AuditLogRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of AuditLogRepository
#[derive(Debug, Clone)]
pub struct PostgresAuditLogRepository {
    pool: PgPool,
}

impl PostgresAuditLogRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for PostgresAuditLogRepository {
    async fn append(&self, entry: AuditLogEntry) -> Result<AuditLogEntry, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO audit_logs (id, user_id, action, details, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(entry.id())
        .bind(entry.user_id().as_uuid())
        .bind(entry.action().as_str())
        .bind(entry.details())
        .bind(entry.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to append audit entry: {}", e)))?;

        Ok(entry)
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<AuditLogEntry>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, action, details, created_at
            FROM audit_logs
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list audit entries: {}", e)))?;

        rows.iter().map(row_to_entry).collect()
    }
}

fn row_to_entry(row: &sqlx::postgres::PgRow) -> Result<AuditLogEntry, DomainError> {
    let id: Uuid = row.get("id");
    let user_id: Uuid = row.get("user_id");
    let action: String = row.get("action");
    let details: serde_json::Value = row.get("details");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");

    Ok(AuditLogEntry::from_parts(
        id,
        AccountId::from(user_id),
        AuditAction::from(action),
        details,
        created_at,
    ))
}
