//! Database migrations

use sqlx::postgres::PgPool;

use crate::domain::DomainError;

/// A single versioned migration
#[derive(Debug, Clone)]
pub struct Migration {
    pub version: i64,
    pub description: &'static str,
    pub up: &'static str,
}

/// The full ordered migration set for this crate's schema
pub fn migrations() -> Vec<Migration> {
    vec![
        Migration {
            version: 1,
            description: "create teams",
            up: r#"
                CREATE TABLE IF NOT EXISTS teams (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    description TEXT,
                    created_at TIMESTAMPTZ NOT NULL,
                    updated_at TIMESTAMPTZ NOT NULL
                )
            "#,
        },
        Migration {
            version: 2,
            description: "create invitations",
            up: r#"
                CREATE TABLE IF NOT EXISTS invitations (
                    token TEXT PRIMARY KEY,
                    email TEXT NOT NULL,
                    team_id TEXT NOT NULL REFERENCES teams(id),
                    created_at TIMESTAMPTZ NOT NULL,
                    expires_at TIMESTAMPTZ NOT NULL,
                    used_at TIMESTAMPTZ
                )
            "#,
        },
        Migration {
            version: 3,
            description: "create profiles",
            up: r#"
                CREATE TABLE IF NOT EXISTS profiles (
                    user_id UUID PRIMARY KEY,
                    name TEXT NOT NULL,
                    email TEXT NOT NULL,
                    role TEXT NOT NULL,
                    team_id TEXT,
                    created_at TIMESTAMPTZ NOT NULL
                )
            "#,
        },
        Migration {
            version: 4,
            description: "create audit_logs",
            up: r#"
                CREATE TABLE IF NOT EXISTS audit_logs (
                    id UUID PRIMARY KEY,
                    user_id UUID NOT NULL,
                    action TEXT NOT NULL,
                    details JSONB NOT NULL DEFAULT '{}'::jsonb,
                    created_at TIMESTAMPTZ NOT NULL
                )
            "#,
        },
        Migration {
            version: 5,
            description: "index audit_logs by recency",
            up: r#"
                CREATE INDEX IF NOT EXISTS idx_audit_logs_created_at
                    ON audit_logs (created_at DESC)
            "#,
        },
    ]
}

/// PostgreSQL migrator tracking applied versions in a `_migrations` table
#[derive(Debug)]
pub struct PostgresMigrator {
    pool: PgPool,
}

impl PostgresMigrator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the migrations table if it doesn't exist
    async fn ensure_migrations_table(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS _migrations (
                version BIGINT PRIMARY KEY,
                description TEXT NOT NULL,
                installed_on TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create migrations table: {}", e)))?;

        Ok(())
    }

    /// Runs a single migration if it has not been applied yet
    async fn run_migration(&self, migration: &Migration) -> Result<(), DomainError> {
        let applied: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM _migrations WHERE version = $1)")
                .bind(migration.version)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::storage(format!("Failed to check migration status: {}", e))
                })?;

        if applied {
            return Ok(());
        }

        sqlx::query(migration.up)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to run migration {}: {}",
                    migration.version, e
                ))
            })?;

        sqlx::query("INSERT INTO _migrations (version, description) VALUES ($1, $2)")
            .bind(migration.version)
            .bind(migration.description)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to record migration {}: {}",
                    migration.version, e
                ))
            })?;

        tracing::info!(
            version = migration.version,
            description = migration.description,
            "Applied migration"
        );

        Ok(())
    }

    /// Runs all pending migrations in order
    pub async fn run(&self) -> Result<(), DomainError> {
        self.ensure_migrations_table().await?;

        for migration in migrations() {
            self.run_migration(&migration).await?;
        }

        Ok(())
    }

    /// Returns the latest applied migration version
    pub async fn version(&self) -> Result<Option<i64>, DomainError> {
        self.ensure_migrations_table().await?;

        sqlx::query_scalar("SELECT MAX(version) FROM _migrations")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to read migration version: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_ordered() {
        let set = migrations();

        assert!(!set.is_empty());
        for window in set.windows(2) {
            assert!(window[0].version < window[1].version);
        }
    }
}
