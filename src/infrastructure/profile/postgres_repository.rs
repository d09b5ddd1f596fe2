//! PostgreSQL profile repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::account::{AccountId, Role};
use crate::domain::profile::{Profile, ProfileRepository};
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// PostgreSQL implementation of ProfileRepository
#[derive(Debug, Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn get(&self, user_id: &AccountId) -> Result<Option<Profile>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, name, email, role, team_id, created_at
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get profile: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_profile(&row)?)),
            None => Ok(None),
        }
    }

    async fn upsert(&self, profile: Profile) -> Result<Profile, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO profiles (user_id, name, email, role, team_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id) DO UPDATE
            SET name = EXCLUDED.name, email = EXCLUDED.email,
                role = EXCLUDED.role, team_id = EXCLUDED.team_id
            "#,
        )
        .bind(profile.user_id().as_uuid())
        .bind(profile.name())
        .bind(profile.email())
        .bind(profile.role().as_str())
        .bind(profile.team_id().map(|t| t.as_str()))
        .bind(profile.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to upsert profile: {}", e)))?;

        Ok(profile)
    }

    async fn get_many(
        &self,
        user_ids: &[AccountId],
    ) -> Result<HashMap<AccountId, Profile>, DomainError> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let ids: Vec<Uuid> = user_ids.iter().map(|id| id.as_uuid()).collect();

        let rows = sqlx::query(
            r#"
            SELECT user_id, name, email, role, team_id, created_at
            FROM profiles
            WHERE user_id = ANY($1)
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to fetch profiles: {}", e)))?;

        let mut profiles = HashMap::with_capacity(rows.len());

        for row in rows {
            let profile = row_to_profile(&row)?;
            profiles.insert(profile.user_id(), profile);
        }

        Ok(profiles)
    }
}

fn row_to_profile(row: &sqlx::postgres::PgRow) -> Result<Profile, DomainError> {
    let user_id: Uuid = row.get("user_id");
    let name: String = row.get("name");
    let email: String = row.get("email");
    let role: String = row.get("role");
    let team_id: Option<String> = row.get("team_id");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");

    let role: Role = role
        .parse()
        .map_err(|e| DomainError::storage(format!("Invalid role in database: {}", e)))?;

    let team_id = team_id
        .map(TeamId::new)
        .transpose()
        .map_err(|e| DomainError::storage(format!("Invalid team ID in database: {}", e)))?;

    Ok(Profile::from_parts(
        AccountId::from(user_id),
        name,
        email,
        role,
        team_id,
        created_at,
    ))
}
