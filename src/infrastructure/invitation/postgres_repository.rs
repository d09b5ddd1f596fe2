//! PostgreSQL invitation repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::domain::invitation::{Invitation, InvitationRepository, InviteToken};
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// PostgreSQL implementation of InvitationRepository
#[derive(Debug, Clone)]
pub struct PostgresInvitationRepository {
    pool: PgPool,
}

impl PostgresInvitationRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvitationRepository for PostgresInvitationRepository {
    async fn get(&self, token: &InviteToken) -> Result<Option<Invitation>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT token, email, team_id, created_at, expires_at, used_at
            FROM invitations
            WHERE token = $1
            "#,
        )
        .bind(token.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get invitation: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_invitation(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, invitation: Invitation) -> Result<Invitation, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO invitations (token, email, team_id, created_at, expires_at, used_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(invitation.token().as_str())
        .bind(invitation.email())
        .bind(invitation.team_id().as_str())
        .bind(invitation.created_at())
        .bind(invitation.expires_at())
        .bind(invitation.used_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict("Invitation with this token already exists")
            } else {
                DomainError::storage(format!("Failed to create invitation: {}", e))
            }
        })?;

        Ok(invitation)
    }

    async fn consume(&self, token: &InviteToken, at: DateTime<Utc>) -> Result<bool, DomainError> {
        // The `used_at IS NULL` guard makes consumption at-most-once; the
        // row count tells this caller whether it won.
        let result = sqlx::query(
            r#"
            UPDATE invitations
            SET used_at = $2
            WHERE token = $1 AND used_at IS NULL
            "#,
        )
        .bind(token.as_str())
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to consume invitation: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_for_team(&self, team_id: &TeamId) -> Result<Vec<Invitation>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT token, email, team_id, created_at, expires_at, used_at
            FROM invitations
            WHERE team_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(team_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list invitations: {}", e)))?;

        let mut invitations = Vec::with_capacity(rows.len());

        for row in rows {
            invitations.push(row_to_invitation(&row)?);
        }

        Ok(invitations)
    }
}

fn row_to_invitation(row: &sqlx::postgres::PgRow) -> Result<Invitation, DomainError> {
    let token: String = row.get("token");
    let email: String = row.get("email");
    let team_id: String = row.get("team_id");
    let created_at: DateTime<Utc> = row.get("created_at");
    let expires_at: DateTime<Utc> = row.get("expires_at");
    let used_at: Option<DateTime<Utc>> = row.get("used_at");

    let team_id = TeamId::new(&team_id)
        .map_err(|e| DomainError::storage(format!("Invalid team ID in database: {}", e)))?;

    Ok(Invitation::from_parts(
        InviteToken::new(token),
        email,
        team_id,
        created_at,
        expires_at,
        used_at,
    ))
}
