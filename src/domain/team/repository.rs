//! Team repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Team, TeamId};
use crate::domain::DomainError;

/// Repository trait for team storage
#[async_trait]
pub trait TeamRepository: Send + Sync + Debug {
    /// Get a team by its ID
    async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError>;

    /// Create a new team
    async fn create(&self, team: Team) -> Result<Team, DomainError>;

    /// List all teams
    async fn list(&self) -> Result<Vec<Team>, DomainError>;

    /// Check if a team exists
    async fn exists(&self, id: &TeamId) -> Result<bool, DomainError> {
        Ok(self.get(id).await?.is_some())
    }
}
