//! In-memory team repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::DomainError;

/// In-memory implementation of TeamRepository
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    teams: Arc<RwLock<HashMap<String, Team>>>,
}

impl InMemoryTeamRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial teams
    pub fn with_teams(teams: Vec<Team>) -> Self {
        let map = teams
            .into_iter()
            .map(|t| (t.id().as_str().to_string(), t))
            .collect();

        Self {
            teams: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.get(id.as_str()).cloned())
    }

    async fn create(&self, team: Team) -> Result<Team, DomainError> {
        let mut teams = self.teams.write().await;
        let id = team.id().as_str().to_string();

        if teams.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "Team with ID '{}' already exists",
                id
            )));
        }

        teams.insert(id, team.clone());
        Ok(team)
    }

    async fn list(&self) -> Result<Vec<Team>, DomainError> {
        let teams = self.teams.read().await;

        let mut result: Vec<Team> = teams.values().cloned().collect();
        result.sort_by(|a, b| a.created_at().cmp(&b.created_at()));

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_team(id: &str, name: &str) -> Team {
        Team::new(TeamId::new(id).unwrap(), name).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryTeamRepository::new();
        let team = make_team("team-a", "Team A");

        repo.create(team.clone()).await.unwrap();

        let retrieved = repo.get(team.id()).await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().name(), "Team A");
    }

    #[tokio::test]
    async fn test_duplicate_id() {
        let repo = InMemoryTeamRepository::new();

        repo.create(make_team("team-a", "Team A")).await.unwrap();

        let result = repo.create(make_team("team-a", "Other")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_list() {
        let repo = InMemoryTeamRepository::new();

        repo.create(make_team("team-a", "Team A")).await.unwrap();
        repo.create(make_team("team-b", "Team B")).await.unwrap();

        let teams = repo.list().await.unwrap();
        assert_eq!(teams.len(), 2);
    }

    #[tokio::test]
    async fn test_exists() {
        let repo = InMemoryTeamRepository::new();
        let team = make_team("team-a", "Team A");

        assert!(!repo.exists(team.id()).await.unwrap());

        repo.create(team.clone()).await.unwrap();
        assert!(repo.exists(team.id()).await.unwrap());
    }
}
