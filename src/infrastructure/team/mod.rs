//! Team infrastructure module

mod postgres_repository;
mod repository;

pub use postgres_repository::PostgresTeamRepository;
pub use repository::InMemoryTeamRepository;
