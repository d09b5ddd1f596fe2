//! Profile infrastructure module

mod postgres_repository;
mod repository;

pub use postgres_repository::PostgresProfileRepository;
pub use repository::InMemoryProfileRepository;
