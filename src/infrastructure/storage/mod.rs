//! Storage infrastructure
//!
//! Connection pooling and schema migrations for the PostgreSQL backend.

mod migrations;
mod postgres;

pub use migrations::{migrations, Migration, PostgresMigrator};
pub use postgres::{connect, PostgresConfig};
