//! Audit infrastructure module

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresAuditLogRepository;
pub use repository::InMemoryAuditLogRepository;
pub use service::{AuditService, DEFAULT_AUDIT_PAGE_SIZE};
