//! Audit domain
//!
//! The append-only audit log entry types, the actor-resolution view, and the
//! repository trait.

mod entry;
mod repository;

pub use entry::{ActorProfile, AuditAction, AuditLogEntry, CorrelatedAuditEntry};
pub use repository::AuditLogRepository;
