//! Audit log entities read by the admin notification feed.

pub mod model;
pub mod severity;

pub use model::AuditLogEntry;
pub use severity::AuditSeverity;
