//! # dinehub-entity
//!
//! Value types for the DineHub notification center. Every struct in this
//! crate derives `Debug`, `Clone`, `Serialize` and `Deserialize`; nothing
//! here holds mutable state.

pub mod audit;
pub mod notification;
pub mod role;

pub use audit::{AuditLogEntry, AuditSeverity};
pub use notification::{
    ActionTarget, Notification, NotificationData, NotificationKind, NotificationPriority,
};
pub use role::RoleScope;
