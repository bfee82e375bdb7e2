//! Audit log entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dinehub_core::types::id::AuditEntryId;

use super::severity::AuditSeverity;

/// An immutable audit log entry.
///
/// The audit log is owned outside the notification center; entries arrive
/// as JSON from the admin console, so every field tolerates being absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    /// Unique audit entry identifier.
    #[serde(default)]
    pub id: AuditEntryId,
    /// Dotted action name, e.g. `"business.approve"`.
    #[serde(default)]
    pub action: String,
    /// Free-text description of what happened.
    #[serde(default)]
    pub description: String,
    /// The user who performed the action.
    #[serde(default)]
    pub actor_id: String,
    /// Display name of the actor.
    #[serde(default)]
    pub actor_name: String,
    /// When the action occurred.
    #[serde(default)]
    pub timestamp: DateTime<Utc>,
    /// IP address of the actor.
    #[serde(default, alias = "ip")]
    pub ip_address: Option<String>,
    /// Severity label.
    #[serde(default)]
    pub severity: AuditSeverity,
}

impl AuditLogEntry {
    /// Create an entry stamped with the current time.
    pub fn new(
        action: impl Into<String>,
        description: impl Into<String>,
        actor_id: impl Into<String>,
        actor_name: impl Into<String>,
        severity: AuditSeverity,
    ) -> Self {
        Self {
            id: AuditEntryId::new(),
            action: action.into(),
            description: description.into(),
            actor_id: actor_id.into(),
            actor_name: actor_name.into(),
            timestamp: Utc::now(),
            ip_address: None,
            severity,
        }
    }

    /// Attach the source IP address.
    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip_address = Some(ip.into());
        self
    }
}
