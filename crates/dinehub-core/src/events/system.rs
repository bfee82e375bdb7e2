//! Platform-level events.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{EventKind, TemplateParams, params};

/// Platform events (maintenance windows, audit appends).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SystemEvent {
    /// Scheduled downtime.
    Maintenance {
        /// When the window starts.
        window: String,
        /// Expected length in minutes.
        duration_minutes: u32,
    },
    /// An entry was appended to the audit log.
    AuditRecorded {
        /// Dotted action name, e.g. `"user.suspend"`.
        action: String,
        /// Free-text description.
        description: String,
        /// Who performed the action.
        actor_name: String,
        /// Severity label.
        severity: String,
    },
}

impl SystemEvent {
    /// The template key for this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Maintenance { .. } => EventKind::SystemMaintenance,
            Self::AuditRecorded { .. } => EventKind::AuditRecorded,
        }
    }

    /// The template parameters for this event.
    pub fn params(&self) -> TemplateParams {
        match self {
            Self::Maintenance {
                window,
                duration_minutes,
            } => params(json!({ "window": window, "duration_minutes": duration_minutes })),
            Self::AuditRecorded {
                action,
                description,
                actor_name,
                severity,
            } => params(json!({
                "action": action,
                "description": description,
                "actor_name": actor_name,
                "severity": severity,
            })),
        }
    }
}
