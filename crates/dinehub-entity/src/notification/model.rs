//! Notification entity model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dinehub_core::types::id::NotificationId;

use super::kind::NotificationKind;
use super::priority::NotificationPriority;

/// Opaque navigation reference carried by a notification, e.g.
/// `"/orders/A-1042"`. The notification center never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionTarget(pub String);

impl ActionTarget {
    /// Wrap a navigation reference.
    pub fn new(target: impl Into<String>) -> Self {
        Self(target.into())
    }

    /// Borrow the raw reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Classified notification content produced by the template engine,
/// before a store assigns identity and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationData {
    /// Domain category.
    pub kind: NotificationKind,
    /// Short headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Priority level.
    pub priority: NotificationPriority,
    /// Where acting on the notification should navigate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_target: Option<ActionTarget>,
}

/// A notification record held by a role-scoped store.
///
/// `F` carries the role-specific enrichment (actor, venue, ...). It is
/// flattened into the serialized record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification<F> {
    /// Unique within the owning store; never reused.
    pub id: NotificationId,
    /// Domain category.
    pub kind: NotificationKind,
    /// Short headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Priority level.
    pub priority: NotificationPriority,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// Read flag; only ever moves from `false` to `true`.
    pub is_read: bool,
    /// Fixed at creation from the priority.
    pub action_required: bool,
    /// Navigation reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_target: Option<ActionTarget>,
    /// Role-specific enrichment.
    #[serde(flatten)]
    pub fields: F,
}

impl<F> Notification<F> {
    /// Build a fresh, unread record from classified content.
    pub fn from_data(
        id: NotificationId,
        data: NotificationData,
        fields: F,
        created_at: DateTime<Utc>,
    ) -> Self {
        let action_required = data.priority.requires_action();
        Self {
            id,
            kind: data.kind,
            title: data.title,
            message: data.message,
            priority: data.priority,
            created_at,
            is_read: false,
            action_required,
            action_target: data.action_target,
            fields,
        }
    }

    /// Check if the notification has not been read yet.
    pub fn is_unread(&self) -> bool {
        !self.is_read
    }

    /// Mark as read. Returns `true` if the flag changed.
    pub fn mark_read(&mut self) -> bool {
        let changed = !self.is_read;
        self.is_read = true;
        changed
    }
}
