//! Shared test helpers for integration tests.

use std::sync::Mutex;

use chrono::{Duration, Utc};

use dinehub_entity::{
    AuditLogEntry, AuditSeverity, Notification, NotificationData, NotificationKind,
    NotificationPriority,
};
use dinehub_notify::scope::{CustomerFields, VenueFields};
use dinehub_notify::{
    CustomerScope, Destination, ManagerScope, Navigator, NotificationFeed, NotificationStore,
    OwnerScope,
};

/// Classified content with a generated body.
pub fn data(kind: NotificationKind, priority: NotificationPriority, title: &str) -> NotificationData {
    NotificationData {
        kind,
        title: title.to_string(),
        message: format!("{title} details"),
        priority,
        action_target: None,
    }
}

/// Manager store pre-filled with `priorities`, added in order.
pub fn manager_store_with(priorities: &[NotificationPriority]) -> NotificationStore<ManagerScope> {
    let store = NotificationStore::new();
    for (i, priority) in priorities.iter().enumerate() {
        store
            .add(
                data(NotificationKind::Order, *priority, &format!("order {i}")),
                VenueFields::default(),
            )
            .expect("order is a manager kind");
    }
    store
}

/// Empty customer store.
pub fn customer_store() -> NotificationStore<CustomerScope> {
    NotificationStore::new()
}

/// Empty owner store.
pub fn owner_store() -> NotificationStore<OwnerScope> {
    NotificationStore::new()
}

/// Add a customer notification.
pub fn add_customer(
    store: &NotificationStore<CustomerScope>,
    kind: NotificationKind,
    priority: NotificationPriority,
    title: &str,
) -> Notification<CustomerFields> {
    store
        .add(data(kind, priority, title), CustomerFields::default())
        .expect("kind accepted by customer scope")
}

/// Audit entry stamped `minutes_ago` minutes in the past.
pub fn audit_entry(action: &str, severity: AuditSeverity, minutes_ago: i64) -> AuditLogEntry {
    let mut entry = AuditLogEntry::new(
        action,
        format!("{action} performed"),
        "adm-1",
        "Dana Admin",
        severity,
    );
    entry.timestamp = Utc::now() - Duration::minutes(minutes_ago);
    entry
}

/// Unread invariant: the counter always agrees with the list.
pub fn assert_unread_consistent<F: NotificationFeed>(feed: &F) {
    let listed = feed.list(None).iter().filter(|n| !n.is_read).count();
    assert_eq!(feed.unread_count(), listed, "unread count drifted from list");
}

/// Navigator that records every destination it is handed.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Paths navigated to, in order.
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, destination: &Destination) {
        self.visited.lock().unwrap().push(destination.path.clone());
    }
}
