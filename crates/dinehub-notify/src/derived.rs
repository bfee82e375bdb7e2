//! Admin notifications derived from the audit log.
//!
//! Admin notifications are not stored. Every read maps the current audit
//! log through [`to_notification_view`], so the view has no lifecycle of its
//! own. Priority is the entry's severity, `low` entries read as already
//! read, and only `high` entries require action.
//!
//! Whether admin read-state should be tracked at all is an open product
//! question. Until it is answered, marking an admin notification read
//! records its id in an in-process acknowledgement set that is lost on
//! restart; the audit entry itself is never touched. An entry counts as
//! read when its severity is `low` or it has been acknowledged, so with no
//! acknowledgements the view is exactly the severity mapping.
//!
//! View ids come from audit entry ids. The log is owned elsewhere and may
//! repeat an id; each repeat after the first (in append order) gets an id
//! derived from the original and its occurrence number, which keeps ids
//! unique within the view and stable across reads.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use dinehub_core::types::id::NotificationId;
use dinehub_entity::{
    ActionTarget, AuditLogEntry, AuditSeverity, Notification, NotificationKind, RoleScope,
};

use crate::feed::NotificationFeed;
use crate::scope::Enrichment;

/// Enrichment for admin notifications derived from the audit log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminFields {
    /// Audit action name.
    pub action: String,
    /// Acting user's identifier.
    pub actor_user_id: String,
    /// Acting user's display name.
    pub actor_name: String,
    /// Source IP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<String>,
}

impl Enrichment for AdminFields {
    fn search_terms(&self) -> Vec<&str> {
        let mut terms = vec![
            self.action.as_str(),
            self.actor_user_id.as_str(),
            self.actor_name.as_str(),
        ];
        if let Some(ip) = self.source_ip.as_deref() {
            terms.push(ip);
        }
        terms
    }

    fn actor(&self) -> Option<&str> {
        Some(self.actor_name.as_str()).filter(|name| !name.is_empty())
    }
}

/// Admin notification record.
pub type AdminNotification = Notification<AdminFields>;

/// Read access to an externally owned, append-only audit log.
pub trait AuditLog: Send + Sync {
    /// All entries in append order.
    fn entries(&self) -> Vec<AuditLogEntry>;
}

/// Process-local audit log used by the console and tests.
#[derive(Debug, Default)]
pub struct MemoryAuditLog {
    entries: RwLock<Vec<AuditLogEntry>>,
}

impl MemoryAuditLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log holding `entries`.
    pub fn from_entries(entries: Vec<AuditLogEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Append an entry.
    pub fn append(&self, entry: AuditLogEntry) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(entry);
    }
}

impl AuditLog for MemoryAuditLog {
    fn entries(&self) -> Vec<AuditLogEntry> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

/// Map one audit entry to its notification view.
pub fn to_notification_view(entry: &AuditLogEntry) -> AdminNotification {
    Notification {
        id: NotificationId::from(entry.id),
        kind: NotificationKind::Audit,
        title: humanize_action(&entry.action),
        message: entry.description.clone(),
        priority: entry.severity.as_priority(),
        created_at: entry.timestamp,
        is_read: entry.severity == AuditSeverity::Low,
        action_required: entry.severity == AuditSeverity::High,
        action_target: Some(ActionTarget::new(format!("/audit/{}", entry.id))),
        fields: AdminFields {
            action: entry.action.clone(),
            actor_user_id: entry.actor_id.clone(),
            actor_name: entry.actor_name.clone(),
            source_ip: entry.ip_address.clone(),
        },
    }
}

/// `"business.approve_request"` becomes `"Business approve request"`.
fn humanize_action(action: &str) -> String {
    let spaced = action.replace(['.', '_'], " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Audit event".to_string(),
    }
}

/// The admin role's feed over an audit log.
#[derive(Debug)]
pub struct AdminFeed<L: AuditLog> {
    log: Arc<L>,
    acknowledged: Mutex<HashSet<NotificationId>>,
}

impl<L: AuditLog> AdminFeed<L> {
    /// Create a feed reading from `log`.
    pub fn new(log: Arc<L>) -> Self {
        Self {
            log,
            acknowledged: Mutex::new(HashSet::new()),
        }
    }

    /// The underlying audit log.
    pub fn log(&self) -> &Arc<L> {
        &self.log
    }

    fn acknowledged(&self) -> MutexGuard<'_, HashSet<NotificationId>> {
        self.acknowledged.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Derive the full newest-first view.
    fn derive(&self) -> Vec<AdminNotification> {
        let mut views = unique_views(&self.log.entries());
        // Later appends win ties on timestamp.
        views.reverse();
        views.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let acknowledged = self.acknowledged();
        for view in &mut views {
            if acknowledged.contains(&view.id) {
                view.is_read = true;
            }
        }
        views
    }
}

/// Map entries in append order, re-keying repeated ids.
fn unique_views(entries: &[AuditLogEntry]) -> Vec<AdminNotification> {
    let mut occurrences: HashMap<NotificationId, u32> = HashMap::new();
    entries
        .iter()
        .map(|entry| {
            let mut view = to_notification_view(entry);
            let seen = occurrences.entry(view.id).or_insert(0);
            if *seen > 0 {
                let rekeyed = repeat_id(view.id, *seen);
                warn!(entry_id = %entry.id, view_id = %rekeyed, "Duplicate audit entry id re-keyed");
                view.id = rekeyed;
            }
            *seen += 1;
            view
        })
        .collect()
}

fn repeat_id(original: NotificationId, occurrence: u32) -> NotificationId {
    NotificationId::from_uuid(Uuid::new_v5(
        original.as_uuid(),
        &occurrence.to_be_bytes(),
    ))
}

impl<L: AuditLog> NotificationFeed for AdminFeed<L> {
    type Fields = AdminFields;

    fn role(&self) -> RoleScope {
        RoleScope::Admin
    }

    fn list(&self, limit: Option<usize>) -> Vec<AdminNotification> {
        let mut views = self.derive();
        if let Some(limit) = limit {
            views.truncate(limit);
        }
        views
    }

    fn unread_count(&self) -> usize {
        self.derive().iter().filter(|n| n.is_unread()).count()
    }

    fn mark_read(&self, id: NotificationId) {
        let unread = self.derive().iter().any(|n| n.id == id && n.is_unread());
        if unread {
            self.acknowledged().insert(id);
            debug!(%id, "Audit notification acknowledged");
        }
    }

    fn mark_all_read(&self) {
        let unread: Vec<NotificationId> = self
            .derive()
            .into_iter()
            .filter(|n| n.is_unread())
            .map(|n| n.id)
            .collect();
        let count = unread.len();
        self.acknowledged().extend(unread);
        debug!(count, "Acknowledged all audit notifications");
    }

    fn clear_all(&self) {
        debug!("Audit-derived notifications cannot be cleared; request ignored");
    }
}
