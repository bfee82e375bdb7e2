//! In-memory notification store, generic over the role scope.
//!
//! One instance backs one role's feed. Records are kept newest-first; each
//! operation takes the lock once, so no caller ever observes a partially
//! applied mutation. The unread count is never stored: it is recomputed
//! from the list whenever it is read or published.

use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, warn};

use dinehub_core::events::DomainEvent;
use dinehub_core::types::id::NotificationId;
use dinehub_core::{AppError, AppResult};
use dinehub_entity::{Notification, NotificationData};

use crate::query::NotificationQuery;
use crate::scope::Scope;
use crate::template::TemplateEngine;

/// Notification record type held by the store for scope `S`.
pub type ScopedNotification<S> = Notification<<S as Scope>::Fields>;

/// Append-ordered, role-scoped notification store.
#[derive(Debug)]
pub struct NotificationStore<S: Scope> {
    /// Records, newest first.
    records: Mutex<VecDeque<ScopedNotification<S>>>,
    /// Publishes the unread count after every mutation.
    unread_tx: watch::Sender<usize>,
    _scope: PhantomData<S>,
}

impl<S: Scope> NotificationStore<S> {
    /// Create an empty store.
    pub fn new() -> Self {
        let (unread_tx, _) = watch::channel(0);
        Self {
            records: Mutex::new(VecDeque::new()),
            unread_tx,
            _scope: PhantomData,
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<ScopedNotification<S>>> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn publish(&self, records: &VecDeque<ScopedNotification<S>>) {
        self.unread_tx.send_replace(unread_in(records));
    }

    /// Create a notification from classified content and prepend it.
    ///
    /// Assigns a fresh id, stamps `created_at`, starts unread, and derives
    /// `action_required` from the (scope-clamped) priority. Fails only when
    /// `data.kind` is outside this scope's kind set.
    pub fn add(
        &self,
        mut data: NotificationData,
        fields: S::Fields,
    ) -> AppResult<ScopedNotification<S>> {
        if !S::allows(data.kind) {
            warn!(role = %S::ROLE, kind = %data.kind, "Rejected notification outside role scope");
            return Err(AppError::validation(format!(
                "Notification kind '{}' is not available to the {} role",
                data.kind,
                S::ROLE
            )));
        }

        data.priority = data.priority.clamp_to(S::PRIORITY_CEILING);
        let notification = Notification::from_data(NotificationId::new(), data, fields, Utc::now());

        let mut records = self.lock();
        records.push_front(notification.clone());
        self.publish(&records);

        debug!(
            role = %S::ROLE,
            id = %notification.id,
            kind = %notification.kind,
            priority = %notification.priority,
            "Notification added"
        );
        Ok(notification)
    }

    /// Classify a domain event and add the result with scope enrichment.
    pub fn add_event(
        &self,
        engine: &TemplateEngine,
        event: &DomainEvent,
    ) -> AppResult<ScopedNotification<S>> {
        self.add(engine.classify_event(event), S::fields_for(event))
    }

    /// Mark one notification read. Unknown or already-read ids are ignored.
    pub fn mark_read(&self, id: NotificationId) {
        let mut records = self.lock();
        let changed = records
            .iter_mut()
            .find(|n| n.id == id)
            .map(|n| n.mark_read())
            .unwrap_or(false);

        if changed {
            self.publish(&records);
            debug!(role = %S::ROLE, %id, "Notification marked read");
        }
    }

    /// Mark every notification read.
    pub fn mark_all_read(&self) {
        let mut records = self.lock();
        let changed = records
            .iter_mut()
            .map(|n| n.mark_read())
            .filter(|changed| *changed)
            .count();
        self.publish(&records);
        debug!(role = %S::ROLE, changed, "Marked all notifications read");
    }

    /// Remove a single notification. Unknown ids are ignored.
    pub fn dismiss(&self, id: NotificationId) {
        let mut records = self.lock();
        let before = records.len();
        records.retain(|n| n.id != id);
        if records.len() != before {
            self.publish(&records);
            debug!(role = %S::ROLE, %id, "Notification dismissed");
        }
    }

    /// Discard every notification. Irreversible.
    pub fn clear_all(&self) {
        let mut records = self.lock();
        let cleared = records.len();
        records.clear();
        self.publish(&records);
        debug!(role = %S::ROLE, cleared, "Cleared all notifications");
    }

    /// Newest-first snapshot, optionally truncated to `limit` records.
    pub fn list(&self, limit: Option<usize>) -> Vec<ScopedNotification<S>> {
        let records = self.lock();
        let take = limit.unwrap_or(records.len());
        records.iter().take(take).cloned().collect()
    }

    /// Look up a notification by id.
    pub fn get(&self, id: NotificationId) -> Option<ScopedNotification<S>> {
        self.lock().iter().find(|n| n.id == id).cloned()
    }

    /// Number of unread notifications, counted from the current list.
    pub fn unread_count(&self) -> usize {
        unread_in(&self.lock())
    }

    /// Total number of notifications.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no notifications.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Read-only filtered projection of the list.
    pub fn query(&self, query: &NotificationQuery) -> Vec<ScopedNotification<S>> {
        query.apply(self.list(None))
    }

    /// Watch the unread count. The receiver always holds the latest value.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.unread_tx.subscribe()
    }
}

impl<S: Scope> Default for NotificationStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

fn unread_in<F>(records: &VecDeque<Notification<F>>) -> usize {
    records.iter().filter(|n| n.is_unread()).count()
}
