//! The command/query surface a presentation layer consumes.

use dinehub_core::types::id::NotificationId;
use dinehub_entity::{Notification, RoleScope};

use crate::query::NotificationQuery;
use crate::scope::{Enrichment, Scope};
use crate::store::NotificationStore;

/// A role's notification feed, stored or derived.
pub trait NotificationFeed {
    /// Enrichment carried by the feed's records.
    type Fields: Enrichment;

    /// The dashboard role served by this feed.
    fn role(&self) -> RoleScope;

    /// Newest-first records, optionally truncated.
    fn list(&self, limit: Option<usize>) -> Vec<Notification<Self::Fields>>;

    /// Unread records in the full list.
    fn unread_count(&self) -> usize;

    /// Mark one record read; unknown ids are ignored.
    fn mark_read(&self, id: NotificationId);

    /// Mark every record read.
    fn mark_all_read(&self);

    /// Discard the feed's contents, where the feed owns them.
    fn clear_all(&self);

    /// Total number of records.
    fn len(&self) -> usize {
        self.list(None).len()
    }

    /// Whether the feed has no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Filtered projection of the full list.
    fn query(&self, query: &NotificationQuery) -> Vec<Notification<Self::Fields>> {
        query.apply(self.list(None))
    }
}

impl<S: Scope> NotificationFeed for NotificationStore<S> {
    type Fields = S::Fields;

    fn role(&self) -> RoleScope {
        S::ROLE
    }

    fn list(&self, limit: Option<usize>) -> Vec<Notification<S::Fields>> {
        NotificationStore::list(self, limit)
    }

    fn unread_count(&self) -> usize {
        NotificationStore::unread_count(self)
    }

    fn mark_read(&self, id: NotificationId) {
        NotificationStore::mark_read(self, id)
    }

    fn mark_all_read(&self) {
        NotificationStore::mark_all_read(self)
    }

    fn clear_all(&self) {
        NotificationStore::clear_all(self)
    }

    fn len(&self) -> usize {
        NotificationStore::len(self)
    }
}
