//! Read-side filters over a notification list.

use serde::{Deserialize, Serialize};

use dinehub_entity::{Notification, NotificationKind, NotificationPriority};

use crate::scope::Enrichment;

/// Search and filter criteria. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationQuery {
    /// Case-insensitive substring matched against title, message and
    /// enrichment fields.
    #[serde(default)]
    pub text: Option<String>,
    /// Exact priority.
    #[serde(default)]
    pub priority: Option<NotificationPriority>,
    /// Exact kind.
    #[serde(default)]
    pub kind: Option<NotificationKind>,
    /// Actor name, compared case-insensitively.
    #[serde(default)]
    pub actor: Option<String>,
    /// Only unread records.
    #[serde(default)]
    pub unread_only: bool,
    /// Maximum number of results.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl NotificationQuery {
    /// Criteria that match everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by free text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Filter by priority.
    pub fn priority(mut self, priority: NotificationPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Filter by kind.
    pub fn kind(mut self, kind: NotificationKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by actor.
    pub fn actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Keep only unread records.
    pub fn unread_only(mut self) -> Self {
        self.unread_only = true;
        self
    }

    /// Cap the number of results.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether a single record satisfies every criterion.
    pub fn matches<F: Enrichment>(&self, n: &Notification<F>) -> bool {
        if self.unread_only && n.is_read {
            return false;
        }
        if self.priority.is_some_and(|p| p != n.priority) {
            return false;
        }
        if self.kind.is_some_and(|k| k != n.kind) {
            return false;
        }
        if let Some(actor) = self.actor.as_deref() {
            let matches_actor = n
                .fields
                .actor()
                .is_some_and(|a| a.eq_ignore_ascii_case(actor.trim()));
            if !matches_actor {
                return false;
            }
        }
        if let Some(text) = self.text.as_deref() {
            let needle = text.trim().to_lowercase();
            if !needle.is_empty() {
                let haystack = [n.title.as_str(), n.message.as_str()]
                    .into_iter()
                    .chain(n.fields.search_terms());
                if !haystack
                    .into_iter()
                    .any(|s| s.to_lowercase().contains(&needle))
                {
                    return false;
                }
            }
        }
        true
    }

    /// Filter `items` in order, honouring `limit`.
    pub fn apply<F: Enrichment>(&self, items: Vec<Notification<F>>) -> Vec<Notification<F>> {
        let limit = self.limit.unwrap_or(usize::MAX);
        items
            .into_iter()
            .filter(|n| self.matches(n))
            .take(limit)
            .collect()
    }
}
