//! Notification template engine.
//!
//! Maps a domain event kind plus parameters to notification content. The
//! engine is pure: no I/O, no shared state, and it never fails. Missing
//! parameters render as empty strings so delivering a notification can
//! never block the action that triggered it.

pub mod catalog;
pub mod icon;
pub mod render;

use serde::Serialize;

use dinehub_core::events::{DomainEvent, EventKind, TemplateParams};
use dinehub_entity::{ActionTarget, NotificationData, NotificationKind, NotificationPriority};

pub use catalog::template_for;
pub use icon::{DEFAULT_ICON, icon_for, icon_for_str};

/// A notification template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    /// Event kind this template handles.
    pub event: EventKind,
    /// Resulting notification kind.
    pub kind: NotificationKind,
    /// Resulting priority.
    pub priority: NotificationPriority,
    /// Title pattern.
    pub title: &'static str,
    /// Message pattern.
    pub message: &'static str,
    /// Action target pattern, if the notification links somewhere.
    pub action: Option<&'static str>,
}

impl Template {
    /// Render this template against `params`.
    pub fn apply(&self, params: &TemplateParams) -> NotificationData {
        NotificationData {
            kind: self.kind,
            title: render::render(self.title, params),
            message: render::render(self.message, params),
            priority: self.priority,
            action_target: self
                .action
                .map(|pattern| ActionTarget::new(render::render(pattern, params))),
        }
    }
}

/// Classifies domain events into notification content.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateEngine;

impl TemplateEngine {
    /// Create a template engine.
    pub fn new() -> Self {
        Self
    }

    /// Produce notification content for `event` with `params`.
    pub fn classify(&self, event: EventKind, params: &TemplateParams) -> NotificationData {
        template_for(event).apply(params)
    }

    /// Produce notification content for a typed domain event.
    pub fn classify_event(&self, event: &DomainEvent) -> NotificationData {
        self.classify(event.kind(), &event.params())
    }

    /// Every template, in event-kind order.
    pub fn catalog(&self) -> Vec<Template> {
        EventKind::ALL.iter().copied().map(template_for).collect()
    }
}
