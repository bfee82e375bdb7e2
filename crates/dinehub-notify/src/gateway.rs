//! Bell menu: the boundary between a notification feed and the dashboard.
//!
//! The menu owns only its expanded/collapsed flag. Everything it shows is
//! read from the feed on each snapshot, and every action is forwarded to
//! the feed or the navigation collaborator.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use dinehub_core::config::notifications::NotificationsConfig;
use dinehub_core::types::id::NotificationId;
use dinehub_entity::{ActionTarget, NotificationKind, NotificationPriority, RoleScope};

use crate::feed::NotificationFeed;
use crate::template::icon_for;

/// A resolved navigation destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Destination {
    /// Dashboard-relative path.
    pub path: String,
}

/// Resolves where opening a notification leads.
pub trait RouteResolver {
    /// Resolve a destination from the notification's target or kind.
    fn resolve(
        &self,
        role: RoleScope,
        kind: NotificationKind,
        target: Option<&ActionTarget>,
    ) -> Destination;
}

/// Uses the action target verbatim, else the role's section for the kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRoutes;

impl RouteResolver for DefaultRoutes {
    fn resolve(
        &self,
        role: RoleScope,
        kind: NotificationKind,
        target: Option<&ActionTarget>,
    ) -> Destination {
        let path = match target {
            Some(target) if !target.as_str().is_empty() => {
                format!("/{}{}", role, target.as_str())
            }
            _ => format!("/{}/{}", role, kind),
        };
        Destination { path }
    }
}

/// Performs navigation on behalf of the menu.
pub trait Navigator {
    /// Navigate to `destination`.
    fn navigate(&self, destination: &Destination);
}

/// One row of the bell panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BellItem {
    /// Notification id.
    pub id: NotificationId,
    /// Icon glyph name.
    pub icon: &'static str,
    /// Domain category.
    pub kind: NotificationKind,
    /// Headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Priority level.
    pub priority: NotificationPriority,
    /// Read flag.
    pub is_read: bool,
    /// Whether the row shows an action marker.
    pub action_required: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Everything needed to draw the bell icon and its panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BellSnapshot {
    /// Role whose feed is shown.
    pub role: RoleScope,
    /// Badge label, absent when nothing is unread.
    pub badge: Option<String>,
    /// Exact unread count.
    pub unread: usize,
    /// Rows, newest first.
    pub items: Vec<BellItem>,
    /// Whether a "show more" control is needed.
    pub has_more: bool,
    /// Whether the panel is expanded.
    pub expanded: bool,
}

/// Bell icon and slide-up panel state.
#[derive(Debug, Clone)]
pub struct BellMenu {
    expanded: bool,
    collapsed_limit: usize,
    badge_cap: usize,
}

impl BellMenu {
    /// Create a collapsed menu.
    pub fn new(config: &NotificationsConfig) -> Self {
        Self {
            expanded: false,
            collapsed_limit: config.collapsed_limit,
            badge_cap: config.badge_cap,
        }
    }

    /// Whether the panel shows the full list.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Switch between "show more" and "show less".
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Read the feed and build what the bell should display.
    pub fn snapshot<F: NotificationFeed>(&self, feed: &F) -> BellSnapshot {
        let all = feed.list(None);
        let unread = all.iter().filter(|n| n.is_unread()).count();
        let shown = if self.expanded {
            all.len()
        } else {
            self.collapsed_limit.min(all.len())
        };

        let items = all
            .iter()
            .take(shown)
            .map(|n| BellItem {
                id: n.id,
                icon: icon_for(n.kind),
                kind: n.kind,
                title: n.title.clone(),
                message: n.message.clone(),
                priority: n.priority,
                is_read: n.is_read,
                action_required: n.action_required,
                created_at: n.created_at,
            })
            .collect();

        BellSnapshot {
            role: feed.role(),
            badge: badge_label(unread, self.badge_cap),
            unread,
            items,
            has_more: shown < all.len(),
            expanded: self.expanded,
        }
    }

    /// Open a notification: mark it read and navigate to its destination.
    ///
    /// Returns `None` (and does nothing) when the id is not in the feed.
    pub fn open<F, R, N>(
        &self,
        feed: &F,
        id: NotificationId,
        routes: &R,
        navigator: &N,
    ) -> Option<Destination>
    where
        F: NotificationFeed,
        R: RouteResolver,
        N: Navigator,
    {
        let notification = feed.list(None).into_iter().find(|n| n.id == id)?;
        feed.mark_read(id);

        let destination = routes.resolve(
            feed.role(),
            notification.kind,
            notification.action_target.as_ref(),
        );
        debug!(role = %feed.role(), %id, path = %destination.path, "Opening notification");
        navigator.navigate(&destination);
        Some(destination)
    }

    /// "Mark all as read" button.
    pub fn mark_all_read<F: NotificationFeed>(&self, feed: &F) {
        feed.mark_all_read();
    }

    /// "Clear all" button. Confirmation is the caller's job.
    pub fn clear_all<F: NotificationFeed>(&self, feed: &F) {
        feed.clear_all();
    }
}

/// Badge text for an unread count: nothing at zero, `"{cap}+"` above cap.
pub fn badge_label(unread: usize, cap: usize) -> Option<String> {
    match unread {
        0 => None,
        n if n > cap => Some(format!("{cap}+")),
        n => Some(n.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_label() {
        assert_eq!(badge_label(0, 9), None);
        assert_eq!(badge_label(3, 9), Some("3".to_string()));
        assert_eq!(badge_label(9, 9), Some("9".to_string()));
        assert_eq!(badge_label(10, 9), Some("9+".to_string()));
    }

    #[test]
    fn test_default_routes() {
        let routes = DefaultRoutes;
        let target = ActionTarget::new("/orders/A-1");
        assert_eq!(
            routes
                .resolve(RoleScope::Customer, NotificationKind::Order, Some(&target))
                .path,
            "/customer/orders/A-1"
        );
        assert_eq!(
            routes
                .resolve(RoleScope::Manager, NotificationKind::Staff, None)
                .path,
            "/manager/staff"
        );
    }

    #[test]
    fn test_toggle() {
        let mut menu = BellMenu::new(&NotificationsConfig::default());
        assert!(!menu.is_expanded());
        menu.toggle_expanded();
        assert!(menu.is_expanded());
    }
}
