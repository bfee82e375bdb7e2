//! Integration tests for the bell menu boundary.

use std::sync::Arc;

use dinehub_core::config::notifications::NotificationsConfig;
use dinehub_core::events::{DomainEvent, EventPayload, OrderEvent};
use dinehub_core::types::id::NotificationId;
use dinehub_entity::{ActionTarget, AuditSeverity, NotificationKind, NotificationPriority, RoleScope};
use dinehub_notify::{
    AdminFeed, BellMenu, DefaultRoutes, Destination, MemoryAuditLog, NotificationFeed,
    RouteResolver, TemplateEngine,
};

use crate::helpers::{self, RecordingNavigator};

use NotificationPriority::{High, Low, Medium};

/// Sends every notification to a per-kind page.
struct KindRoutes;

impl RouteResolver for KindRoutes {
    fn resolve(
        &self,
        role: RoleScope,
        kind: NotificationKind,
        _target: Option<&ActionTarget>,
    ) -> Destination {
        Destination {
            path: format!("/{role}/{kind}"),
        }
    }
}

fn config() -> NotificationsConfig {
    NotificationsConfig {
        collapsed_limit: 5,
        demo_delay_ms: 0,
        badge_cap: 9,
    }
}

#[test]
fn test_collapsed_snapshot_shows_prefix() {
    let store = helpers::manager_store_with(&[Medium; 7]);
    let mut menu = BellMenu::new(&config());

    let collapsed = menu.snapshot(&store);
    assert_eq!(collapsed.items.len(), 5);
    assert!(collapsed.has_more);
    assert!(!collapsed.expanded);
    assert_eq!(collapsed.unread, 7);
    assert_eq!(collapsed.badge.as_deref(), Some("7"));

    let full_ids: Vec<NotificationId> = store.list(None).into_iter().map(|n| n.id).collect();
    let shown: Vec<NotificationId> = collapsed.items.iter().map(|i| i.id).collect();
    assert_eq!(shown, full_ids[..5]);

    menu.toggle_expanded();
    let expanded = menu.snapshot(&store);
    assert_eq!(expanded.items.len(), 7);
    assert!(!expanded.has_more);
    assert!(expanded.expanded);
}

#[test]
fn test_badge_caps_and_hides() {
    let store = helpers::manager_store_with(&[Low; 12]);
    let menu = BellMenu::new(&config());
    assert_eq!(menu.snapshot(&store).badge.as_deref(), Some("9+"));

    menu.mark_all_read(&store);
    let snapshot = menu.snapshot(&store);
    assert_eq!(snapshot.badge, None);
    assert_eq!(snapshot.unread, 0);
}

#[test]
fn test_open_marks_read_and_navigates_to_target() {
    let engine = TemplateEngine::new();
    let store = helpers::customer_store();
    let event = DomainEvent::new(
        None,
        EventPayload::Order(OrderEvent::Placed {
            order_id: "A-1042".to_string(),
            restaurant: "Harbor Bistro".to_string(),
            item_count: 1,
            total: "$12.00".to_string(),
        }),
    );
    let id = store.add_event(&engine, &event).unwrap().id;
    let navigator = RecordingNavigator::default();
    let menu = BellMenu::new(&config());

    let destination = menu.open(&store, id, &DefaultRoutes, &navigator).unwrap();
    assert_eq!(destination.path, "/customer/orders/A-1042");
    assert_eq!(navigator.visited(), vec!["/customer/orders/A-1042".to_string()]);
    assert_eq!(store.unread_count(), 0);
    assert!(store.get(id).unwrap().is_read);
}

#[test]
fn test_open_falls_back_to_kind_route() {
    let store = helpers::manager_store_with(&[High]);
    let id = store.list(None)[0].id;
    let navigator = RecordingNavigator::default();

    let destination = BellMenu::new(&config())
        .open(&store, id, &DefaultRoutes, &navigator)
        .unwrap();
    assert_eq!(destination.path, "/manager/order");

    let custom = BellMenu::new(&config())
        .open(&store, id, &KindRoutes, &navigator)
        .unwrap();
    assert_eq!(custom.path, "/manager/order");
    assert_eq!(navigator.visited().len(), 2);
}

#[test]
fn test_open_unknown_id_is_ignored() {
    let store = helpers::manager_store_with(&[Low, High]);
    let navigator = RecordingNavigator::default();

    let result = BellMenu::new(&config()).open(&store, NotificationId::new(), &DefaultRoutes, &navigator);
    assert!(result.is_none());
    assert!(navigator.visited().is_empty());
    assert_eq!(store.unread_count(), 2);
}

#[test]
fn test_admin_bell_over_audit_log() {
    let log = Arc::new(MemoryAuditLog::from_entries(vec![
        helpers::audit_entry("user.login", AuditSeverity::Low, 2),
        helpers::audit_entry("user.suspend", AuditSeverity::High, 1),
    ]));
    let feed = AdminFeed::new(log);
    let menu = BellMenu::new(&config());
    let navigator = RecordingNavigator::default();

    let snapshot = menu.snapshot(&feed);
    assert_eq!(snapshot.role, RoleScope::Admin);
    assert_eq!(snapshot.badge.as_deref(), Some("1"));
    assert_eq!(snapshot.items[0].icon, "shield");

    let suspend = snapshot.items[0].id;
    let destination = menu.open(&feed, suspend, &DefaultRoutes, &navigator).unwrap();
    assert_eq!(destination.path, format!("/admin/audit/{suspend}"));
    assert_eq!(feed.unread_count(), 0);

    menu.clear_all(&feed);
    assert_eq!(feed.len(), 2);
}

#[test]
fn test_clear_all_empties_stored_feed() {
    let store = helpers::manager_store_with(&[Low, Medium, High]);
    let menu = BellMenu::new(&config());

    menu.clear_all(&store);
    let snapshot = menu.snapshot(&store);
    assert!(snapshot.items.is_empty());
    assert_eq!(snapshot.unread, 0);
    assert!(!snapshot.has_more);
}
