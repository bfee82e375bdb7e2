//! Integration tests for the role-scoped notification store.

use dinehub_core::config::notifications::NotificationsConfig;
use dinehub_core::error::ErrorKind;
use dinehub_core::events::{DomainEvent, EventPayload, InventoryEvent, OrderEvent};
use dinehub_core::types::id::NotificationId;
use dinehub_entity::{NotificationKind, NotificationPriority};
use dinehub_notify::scope::VenueFields;
use dinehub_notify::{DemoFeed, NotificationQuery, TemplateEngine};

use crate::helpers;

use NotificationPriority::{High, Low, Medium, Urgent};

#[test]
fn test_list_is_reverse_insertion_order() {
    let store = helpers::customer_store();
    let ids: Vec<NotificationId> = (0..8)
        .map(|i| {
            helpers::add_customer(&store, NotificationKind::Order, Low, &format!("n{i}")).id
        })
        .collect();

    let listed: Vec<NotificationId> = store.list(None).into_iter().map(|n| n.id).collect();
    let expected: Vec<NotificationId> = ids.into_iter().rev().collect();
    assert_eq!(listed, expected);
}

#[test]
fn test_unread_invariant_holds_across_operations() {
    let store = helpers::manager_store_with(&[Low, Urgent, Medium, High, Low]);
    helpers::assert_unread_consistent(&store);

    let second = store.list(None)[1].id;
    store.mark_read(second);
    helpers::assert_unread_consistent(&store);

    store.dismiss(store.list(None)[0].id);
    helpers::assert_unread_consistent(&store);

    store.mark_read(NotificationId::new());
    helpers::assert_unread_consistent(&store);

    store.mark_all_read();
    helpers::assert_unread_consistent(&store);

    store.clear_all();
    helpers::assert_unread_consistent(&store);
}

#[test]
fn test_mark_read_twice_equals_once() {
    let once = helpers::manager_store_with(&[Low, High, Medium]);
    let target = once.list(None)[1].id;
    once.mark_read(target);

    let snapshot: Vec<(String, bool)> = once
        .list(None)
        .into_iter()
        .map(|n| (n.title, n.is_read))
        .collect();

    once.mark_read(target);
    let after_second: Vec<(String, bool)> = once
        .list(None)
        .into_iter()
        .map(|n| (n.title, n.is_read))
        .collect();

    assert_eq!(snapshot, after_second);
    assert_eq!(once.unread_count(), 2);
}

#[test]
fn test_mark_all_read_completeness() {
    for priorities in [vec![], vec![Low], vec![Urgent, High, Medium, Low, Low]] {
        let store = helpers::manager_store_with(&priorities);
        if let Some(first) = store.list(None).first() {
            store.mark_read(first.id);
        }
        store.mark_all_read();
        assert_eq!(store.unread_count(), 0);
        assert!(store.list(None).iter().all(|n| n.is_read));
    }
}

#[test]
fn test_truncated_list_is_prefix() {
    let limit = NotificationsConfig::default().collapsed_limit;
    for count in [0usize, 3, 5, 9] {
        let priorities = vec![Medium; count];
        let store = helpers::manager_store_with(&priorities);

        let full = store.list(None);
        let head = store.list(Some(limit));
        assert_eq!(head.len(), limit.min(full.len()));
        assert_eq!(head.as_slice(), &full[..head.len()]);
    }
}

#[test]
fn test_scenario_mark_third_item_read() {
    let store = helpers::manager_store_with(&[Low, Medium, High, Low]);
    assert_eq!(store.unread_count(), 4);

    // Third insertion sits at index 1 after prepending.
    let third = store
        .list(None)
        .into_iter()
        .find(|n| n.priority == High)
        .unwrap();
    store.mark_read(third.id);

    assert_eq!(store.unread_count(), 3);
    let list = store.list(None);
    assert_eq!(list[1].id, third.id);
    assert!(list[1].is_read);
}

#[test]
fn test_scenario_clear_all() {
    let store = helpers::manager_store_with(&[High, Low, Medium]);
    assert!(!store.is_empty());

    store.clear_all();
    assert_eq!(store.list(None).len(), 0);
    assert_eq!(store.unread_count(), 0);
}

#[test]
fn test_action_required_follows_priority() {
    let store = helpers::manager_store_with(&[Low, Medium, High, Urgent]);
    let flags: Vec<bool> = store
        .list(None)
        .into_iter()
        .map(|n| n.action_required)
        .collect();
    assert_eq!(flags, vec![true, true, false, false]);
}

#[test]
fn test_customer_scope_clamps_and_rejects() {
    let store = helpers::customer_store();
    let urgent = helpers::add_customer(&store, NotificationKind::Payment, Urgent, "Card declined");
    assert_eq!(urgent.priority, High);
    assert!(urgent.action_required);

    let err = store
        .add(
            helpers::data(NotificationKind::Inventory, Medium, "Low stock"),
            Default::default(),
        )
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_add_event_enriches_venue_fields() {
    let engine = TemplateEngine::new();
    let store = helpers::owner_store();
    let event = DomainEvent::new(
        Some("cust-9".to_string()),
        EventPayload::Order(OrderEvent::Placed {
            order_id: "A-1042".to_string(),
            restaurant: "Harbor Bistro".to_string(),
            item_count: 3,
            total: "$42.50".to_string(),
        }),
    );

    let n = store.add_event(&engine, &event).unwrap();
    assert_eq!(n.kind, NotificationKind::Order);
    assert_eq!(
        n.fields,
        VenueFields {
            venue: Some("Harbor Bistro".to_string()),
            actor_name: Some("cust-9".to_string()),
        }
    );
    assert_eq!(n.message, "Order #A-1042 at Harbor Bistro: 3 items, total $42.50.");
}

#[test]
fn test_add_event_low_stock_is_high_priority() {
    let engine = TemplateEngine::new();
    let store = helpers::manager_store_with(&[]);
    let event = DomainEvent::new(
        None,
        EventPayload::Inventory(InventoryEvent::LowStock {
            item: "Basil".to_string(),
            remaining: 2,
            unit: "bunches".to_string(),
        }),
    );

    let n = store.add_event(&engine, &event).unwrap();
    assert_eq!(n.priority, High);
    assert!(n.action_required);
    assert_eq!(n.message, "Only 2 bunches of Basil left.");
}

#[test]
fn test_query_filters_projection_only() {
    let engine = TemplateEngine::new();
    let store = helpers::owner_store();
    for order_id in ["A-1", "A-2"] {
        let event = DomainEvent::new(
            None,
            EventPayload::Order(OrderEvent::Placed {
                order_id: order_id.to_string(),
                restaurant: "Harbor Bistro".to_string(),
                item_count: 1,
                total: "$9.00".to_string(),
            }),
        );
        store.add_event(&engine, &event).unwrap();
    }

    let hits = store.query(&NotificationQuery::new().text("A-2"));
    assert_eq!(hits.len(), 1);
    assert_eq!(store.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_demo_feed_fills_store_and_notifies_subscribers() {
    let store = helpers::customer_store();
    let mut unread = store.subscribe();
    let demo = DemoFeed::with_delay(std::time::Duration::from_millis(500));

    let total = demo.run(&store).await.unwrap();
    assert_eq!(store.len(), total);
    assert!(unread.has_changed().unwrap());
    assert_eq!(*unread.borrow_and_update(), store.unread_count());
    helpers::assert_unread_consistent(&store);
}
