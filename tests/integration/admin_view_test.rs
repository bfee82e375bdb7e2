//! Integration tests for the audit-derived admin feed.

use std::sync::Arc;

use dinehub_core::events::{DomainEvent, EventPayload, SystemEvent};
use dinehub_core::types::id::NotificationId;
use dinehub_entity::{AuditLogEntry, AuditSeverity, NotificationKind, NotificationPriority, RoleScope};
use dinehub_notify::{AdminFeed, AuditLog, MemoryAuditLog, NotificationCenter, NotificationFeed};

use crate::helpers;

fn feed_with(entries: Vec<AuditLogEntry>) -> AdminFeed<MemoryAuditLog> {
    AdminFeed::new(Arc::new(MemoryAuditLog::from_entries(entries)))
}

#[test]
fn test_severity_drives_read_and_action_flags() {
    // Oldest first so the derived view lists low, medium, high in reverse.
    let entries = vec![
        helpers::audit_entry("user.login", AuditSeverity::Low, 30),
        helpers::audit_entry("business.approve", AuditSeverity::Medium, 20),
        helpers::audit_entry("user.role_change", AuditSeverity::High, 10),
    ];
    let feed = feed_with(entries.clone());

    let by_entry: Vec<(bool, bool)> = entries
        .iter()
        .map(|entry| {
            let view = feed
                .list(None)
                .into_iter()
                .find(|n| n.id == NotificationId::from(entry.id))
                .unwrap();
            (view.is_read, view.action_required)
        })
        .collect();

    let is_read: Vec<bool> = by_entry.iter().map(|(read, _)| *read).collect();
    let action: Vec<bool> = by_entry.iter().map(|(_, action)| *action).collect();
    assert_eq!(is_read, vec![true, false, false]);
    assert_eq!(action, vec![false, false, true]);
    assert_eq!(feed.unread_count(), 2);
    helpers::assert_unread_consistent(&feed);
}

#[test]
fn test_derived_view_fields() {
    let entry = helpers::audit_entry("business.approve_request", AuditSeverity::Medium, 1)
        .with_ip("10.0.4.12");
    let feed = feed_with(vec![entry.clone()]);

    let view = &feed.list(None)[0];
    assert_eq!(view.kind, NotificationKind::Audit);
    assert_eq!(view.title, "Business approve request");
    assert_eq!(view.message, entry.description);
    assert_eq!(view.priority, NotificationPriority::Medium);
    assert_eq!(view.created_at, entry.timestamp);
    assert_eq!(view.fields.actor_name, "Dana Admin");
    assert_eq!(view.fields.source_ip.as_deref(), Some("10.0.4.12"));
}

#[test]
fn test_unknown_severity_reads_as_low() {
    let raw = r#"[{"action": "settings.update", "severity": "critical"},
                  {"action": "user.login", "severity": null}]"#;
    let entries: Vec<AuditLogEntry> = serde_json::from_str(raw).unwrap();
    let feed = feed_with(entries);

    assert!(feed.list(None).iter().all(|n| n.is_read));
    assert_eq!(feed.unread_count(), 0);
}

#[test]
fn test_view_tracks_log_on_every_read() {
    let log = Arc::new(MemoryAuditLog::new());
    let feed = AdminFeed::new(Arc::clone(&log));
    assert!(feed.is_empty());

    log.append(helpers::audit_entry("user.suspend", AuditSeverity::High, 0));
    assert_eq!(feed.len(), 1);
    assert_eq!(feed.unread_count(), 1);
}

#[test]
fn test_acknowledgement_and_clear() {
    let feed = feed_with(vec![
        helpers::audit_entry("user.login", AuditSeverity::Low, 3),
        helpers::audit_entry("business.reject", AuditSeverity::Medium, 2),
        helpers::audit_entry("user.role_change", AuditSeverity::High, 1),
    ]);

    let high = feed.list(None)[0].id;
    feed.mark_read(high);
    feed.mark_read(high);
    assert_eq!(feed.unread_count(), 1);
    helpers::assert_unread_consistent(&feed);

    feed.mark_all_read();
    assert_eq!(feed.unread_count(), 0);

    // The audit log is not ours to clear.
    feed.clear_all();
    assert_eq!(feed.len(), 3);
    assert_eq!(feed.log().entries().len(), 3);
}

#[test]
fn test_center_routes_audit_events_to_admin_feed() {
    let center = NotificationCenter::new(Arc::new(MemoryAuditLog::new()));
    let event = DomainEvent::new(
        Some("adm-2".to_string()),
        EventPayload::System(SystemEvent::AuditRecorded {
            action: "user.role_change".to_string(),
            description: "Promoted j.ortiz to owner".to_string(),
            actor_name: "Sam Ops".to_string(),
            severity: "high".to_string(),
        }),
    );

    let id = center.publish(RoleScope::Admin, &event).unwrap();
    let views = center.admin().list(None);
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].id, id);
    assert!(views[0].action_required);
    assert!(center.customer().is_empty());
}

#[test]
fn test_repeated_audit_ids_stay_unique_in_view() {
    let high = helpers::audit_entry("user.suspend", AuditSeverity::High, 5);
    let mut medium = helpers::audit_entry("business.reject", AuditSeverity::Medium, 4);
    medium.id = high.id;
    let feed = feed_with(vec![high, medium]);

    let ids: Vec<NotificationId> = feed.list(None).into_iter().map(|n| n.id).collect();
    assert_ne!(ids[0], ids[1]);
    assert_eq!(feed.unread_count(), 2);

    feed.mark_read(ids[0]);
    assert_eq!(feed.unread_count(), 1);
    helpers::assert_unread_consistent(&feed);
}

#[test]
fn test_admin_view_only_holds_audit_kind_within_three_levels() {
    let feed = feed_with(vec![
        helpers::audit_entry("user.login", AuditSeverity::Low, 3),
        helpers::audit_entry("settings.update", AuditSeverity::Medium, 2),
        helpers::audit_entry("user.suspend", AuditSeverity::High, 1),
    ]);

    for view in feed.list(None) {
        assert_eq!(view.kind, NotificationKind::Audit);
        assert!(view.priority <= NotificationPriority::High);
    }
    assert_eq!(feed.role(), RoleScope::Admin);
}
