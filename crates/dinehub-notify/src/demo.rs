//! Sample notification traffic for the console's demo mode.
//!
//! Events are enqueued one by one with a pause in between so a dashboard
//! can show them arriving. The pause is cosmetic; nothing depends on it.

use std::time::Duration;

use tracing::info;

use dinehub_core::AppResult;
use dinehub_core::config::notifications::NotificationsConfig;
use dinehub_core::events::{
    AccountEvent, DomainEvent, EventPayload, InventoryEvent, LoyaltyEvent, OrderEvent,
    PaymentEvent, ReservationEvent, StaffEvent, SystemEvent,
};
use dinehub_entity::{AuditLogEntry, AuditSeverity, RoleScope};

use crate::derived::MemoryAuditLog;
use crate::scope::Scope;
use crate::store::NotificationStore;
use crate::template::TemplateEngine;

/// Enqueues a role's sample events with a delay between them.
#[derive(Debug, Clone)]
pub struct DemoFeed {
    delay: Duration,
    engine: TemplateEngine,
}

impl DemoFeed {
    /// Create a demo feed using the configured delay.
    pub fn new(config: &NotificationsConfig) -> Self {
        Self::with_delay(Duration::from_millis(config.demo_delay_ms))
    }

    /// Create a demo feed with an explicit delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            engine: TemplateEngine::new(),
        }
    }

    /// Publish the role's sample events into `store`.
    pub async fn run<S: Scope>(&self, store: &NotificationStore<S>) -> AppResult<usize> {
        self.run_events(store, sample_events(S::ROLE)).await
    }

    /// Publish `events` into `store`, pausing between consecutive events.
    pub async fn run_events<S: Scope>(
        &self,
        store: &NotificationStore<S>,
        events: Vec<DomainEvent>,
    ) -> AppResult<usize> {
        let total = events.len();
        for (i, event) in events.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.delay).await;
            }
            store.add_event(&self.engine, event)?;
        }
        info!(role = %S::ROLE, total, "Demo notifications published");
        Ok(total)
    }

    /// Append the sample audit entries to `log`, pausing between them.
    pub async fn run_audit(&self, log: &MemoryAuditLog) -> usize {
        let entries = sample_audit_entries();
        let total = entries.len();
        for (i, entry) in entries.into_iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.delay).await;
            }
            log.append(entry);
        }
        info!(role = %RoleScope::Admin, total, "Demo audit entries appended");
        total
    }
}

/// Sample events for a stored role. The admin role has none; see
/// [`sample_audit_entries`].
pub fn sample_events(role: RoleScope) -> Vec<DomainEvent> {
    let customer = Some("cust-1001".to_string());
    let manager = Some("mgr-2001".to_string());

    let payloads = match role {
        RoleScope::Customer => vec![
            EventPayload::Order(OrderEvent::Placed {
                order_id: "A-1042".to_string(),
                restaurant: "Luigi's Trattoria".to_string(),
                item_count: 3,
                total: "$42.50".to_string(),
            }),
            EventPayload::Payment(PaymentEvent::Completed {
                payment_id: "P-5531".to_string(),
                order_id: "A-1042".to_string(),
                amount: "$42.50".to_string(),
                method: "Visa •••• 4242".to_string(),
            }),
            EventPayload::Reservation(ReservationEvent::Confirmed {
                reservation_id: "R-318".to_string(),
                restaurant: "Sakura House".to_string(),
                party_size: 4,
                date: "Friday".to_string(),
                time: "19:30".to_string(),
            }),
            EventPayload::Loyalty(LoyaltyEvent::PointsEarned {
                points: 43,
                balance: 512,
                restaurant: "Luigi's Trattoria".to_string(),
            }),
            EventPayload::Order(OrderEvent::Ready {
                order_id: "A-1042".to_string(),
                restaurant: "Luigi's Trattoria".to_string(),
            }),
            EventPayload::Account(AccountEvent::ProfileUpdated {
                field: "phone number".to_string(),
            }),
        ],
        RoleScope::Manager => vec![
            EventPayload::Order(OrderEvent::Placed {
                order_id: "A-1043".to_string(),
                restaurant: "Harbor Grill".to_string(),
                item_count: 1,
                total: "$18.00".to_string(),
            }),
            EventPayload::Inventory(InventoryEvent::LowStock {
                item: "Fresh basil".to_string(),
                remaining: 2,
                unit: "kg".to_string(),
            }),
            EventPayload::Staff(StaffEvent::ShiftStarted {
                staff_name: "Dana Ruiz".to_string(),
                shift: "Lunch".to_string(),
            }),
            EventPayload::Reservation(ReservationEvent::Created {
                reservation_id: "R-319".to_string(),
                restaurant: "Harbor Grill".to_string(),
                party_size: 6,
                date: "Saturday".to_string(),
                time: "20:00".to_string(),
            }),
            EventPayload::Staff(StaffEvent::ShiftMissed {
                staff_name: "Marco Bell".to_string(),
                shift: "Dinner".to_string(),
            }),
            EventPayload::Inventory(InventoryEvent::OutOfStock {
                item: "Salmon fillet".to_string(),
            }),
        ],
        RoleScope::Owner => vec![
            EventPayload::Payment(PaymentEvent::Failed {
                payment_id: "P-5540".to_string(),
                order_id: "A-1050".to_string(),
                amount: "$96.20".to_string(),
                reason: "card expired".to_string(),
            }),
            EventPayload::Staff(StaffEvent::TimeOffRequested {
                staff_name: "Dana Ruiz".to_string(),
                start_date: "June 3".to_string(),
                end_date: "June 7".to_string(),
            }),
            EventPayload::Reservation(ReservationEvent::Cancelled {
                reservation_id: "R-301".to_string(),
                restaurant: "Harbor Grill".to_string(),
                date: "Sunday".to_string(),
            }),
            EventPayload::Payment(PaymentEvent::Refunded {
                payment_id: "P-5522".to_string(),
                order_id: "A-1031".to_string(),
                amount: "$12.00".to_string(),
            }),
            EventPayload::System(SystemEvent::Maintenance {
                window: "Tuesday 02:00 UTC".to_string(),
                duration_minutes: 30,
            }),
        ],
        RoleScope::Admin => Vec::new(),
    };

    let actor = match role {
        RoleScope::Customer => customer,
        _ => manager,
    };
    payloads
        .into_iter()
        .map(|payload| DomainEvent::new(actor.clone(), payload))
        .collect()
}

/// Sample audit log entries for the admin feed.
pub fn sample_audit_entries() -> Vec<AuditLogEntry> {
    vec![
        AuditLogEntry::new(
            "user.login",
            "Signed in to the admin console",
            "adm-1",
            "Avery Admin",
            AuditSeverity::Low,
        )
        .with_ip("10.0.4.12"),
        AuditLogEntry::new(
            "business.approve",
            "Approved listing for Harbor Grill",
            "adm-1",
            "Avery Admin",
            AuditSeverity::Medium,
        )
        .with_ip("10.0.4.12"),
        AuditLogEntry::new(
            "user.suspend",
            "Suspended account cust-2210 after repeated chargebacks",
            "adm-2",
            "Jordan Ops",
            AuditSeverity::High,
        )
        .with_ip("10.0.7.3"),
        AuditLogEntry::new(
            "settings.update",
            "Changed platform commission to 12%",
            "adm-2",
            "Jordan Ops",
            AuditSeverity::Medium,
        )
        .with_ip("10.0.7.3"),
    ]
}
