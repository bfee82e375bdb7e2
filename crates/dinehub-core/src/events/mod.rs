//! Domain events emitted by the restaurant console.
//!
//! Events are the input side of the notification center: each payload
//! names an [`EventKind`] and supplies the [`TemplateParams`] its template
//! interpolates.

pub mod account;
pub mod inventory;
pub mod order;
pub mod payment;
pub mod reservation;
pub mod staff;
pub mod system;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::types::id::EventId;

pub use account::{AccountEvent, LoyaltyEvent};
pub use inventory::InventoryEvent;
pub use order::OrderEvent;
pub use payment::PaymentEvent;
pub use reservation::ReservationEvent;
pub use staff::StaffEvent;
pub use system::SystemEvent;

/// Named parameters interpolated into a notification template.
pub type TemplateParams = HashMap<String, Value>;

/// Build [`TemplateParams`] from a JSON object literal.
///
/// Non-object values produce an empty parameter set.
pub fn params(value: Value) -> TemplateParams {
    match value {
        Value::Object(map) => map.into_iter().collect(),
        _ => TemplateParams::new(),
    }
}

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: EventId,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The user who caused the event (if known).
    pub actor_id: Option<String>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all domain event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event", rename_all = "snake_case")]
pub enum EventPayload {
    /// An order-related event.
    Order(OrderEvent),
    /// A reservation-related event.
    Reservation(ReservationEvent),
    /// A payment-related event.
    Payment(PaymentEvent),
    /// A loyalty program event.
    Loyalty(LoyaltyEvent),
    /// A customer account event.
    Account(AccountEvent),
    /// An inventory event.
    Inventory(InventoryEvent),
    /// A staff scheduling event.
    Staff(StaffEvent),
    /// A platform-level event.
    System(SystemEvent),
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(actor_id: Option<String>, payload: EventPayload) -> Self {
        Self {
            id: EventId::new(),
            timestamp: Utc::now(),
            actor_id,
            payload,
        }
    }

    /// The template key for this event.
    pub fn kind(&self) -> EventKind {
        match &self.payload {
            EventPayload::Order(e) => e.kind(),
            EventPayload::Reservation(e) => e.kind(),
            EventPayload::Payment(e) => e.kind(),
            EventPayload::Loyalty(e) => e.kind(),
            EventPayload::Account(e) => e.kind(),
            EventPayload::Inventory(e) => e.kind(),
            EventPayload::Staff(e) => e.kind(),
            EventPayload::System(e) => e.kind(),
        }
    }

    /// The template parameters for this event.
    pub fn params(&self) -> TemplateParams {
        match &self.payload {
            EventPayload::Order(e) => e.params(),
            EventPayload::Reservation(e) => e.params(),
            EventPayload::Payment(e) => e.params(),
            EventPayload::Loyalty(e) => e.params(),
            EventPayload::Account(e) => e.params(),
            EventPayload::Inventory(e) => e.params(),
            EventPayload::Staff(e) => e.params(),
            EventPayload::System(e) => e.params(),
        }
    }
}

/// Closed set of event kinds that have a notification template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A new order was placed.
    OrderPlaced,
    /// An order is ready for pickup or serving.
    OrderReady,
    /// An order was delivered.
    OrderDelivered,
    /// An order was cancelled.
    OrderCancelled,
    /// A reservation request was created.
    ReservationCreated,
    /// A reservation was confirmed by the venue.
    ReservationConfirmed,
    /// A reservation's time or party size changed.
    ReservationUpdated,
    /// A reservation was cancelled.
    ReservationCancelled,
    /// A reservation is coming up soon.
    ReservationReminder,
    /// A payment went through.
    PaymentCompleted,
    /// A payment was declined.
    PaymentFailed,
    /// A refund was issued.
    RefundIssued,
    /// Loyalty points were credited.
    LoyaltyPointsEarned,
    /// A loyalty reward became available.
    LoyaltyRewardUnlocked,
    /// Profile details were changed.
    ProfileUpdated,
    /// The account password was changed.
    PasswordChanged,
    /// An item fell below its reorder threshold.
    LowStock,
    /// An item ran out.
    OutOfStock,
    /// A staff member started a shift.
    ShiftStarted,
    /// A staff member missed a scheduled shift.
    ShiftMissed,
    /// A staff member asked for time off.
    TimeOffRequested,
    /// Planned platform maintenance.
    SystemMaintenance,
    /// An entry was appended to the audit log.
    AuditRecorded,
}

impl EventKind {
    /// Every event kind, in catalog order.
    pub const ALL: [EventKind; 23] = [
        Self::OrderPlaced,
        Self::OrderReady,
        Self::OrderDelivered,
        Self::OrderCancelled,
        Self::ReservationCreated,
        Self::ReservationConfirmed,
        Self::ReservationUpdated,
        Self::ReservationCancelled,
        Self::ReservationReminder,
        Self::PaymentCompleted,
        Self::PaymentFailed,
        Self::RefundIssued,
        Self::LoyaltyPointsEarned,
        Self::LoyaltyRewardUnlocked,
        Self::ProfileUpdated,
        Self::PasswordChanged,
        Self::LowStock,
        Self::OutOfStock,
        Self::ShiftStarted,
        Self::ShiftMissed,
        Self::TimeOffRequested,
        Self::SystemMaintenance,
        Self::AuditRecorded,
    ];

    /// Dotted event name, e.g. `"order.placed"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OrderPlaced => "order.placed",
            Self::OrderReady => "order.ready",
            Self::OrderDelivered => "order.delivered",
            Self::OrderCancelled => "order.cancelled",
            Self::ReservationCreated => "reservation.created",
            Self::ReservationConfirmed => "reservation.confirmed",
            Self::ReservationUpdated => "reservation.updated",
            Self::ReservationCancelled => "reservation.cancelled",
            Self::ReservationReminder => "reservation.reminder",
            Self::PaymentCompleted => "payment.completed",
            Self::PaymentFailed => "payment.failed",
            Self::RefundIssued => "payment.refunded",
            Self::LoyaltyPointsEarned => "loyalty.points_earned",
            Self::LoyaltyRewardUnlocked => "loyalty.reward_unlocked",
            Self::ProfileUpdated => "account.profile_updated",
            Self::PasswordChanged => "account.password_changed",
            Self::LowStock => "inventory.low_stock",
            Self::OutOfStock => "inventory.out_of_stock",
            Self::ShiftStarted => "staff.shift_started",
            Self::ShiftMissed => "staff.shift_missed",
            Self::TimeOffRequested => "staff.time_off_requested",
            Self::SystemMaintenance => "system.maintenance",
            Self::AuditRecorded => "audit.recorded",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == needle)
            .ok_or_else(|| AppError::validation(format!("Unknown event kind: '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_kind_names_round_trip() {
        for kind in EventKind::ALL {
            assert_eq!(kind.as_str().parse::<EventKind>().unwrap(), kind);
        }
        assert!("order.teleported".parse::<EventKind>().is_err());
    }

    #[test]
    fn test_params_from_non_object_is_empty() {
        assert!(params(json!("just a string")).is_empty());
        assert_eq!(params(json!({"a": 1, "b": "x"})).len(), 2);
    }

    #[test]
    fn test_domain_event_delegates_to_payload() {
        let event = DomainEvent::new(
            Some("cust-7".to_string()),
            EventPayload::Order(OrderEvent::Placed {
                order_id: "A-1042".to_string(),
                restaurant: "Luigi's".to_string(),
                item_count: 3,
                total: "42.50".to_string(),
            }),
        );

        assert_eq!(event.kind(), EventKind::OrderPlaced);
        let params = event.params();
        assert_eq!(params["order_id"], json!("A-1042"));
        assert_eq!(params["item_count"], json!(3));
    }

    #[test]
    fn test_payload_serde_tagging() {
        let payload = EventPayload::Inventory(InventoryEvent::LowStock {
            item: "Basil".to_string(),
            remaining: 2,
            unit: "kg".to_string(),
        });
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["domain"], json!("inventory"));
        assert_eq!(value["event"]["type"], json!("low_stock"));
    }
}
