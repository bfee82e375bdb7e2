//! The built-in template for every event kind.

use dinehub_core::events::EventKind;
use dinehub_entity::{NotificationKind, NotificationPriority};

use super::Template;

/// Look up the template for an event kind.
///
/// The match is exhaustive, so every [`EventKind`] has exactly one template.
pub fn template_for(event: EventKind) -> Template {
    use EventKind as E;
    use NotificationKind as K;
    use NotificationPriority as P;

    let (kind, priority, title, message, action) = match event {
        E::OrderPlaced => (
            K::Order,
            P::Medium,
            "New order #{{order_id}}",
            "Order #{{order_id}} at {{restaurant}}: {{item_count|item}}, total {{total}}.",
            Some("/orders/{{order_id}}"),
        ),
        E::OrderReady => (
            K::Order,
            P::High,
            "Order #{{order_id}} is ready",
            "Order #{{order_id}} from {{restaurant}} is ready for pickup.",
            Some("/orders/{{order_id}}"),
        ),
        E::OrderDelivered => (
            K::Order,
            P::Low,
            "Order delivered",
            "Order #{{order_id}} has been delivered. Enjoy your meal!",
            Some("/orders/{{order_id}}"),
        ),
        E::OrderCancelled => (
            K::Order,
            P::High,
            "Order #{{order_id}} cancelled",
            "Order #{{order_id}} was cancelled: {{reason}}.",
            Some("/orders/{{order_id}}"),
        ),
        E::ReservationCreated => (
            K::Reservation,
            P::Medium,
            "New reservation request",
            "{{party_size|guest}} at {{restaurant}} on {{date}} at {{time}}.",
            Some("/reservations/{{reservation_id}}"),
        ),
        E::ReservationConfirmed => (
            K::Reservation,
            P::Medium,
            "Reservation confirmed",
            "Table for {{party_size|guest}} at {{restaurant}} confirmed for {{date}} at {{time}}.",
            Some("/reservations/{{reservation_id}}"),
        ),
        E::ReservationUpdated => (
            K::Reservation,
            P::Medium,
            "Reservation updated",
            "Reservation {{reservation_id}} at {{restaurant}} is now {{party_size|guest}} on {{date}} at {{time}}.",
            Some("/reservations/{{reservation_id}}"),
        ),
        E::ReservationCancelled => (
            K::Reservation,
            P::High,
            "Reservation cancelled",
            "Reservation {{reservation_id}} at {{restaurant}} on {{date}} was cancelled.",
            Some("/reservations/{{reservation_id}}"),
        ),
        E::ReservationReminder => (
            K::Reservation,
            P::Low,
            "Upcoming reservation",
            "Your table at {{restaurant}} is booked for {{time}} today.",
            Some("/reservations/{{reservation_id}}"),
        ),
        E::PaymentCompleted => (
            K::Payment,
            P::Low,
            "Payment received",
            "{{amount}} paid for order #{{order_id}} with {{method}}.",
            Some("/payments/{{payment_id}}"),
        ),
        E::PaymentFailed => (
            K::Payment,
            P::Urgent,
            "Payment failed",
            "The payment of {{amount}} for order #{{order_id}} was declined: {{reason}}.",
            Some("/payments/{{payment_id}}"),
        ),
        E::RefundIssued => (
            K::Payment,
            P::Medium,
            "Refund issued",
            "{{amount}} was refunded for order #{{order_id}}.",
            Some("/payments/{{payment_id}}"),
        ),
        E::LoyaltyPointsEarned => (
            K::Loyalty,
            P::Low,
            "Points earned",
            "You earned {{points|point}} at {{restaurant}}. Balance: {{balance}}.",
            Some("/loyalty"),
        ),
        E::LoyaltyRewardUnlocked => (
            K::Loyalty,
            P::Medium,
            "Reward unlocked",
            "You unlocked {{reward}}!",
            Some("/loyalty"),
        ),
        E::ProfileUpdated => (
            K::Account,
            P::Low,
            "Profile updated",
            "Your {{field}} was updated.",
            Some("/account"),
        ),
        E::PasswordChanged => (
            K::Account,
            P::High,
            "Password changed",
            "Your password was changed. If this wasn't you, reset it now.",
            Some("/account/security"),
        ),
        E::LowStock => (
            K::Inventory,
            P::High,
            "Low stock: {{item}}",
            "Only {{remaining}} {{unit}} of {{item}} left.",
            Some("/inventory"),
        ),
        E::OutOfStock => (
            K::Inventory,
            P::Urgent,
            "Out of stock: {{item}}",
            "{{item}} is out of stock. Dishes using it are marked unavailable.",
            Some("/inventory"),
        ),
        E::ShiftStarted => (
            K::Staff,
            P::Low,
            "Shift started",
            "{{staff_name}} clocked in for the {{shift}} shift.",
            Some("/staff/schedule"),
        ),
        E::ShiftMissed => (
            K::Staff,
            P::High,
            "Missed shift",
            "{{staff_name}} did not show up for the {{shift}} shift.",
            Some("/staff/schedule"),
        ),
        E::TimeOffRequested => (
            K::Staff,
            P::Medium,
            "Time-off request",
            "{{staff_name}} requested time off from {{start_date}} to {{end_date}}.",
            Some("/staff/requests"),
        ),
        E::SystemMaintenance => (
            K::System,
            P::Medium,
            "Scheduled maintenance",
            "The console will be unavailable from {{window}} for {{duration_minutes|minute}}.",
            None,
        ),
        E::AuditRecorded => (
            K::Audit,
            P::Medium,
            "{{action}}",
            "{{actor_name}}: {{description}}",
            Some("/audit"),
        ),
    };

    Template {
        event,
        kind,
        priority,
        title,
        message,
        action,
    }
}
