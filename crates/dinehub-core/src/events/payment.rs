//! Payment domain events.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{EventKind, TemplateParams, params};

/// Payment outcome events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentEvent {
    /// The payment was captured.
    Completed {
        /// Payment reference.
        payment_id: String,
        /// Order the payment settles.
        order_id: String,
        /// Formatted amount.
        amount: String,
        /// Payment method label, e.g. `"Visa •••• 4242"`.
        method: String,
    },
    /// The payment was declined.
    Failed {
        /// Payment reference.
        payment_id: String,
        /// Order the payment was meant to settle.
        order_id: String,
        /// Formatted amount.
        amount: String,
        /// Decline reason from the processor.
        reason: String,
    },
    /// Money was returned to the customer.
    Refunded {
        /// Payment reference.
        payment_id: String,
        /// Order being refunded.
        order_id: String,
        /// Formatted amount.
        amount: String,
    },
}

impl PaymentEvent {
    /// The template key for this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Completed { .. } => EventKind::PaymentCompleted,
            Self::Failed { .. } => EventKind::PaymentFailed,
            Self::Refunded { .. } => EventKind::RefundIssued,
        }
    }

    /// The template parameters for this event.
    pub fn params(&self) -> TemplateParams {
        match self {
            Self::Completed {
                payment_id,
                order_id,
                amount,
                method,
            } => params(json!({
                "payment_id": payment_id,
                "order_id": order_id,
                "amount": amount,
                "method": method,
            })),
            Self::Failed {
                payment_id,
                order_id,
                amount,
                reason,
            } => params(json!({
                "payment_id": payment_id,
                "order_id": order_id,
                "amount": amount,
                "reason": reason,
            })),
            Self::Refunded {
                payment_id,
                order_id,
                amount,
            } => params(json!({
                "payment_id": payment_id,
                "order_id": order_id,
                "amount": amount,
            })),
        }
    }
}
