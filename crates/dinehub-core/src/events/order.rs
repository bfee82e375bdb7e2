//! Order domain events.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{EventKind, TemplateParams, params};

/// Order lifecycle events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrderEvent {
    /// A customer placed an order.
    Placed {
        /// Order number.
        order_id: String,
        /// Restaurant name.
        restaurant: String,
        /// Number of line items.
        item_count: u32,
        /// Formatted order total.
        total: String,
    },
    /// The kitchen marked the order ready.
    Ready {
        /// Order number.
        order_id: String,
        /// Restaurant name.
        restaurant: String,
    },
    /// The order reached the customer.
    Delivered {
        /// Order number.
        order_id: String,
    },
    /// The order was cancelled.
    Cancelled {
        /// Order number.
        order_id: String,
        /// Why it was cancelled.
        reason: String,
    },
}

impl OrderEvent {
    /// The template key for this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Placed { .. } => EventKind::OrderPlaced,
            Self::Ready { .. } => EventKind::OrderReady,
            Self::Delivered { .. } => EventKind::OrderDelivered,
            Self::Cancelled { .. } => EventKind::OrderCancelled,
        }
    }

    /// The template parameters for this event.
    pub fn params(&self) -> TemplateParams {
        match self {
            Self::Placed {
                order_id,
                restaurant,
                item_count,
                total,
            } => params(json!({
                "order_id": order_id,
                "restaurant": restaurant,
                "item_count": item_count,
                "total": total,
            })),
            Self::Ready {
                order_id,
                restaurant,
            } => params(json!({ "order_id": order_id, "restaurant": restaurant })),
            Self::Delivered { order_id } => params(json!({ "order_id": order_id })),
            Self::Cancelled { order_id, reason } => {
                params(json!({ "order_id": order_id, "reason": reason }))
            }
        }
    }
}
