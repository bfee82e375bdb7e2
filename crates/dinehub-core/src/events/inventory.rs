//! Inventory domain events.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{EventKind, TemplateParams, params};

/// Stock level alerts raised by low-stock detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InventoryEvent {
    /// Stock fell below the reorder threshold.
    LowStock {
        /// Item name.
        item: String,
        /// Quantity left.
        remaining: u32,
        /// Unit of measure.
        unit: String,
    },
    /// Stock is exhausted.
    OutOfStock {
        /// Item name.
        item: String,
    },
}

impl InventoryEvent {
    /// The template key for this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::LowStock { .. } => EventKind::LowStock,
            Self::OutOfStock { .. } => EventKind::OutOfStock,
        }
    }

    /// The template parameters for this event.
    pub fn params(&self) -> TemplateParams {
        match self {
            Self::LowStock {
                item,
                remaining,
                unit,
            } => params(json!({ "item": item, "remaining": remaining, "unit": unit })),
            Self::OutOfStock { item } => params(json!({ "item": item })),
        }
    }
}
