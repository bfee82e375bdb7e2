//! Staff scheduling events.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{EventKind, TemplateParams, params};

/// Shift and time-off events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StaffEvent {
    /// A staff member clocked in.
    ShiftStarted {
        /// Staff member's display name.
        staff_name: String,
        /// Shift label, e.g. `"Dinner"`.
        shift: String,
    },
    /// A staff member did not show up.
    ShiftMissed {
        /// Staff member's display name.
        staff_name: String,
        /// Shift label.
        shift: String,
    },
    /// A time-off request awaits approval.
    TimeOffRequested {
        /// Staff member's display name.
        staff_name: String,
        /// First day off.
        start_date: String,
        /// Last day off.
        end_date: String,
    },
}

impl StaffEvent {
    /// The template key for this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::ShiftStarted { .. } => EventKind::ShiftStarted,
            Self::ShiftMissed { .. } => EventKind::ShiftMissed,
            Self::TimeOffRequested { .. } => EventKind::TimeOffRequested,
        }
    }

    /// The template parameters for this event.
    pub fn params(&self) -> TemplateParams {
        match self {
            Self::ShiftStarted { staff_name, shift } | Self::ShiftMissed { staff_name, shift } => {
                params(json!({ "staff_name": staff_name, "shift": shift }))
            }
            Self::TimeOffRequested {
                staff_name,
                start_date,
                end_date,
            } => params(json!({
                "staff_name": staff_name,
                "start_date": start_date,
                "end_date": end_date,
            })),
        }
    }
}
