//! Reservation domain events.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{EventKind, TemplateParams, params};

/// Table reservation events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReservationEvent {
    /// A reservation request was submitted.
    Created {
        /// Reservation reference.
        reservation_id: String,
        /// Restaurant name.
        restaurant: String,
        /// Number of guests.
        party_size: u32,
        /// Reservation date.
        date: String,
        /// Reservation time.
        time: String,
    },
    /// The venue confirmed the reservation.
    Confirmed {
        /// Reservation reference.
        reservation_id: String,
        /// Restaurant name.
        restaurant: String,
        /// Number of guests.
        party_size: u32,
        /// Reservation date.
        date: String,
        /// Reservation time.
        time: String,
    },
    /// Date, time or party size changed.
    Updated {
        /// Reservation reference.
        reservation_id: String,
        /// Restaurant name.
        restaurant: String,
        /// Number of guests.
        party_size: u32,
        /// New date.
        date: String,
        /// New time.
        time: String,
    },
    /// The reservation was cancelled.
    Cancelled {
        /// Reservation reference.
        reservation_id: String,
        /// Restaurant name.
        restaurant: String,
        /// Original date.
        date: String,
    },
    /// The reservation starts soon.
    Reminder {
        /// Reservation reference.
        reservation_id: String,
        /// Restaurant name.
        restaurant: String,
        /// Reservation time.
        time: String,
    },
}

impl ReservationEvent {
    /// The template key for this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Created { .. } => EventKind::ReservationCreated,
            Self::Confirmed { .. } => EventKind::ReservationConfirmed,
            Self::Updated { .. } => EventKind::ReservationUpdated,
            Self::Cancelled { .. } => EventKind::ReservationCancelled,
            Self::Reminder { .. } => EventKind::ReservationReminder,
        }
    }

    /// The template parameters for this event.
    pub fn params(&self) -> TemplateParams {
        match self {
            Self::Created {
                reservation_id,
                restaurant,
                party_size,
                date,
                time,
            }
            | Self::Confirmed {
                reservation_id,
                restaurant,
                party_size,
                date,
                time,
            }
            | Self::Updated {
                reservation_id,
                restaurant,
                party_size,
                date,
                time,
            } => params(json!({
                "reservation_id": reservation_id,
                "restaurant": restaurant,
                "party_size": party_size,
                "date": date,
                "time": time,
            })),
            Self::Cancelled {
                reservation_id,
                restaurant,
                date,
            } => params(json!({
                "reservation_id": reservation_id,
                "restaurant": restaurant,
                "date": date,
            })),
            Self::Reminder {
                reservation_id,
                restaurant,
                time,
            } => params(json!({
                "reservation_id": reservation_id,
                "restaurant": restaurant,
                "time": time,
            })),
        }
    }
}
