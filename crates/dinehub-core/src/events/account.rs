//! Customer account and loyalty events.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{EventKind, TemplateParams, params};

/// Loyalty program events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LoyaltyEvent {
    /// Points were credited after a visit or order.
    PointsEarned {
        /// Points credited by this event.
        points: u32,
        /// Balance after crediting.
        balance: u32,
        /// Where the points were earned.
        restaurant: String,
    },
    /// The customer crossed a reward threshold.
    RewardUnlocked {
        /// Reward description.
        reward: String,
    },
}

impl LoyaltyEvent {
    /// The template key for this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::PointsEarned { .. } => EventKind::LoyaltyPointsEarned,
            Self::RewardUnlocked { .. } => EventKind::LoyaltyRewardUnlocked,
        }
    }

    /// The template parameters for this event.
    pub fn params(&self) -> TemplateParams {
        match self {
            Self::PointsEarned {
                points,
                balance,
                restaurant,
            } => params(json!({
                "points": points,
                "balance": balance,
                "restaurant": restaurant,
            })),
            Self::RewardUnlocked { reward } => params(json!({ "reward": reward })),
        }
    }
}

/// Account self-service events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccountEvent {
    /// A profile field was changed.
    ProfileUpdated {
        /// Human-readable field name.
        field: String,
    },
    /// The password was changed.
    PasswordChanged,
}

impl AccountEvent {
    /// The template key for this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::ProfileUpdated { .. } => EventKind::ProfileUpdated,
            Self::PasswordChanged => EventKind::PasswordChanged,
        }
    }

    /// The template parameters for this event.
    pub fn params(&self) -> TemplateParams {
        match self {
            Self::ProfileUpdated { field } => params(json!({ "field": field })),
            Self::PasswordChanged => TemplateParams::new(),
        }
    }
}
