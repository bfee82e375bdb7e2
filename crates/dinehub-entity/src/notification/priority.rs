//! Notification priority levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use dinehub_core::AppError;

/// Ordered notification priority.
///
/// The customer and admin scopes only use `Low..=High`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPriority {
    /// Informational.
    Low,
    /// Worth a look.
    #[default]
    Medium,
    /// Needs attention.
    High,
    /// Needs attention now.
    Urgent,
}

impl NotificationPriority {
    /// Parse from string, falling back to `Medium`.
    pub fn from_str_value(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            "urgent" => Self::Urgent,
            _ => Self::Medium,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Whether a notification of this priority requires action.
    pub fn requires_action(&self) -> bool {
        matches!(self, Self::High | Self::Urgent)
    }

    /// Cap this priority at `ceiling`.
    pub fn clamp_to(self, ceiling: NotificationPriority) -> Self {
        self.min(ceiling)
    }
}

impl fmt::Display for NotificationPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationPriority {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(AppError::validation(format!(
                "Invalid priority: '{s}'. Expected one of: low, medium, high, urgent"
            ))),
        }
    }
}
