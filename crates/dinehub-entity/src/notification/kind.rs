//! Notification kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use dinehub_core::AppError;

/// Domain category of a notification, used for filtering, icons and
/// navigation fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Order lifecycle.
    Order,
    /// Table reservations.
    Reservation,
    /// Payments and refunds.
    Payment,
    /// Customer account changes.
    Account,
    /// Loyalty program.
    Loyalty,
    /// Platform notices.
    System,
    /// Stock alerts.
    Inventory,
    /// Staff scheduling.
    Staff,
    /// Audit log entries.
    Audit,
}

impl NotificationKind {
    /// Every kind, in declaration order.
    pub const ALL: [NotificationKind; 9] = [
        Self::Order,
        Self::Reservation,
        Self::Payment,
        Self::Account,
        Self::Loyalty,
        Self::System,
        Self::Inventory,
        Self::Staff,
        Self::Audit,
    ];

    /// Return the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Reservation => "reservation",
            Self::Payment => "payment",
            Self::Account => "account",
            Self::Loyalty => "loyalty",
            Self::System => "system",
            Self::Inventory => "inventory",
            Self::Staff => "staff",
            Self::Audit => "audit",
        }
    }

    /// Parse without failing; unknown strings yield `None`.
    pub fn from_str_value(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|k| k.as_str() == needle)
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_value(s)
            .ok_or_else(|| AppError::validation(format!("Invalid notification kind: '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "Inventory".parse::<NotificationKind>().unwrap(),
            NotificationKind::Inventory
        );
        assert!("delivery".parse::<NotificationKind>().is_err());
        assert_eq!(NotificationKind::from_str_value("  audit "), Some(NotificationKind::Audit));
    }
}
