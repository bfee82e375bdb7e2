//! Audit entry severity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::notification::NotificationPriority;

/// Severity attached to an audit log entry.
///
/// Deserialization never fails: unknown or null values become `Low`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum AuditSeverity {
    /// Routine activity.
    #[default]
    Low,
    /// Noteworthy activity.
    Medium,
    /// Security-relevant activity.
    High,
}

impl AuditSeverity {
    /// Parse from string, falling back to `Low`.
    pub fn from_str_value(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Low,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Identity mapping onto the three lower notification priorities.
    pub fn as_priority(&self) -> NotificationPriority {
        match self {
            Self::Low => NotificationPriority::Low,
            Self::Medium => NotificationPriority::Medium,
            Self::High => NotificationPriority::High,
        }
    }
}

impl From<Option<String>> for AuditSeverity {
    fn from(value: Option<String>) -> Self {
        value
            .as_deref()
            .map(Self::from_str_value)
            .unwrap_or_default()
    }
}

impl fmt::Display for AuditSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_severity_is_low() {
        let s: AuditSeverity = serde_json::from_str("\"catastrophic\"").unwrap();
        assert_eq!(s, AuditSeverity::Low);
        let s: AuditSeverity = serde_json::from_str("null").unwrap();
        assert_eq!(s, AuditSeverity::Low);
        let s: AuditSeverity = serde_json::from_str("\"HIGH\"").unwrap();
        assert_eq!(s, AuditSeverity::High);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AuditSeverity::Medium).unwrap(),
            "\"medium\""
        );
    }
}
