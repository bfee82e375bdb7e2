//! Dashboard role scopes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use dinehub_core::AppError;

/// The dashboard personas, each with its own independent notification feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleScope {
    /// Platform administrator; sees the audit-derived feed.
    Admin,
    /// Business owner.
    Owner,
    /// Venue operations manager.
    Manager,
    /// Diner.
    Customer,
}

impl RoleScope {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Owner => "owner",
            Self::Manager => "manager",
            Self::Customer => "customer",
        }
    }

    /// Whether this role's feed is derived from the audit log rather than stored.
    pub fn is_derived(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for RoleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoleScope {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "owner" => Ok(Self::Owner),
            "manager" => Ok(Self::Manager),
            "customer" => Ok(Self::Customer),
            _ => Err(AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: admin, owner, manager, customer"
            ))),
        }
    }
}
