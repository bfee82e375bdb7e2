//! Role-scope adapters for the generic notification store.
//!
//! Each scope fixes the enrichment fields its records carry, the closed set
//! of kinds it accepts, and its priority ceiling. The customer feed uses
//! the three-level `low..=high` range; venue feeds use all four levels.
//! The admin feed is not stored and has no scope; see [`crate::derived`].

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use dinehub_core::events::DomainEvent;
use dinehub_entity::{NotificationKind, NotificationPriority, RoleScope};

/// Role-specific fields carried by a notification record.
pub trait Enrichment: Clone + fmt::Debug + Serialize + Send + Sync + 'static {
    /// Values included in free-text search.
    fn search_terms(&self) -> Vec<&str>;

    /// Who caused the notification, when known.
    fn actor(&self) -> Option<&str> {
        None
    }
}

/// A role scope served by a notification store.
pub trait Scope: Send + Sync + 'static {
    /// Enrichment carried by this scope's records.
    type Fields: Enrichment;

    /// The dashboard role.
    const ROLE: RoleScope;

    /// Kinds this scope accepts.
    const KINDS: &'static [NotificationKind];

    /// Highest priority this scope displays; higher values are clamped.
    const PRIORITY_CEILING: NotificationPriority;

    /// Whether `kind` belongs to this scope.
    fn allows(kind: NotificationKind) -> bool {
        Self::KINDS.contains(&kind)
    }

    /// Derive enrichment from the event that produced a notification.
    fn fields_for(event: &DomainEvent) -> Self::Fields;
}

fn param_string(event: &DomainEvent, keys: &[&str]) -> Option<String> {
    let params = event.params();
    keys.iter().find_map(|key| match params.get(*key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Enrichment for diner notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFields {
    /// Order, reservation or payment reference the notification is about.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Restaurant involved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<String>,
}

impl Enrichment for CustomerFields {
    fn search_terms(&self) -> Vec<&str> {
        [self.reference.as_deref(), self.restaurant.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Enrichment for owner and manager notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueFields {
    /// Venue the event happened at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    /// Staff member or customer who triggered the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_name: Option<String>,
}

impl Enrichment for VenueFields {
    fn search_terms(&self) -> Vec<&str> {
        [self.venue.as_deref(), self.actor_name.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }

    fn actor(&self) -> Option<&str> {
        self.actor_name.as_deref()
    }
}

/// Diner dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerScope;

impl Scope for CustomerScope {
    type Fields = CustomerFields;
    const ROLE: RoleScope = RoleScope::Customer;
    const KINDS: &'static [NotificationKind] = &[
        NotificationKind::Order,
        NotificationKind::Reservation,
        NotificationKind::Payment,
        NotificationKind::Account,
        NotificationKind::Loyalty,
        NotificationKind::System,
    ];
    const PRIORITY_CEILING: NotificationPriority = NotificationPriority::High;

    fn fields_for(event: &DomainEvent) -> CustomerFields {
        CustomerFields {
            reference: param_string(event, &["order_id", "reservation_id", "payment_id"]),
            restaurant: param_string(event, &["restaurant"]),
        }
    }
}

/// Venue operations manager dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManagerScope;

impl Scope for ManagerScope {
    type Fields = VenueFields;
    const ROLE: RoleScope = RoleScope::Manager;
    const KINDS: &'static [NotificationKind] = &[
        NotificationKind::Order,
        NotificationKind::Reservation,
        NotificationKind::Payment,
        NotificationKind::Inventory,
        NotificationKind::Staff,
        NotificationKind::System,
    ];
    const PRIORITY_CEILING: NotificationPriority = NotificationPriority::Urgent;

    fn fields_for(event: &DomainEvent) -> VenueFields {
        venue_fields(event)
    }
}

/// Business owner dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnerScope;

impl Scope for OwnerScope {
    type Fields = VenueFields;
    const ROLE: RoleScope = RoleScope::Owner;
    const KINDS: &'static [NotificationKind] = &[
        NotificationKind::Order,
        NotificationKind::Reservation,
        NotificationKind::Payment,
        NotificationKind::Account,
        NotificationKind::Inventory,
        NotificationKind::Staff,
        NotificationKind::System,
    ];
    const PRIORITY_CEILING: NotificationPriority = NotificationPriority::Urgent;

    fn fields_for(event: &DomainEvent) -> VenueFields {
        venue_fields(event)
    }
}

fn venue_fields(event: &DomainEvent) -> VenueFields {
    VenueFields {
        venue: param_string(event, &["restaurant"]),
        actor_name: param_string(event, &["staff_name"]).or_else(|| event.actor_id.clone()),
    }
}
