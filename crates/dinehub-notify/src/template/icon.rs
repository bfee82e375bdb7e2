//! Icon selection for notification kinds.

use dinehub_entity::NotificationKind;

/// Glyph used when a kind has no dedicated icon.
pub const DEFAULT_ICON: &str = "bell";

/// Icon glyph name for a notification kind.
pub fn icon_for(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Order => "shopping-bag",
        NotificationKind::Reservation => "calendar",
        NotificationKind::Payment => "credit-card",
        NotificationKind::Account => "user",
        NotificationKind::Loyalty => "gift",
        NotificationKind::System => "settings",
        NotificationKind::Inventory => "package",
        NotificationKind::Staff => "users",
        NotificationKind::Audit => "shield",
    }
}

/// Icon glyph name for a kind given as free text; never fails.
pub fn icon_for_str(kind: &str) -> &'static str {
    NotificationKind::from_str_value(kind)
        .map(icon_for)
        .unwrap_or(DEFAULT_ICON)
}
