//! Notification center configuration.

use serde::{Deserialize, Serialize};

/// Settings consumed by the notification stores, bell menu, and demo feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Number of items shown by a collapsed bell panel.
    #[serde(default = "default_collapsed_limit")]
    pub collapsed_limit: usize,
    /// Delay between demo notifications in milliseconds.
    #[serde(default = "default_demo_delay")]
    pub demo_delay_ms: u64,
    /// Largest unread count shown verbatim on the badge; above it the
    /// badge reads `"{cap}+"`.
    #[serde(default = "default_badge_cap")]
    pub badge_cap: usize,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            collapsed_limit: default_collapsed_limit(),
            demo_delay_ms: default_demo_delay(),
            badge_cap: default_badge_cap(),
        }
    }
}

fn default_collapsed_limit() -> usize {
    5
}

fn default_demo_delay() -> u64 {
    500
}

fn default_badge_cap() -> usize {
    9
}
