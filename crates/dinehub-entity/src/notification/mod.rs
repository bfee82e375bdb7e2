//! Notification domain entities.

pub mod kind;
pub mod model;
pub mod priority;

pub use kind::NotificationKind;
pub use model::{ActionTarget, Notification, NotificationData};
pub use priority::NotificationPriority;
