//! # dinehub-notify
//!
//! Role-scoped notification center for the DineHub console:
//!
//! - Template engine mapping domain events to notification content
//! - Generic in-memory store, one instance per role scope
//! - Admin feed derived on every read from the audit log
//! - Read-side search and filters
//! - Bell menu boundary with a navigation seam
//! - Demo traffic generator

pub mod center;
pub mod demo;
pub mod derived;
pub mod feed;
pub mod gateway;
pub mod query;
pub mod scope;
pub mod store;
pub mod template;

pub use center::NotificationCenter;
pub use demo::DemoFeed;
pub use derived::{AdminFeed, AdminFields, AuditLog, MemoryAuditLog, to_notification_view};
pub use feed::NotificationFeed;
pub use gateway::{BellMenu, BellSnapshot, DefaultRoutes, Destination, Navigator, RouteResolver};
pub use query::NotificationQuery;
pub use scope::{CustomerScope, ManagerScope, OwnerScope, Scope};
pub use store::NotificationStore;
pub use template::TemplateEngine;
