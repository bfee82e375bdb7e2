//! # dinehub-core
//!
//! Core crate for DineHub. Contains the configuration schema, typed
//! identifiers, the domain events that feed the notification center,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other DineHub crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
