//! Core type definitions used across the DineHub workspace.

pub mod id;

pub use id::*;
