//! Integration tests for the DineHub notification center.

mod admin_view_test;
mod gateway_test;
mod helpers;
mod store_test;
