//! Common test utilities and helpers
//!
//! - An in-memory application driven through `tower::ServiceExt::oneshot`
//! - Helpers to create accounts and log in over HTTP
//! - Assertions on JSON error bodies

#![allow(dead_code)]

pub mod app;
pub mod assertions;
pub mod auth_helpers;

// Re-export commonly used utilities
pub use app::*;
pub use assertions::*;
pub use auth_helpers::*;
