//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! - **`auth`** - Authentication gate for protected routes and the
//!   `AuthUser` extractor handlers use to read the subject
//! - **`extract`** - `JsonBody`, `PathParam` and `QueryParams`, whose
//!   rejections render as `BackendError` JSON
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use socialnet::backend::middleware::require_authentication;
//!
//! let protected = method_router.route_layer(from_fn_with_state(state, require_authentication));
//! ```

pub mod auth;
pub mod extract;

pub use auth::{bearer_token, require_authentication, AuthUser, AuthenticatedUser};
pub use extract::{JsonBody, PathParam, QueryParams};
