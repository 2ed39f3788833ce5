//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP server over a
//! SQLite database, with bearer-token authentication and per-resource
//! ownership checks.
//!
//! # Architecture
//!
//! - **`server`** - State, database pool, app creation
//! - **`routes`** - Route tables and router assembly
//! - **`auth`** - Passwords, identity tokens, ownership policy, login
//! - **`middleware`** - Authentication gate and `AuthUser` extractor
//! - **`users`** - Accounts
//! - **`followers`** - Follow edges
//! - **`publications`** - Posts, feed, likes
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── db.rs           - Id conversion helpers
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication core
//! ├── middleware/     - Request middleware
//! ├── users/          - User storage and handlers
//! ├── followers/      - Follower storage and handlers
//! ├── publications/   - Publication storage and handlers
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! request → `TraceLayer` span → gate (protected routes only) → handler →
//! ownership check → database → JSON response or `BackendError`

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication core
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Storage helpers
pub(crate) mod db;

/// User accounts
pub mod users;

/// Follower relationships
pub mod followers;

/// Publications
pub mod publications;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState};
