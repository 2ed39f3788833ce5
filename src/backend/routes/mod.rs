//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs                - Module exports and documentation
//! ├── route.rs              - Route table entry
//! ├── router.rs             - Router assembly, gate, tracing, fallback
//! ├── user_routes.rs        - Login, users and followers
//! └── publication_routes.rs - Publications
//! ```
//!
//! # Authentication
//!
//! Only `POST /login` and `POST /users` are public. Everything else sits
//! behind `middleware::require_authentication`.

/// Route table entry
pub mod route;

/// Main router creation
pub mod router;

/// Login, user and follower routes
pub mod user_routes;

/// Publication routes
pub mod publication_routes;

// Re-export commonly used functions
pub use route::Route;
pub use router::{all_routes, configure, create_router};
