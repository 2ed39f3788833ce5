//! Server Module
//!
//! Everything needed to turn an `AppConfig` into a running router.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database pool and migrations
//! └── init.rs         - State construction and app creation
//! ```
//!
//! # State Management
//!
//! `AppState` holds the SQLite pool, the token service and the bcrypt
//! cost. Handlers extract only what they need through `FromRef`.

/// Application state management
pub mod state;

/// Database loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::{build_state, create_app};
pub use state::AppState;
