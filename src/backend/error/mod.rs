//! Backend Error Module
//!
//! Error types returned by HTTP handlers and middleware, and their
//! conversion into JSON responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, AUTHENTICATION_REQUIRED};
