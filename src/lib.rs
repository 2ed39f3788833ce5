//! socialnet - Main Library
//!
//! A social-network backend: users, publications, follower relationships
//! and password management behind bearer-token authentication.
//!
//! # Module Structure
//!
//! - **`shared`** - Domain types, validation and configuration
//!   - Users, publications and their payloads
//!   - `AppConfig` (defaults, TOML file, environment)
//!   - Error types
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server
//!   - Identity tokens, password digests, ownership policy
//!   - SQLite persistence via sqlx
//!
//! # Usage
//!
//! ```rust,no_run
//! use socialnet::backend::server::init::create_app;
//! use socialnet::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::builder()
//!     .secret_key("change-me")
//!     .database_url("sqlite::memory:")
//!     .build()?;
//! let app = create_app(&config).await?;
//! // Serve with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for payload validation
//! - `shared::ConfigError` for startup configuration
//! - `backend::BackendError` for everything a request can fail with; it
//!   renders itself as a JSON response

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
