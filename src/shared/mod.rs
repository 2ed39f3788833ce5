//! Shared Module
//!
//! Domain types, validation rules and configuration that the backend builds
//! on. Nothing in here touches HTTP or the database.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// User account types
pub mod user;

/// Publication types
pub mod publication;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, SecretKey};
pub use error::SharedError;
pub use publication::{Publication, PublicationDraft, PublicationId};
pub use user::{NewUser, PasswordChange, User, UserId, UserUpdate};
