//! Shared Error Types
//!
//! This module defines the validation error raised by the domain models in
//! `shared` when a request payload cannot be accepted as-is.
//!
//! # Usage
//!
//! ```rust
//! use socialnet::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Email format is invalid");
//! assert_eq!(error.field(), "email");
//! ```
use thiserror::Error;

/// Errors produced while validating domain input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }

    /// Message safe to show to the client
    pub fn message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}

/// Trim `value` in place and reject it when nothing is left.
pub(crate) fn require_field(
    field: &'static str,
    label: &str,
    value: &mut String,
) -> Result<(), SharedError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SharedError::validation(
            field,
            format!("{} cannot be blank", label),
        ));
    }
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
    Ok(())
}
