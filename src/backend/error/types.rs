/**
 * Backend Error Types
 *
 * Every failure a handler can hit, each with a fixed HTTP status. The
 * message shown to clients is deliberately coarse for authentication and
 * storage failures; the detailed cause is logged when the error is turned
 * into a response.
 *
 * # Status Code Mapping
 *
 * - `Unauthenticated`, `InvalidCredentials` - 401
 * - `Forbidden` - 403
 * - `Validation` - 400
 * - `NotFound` - 404
 * - `Conflict` - 409
 * - `Hashing`, `Database` - 500
 * - `HandlerError` - carries its own status
 */

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::credentials::CredentialError;
use crate::backend::auth::policy::PolicyViolation;
use crate::backend::auth::sessions::TokenError;
use crate::shared::SharedError;

/// Client-facing message for every authentication failure
pub const AUTHENTICATION_REQUIRED: &str = "authentication required";

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing, malformed, expired or badly signed token
    #[error("Authentication failed: {0}")]
    Unauthenticated(#[from] TokenError),

    /// Login with an unknown email or a wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Valid identity, disallowed action on the target resource
    #[error("Forbidden: {0}")]
    Forbidden(#[from] PolicyViolation),

    /// Malformed request payload
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Password hashing failed
    #[error("Hashing error: {message}")]
    Hashing { message: String },

    /// Resource does not exist
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// Unique constraint violated
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Handler error with an explicit status
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Storage failure
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated(_) | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Hashing { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::HandlerError { status, .. } => *status,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the client
    pub fn message(&self) -> String {
        match self {
            Self::Unauthenticated(_) => AUTHENTICATION_REQUIRED.to_string(),
            Self::InvalidCredentials => "invalid credentials".to_string(),
            Self::Forbidden(violation) => violation.to_string(),
            Self::Validation(err) => err.message().to_string(),
            Self::Hashing { .. } => "internal error".to_string(),
            Self::NotFound { resource } => format!("{} not found", resource),
            Self::Conflict { message } => message.clone(),
            Self::HandlerError { message, .. } => message.clone(),
            Self::Database(_) => "database error".to_string(),
        }
    }
}

impl From<sqlx::Error> for BackendError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::Conflict {
                    message: "nick or email already in use".to_string(),
                };
            }
            // Every foreign key references users; the other side was checked
            // by the handler, so the caller's own account is gone
            if db_err.is_foreign_key_violation() {
                return Self::not_found("user");
            }
        }
        Self::Database(err)
    }
}

impl From<CredentialError> for BackendError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::Mismatch => Self::InvalidCredentials,
            CredentialError::Hashing(message) => Self::Hashing { message },
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::handler(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        Self::handler(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for BackendError {
    fn from(rejection: QueryRejection) -> Self {
        Self::handler(rejection.status(), rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::policy::OwnershipRule;

    #[test]
    fn test_handler_error() {
        let error = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
        match error {
            BackendError::HandlerError { status, message } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "Invalid request");
            }
            _ => panic!("Expected HandlerError"),
        }
    }

    #[test]
    fn test_status_code_mapping() {
        let cases = [
            (BackendError::from(TokenError::Expired), StatusCode::UNAUTHORIZED),
            (BackendError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (
                BackendError::from(PolicyViolation { rule: OwnershipRule::Authorship }),
                StatusCode::FORBIDDEN,
            ),
            (
                BackendError::from(SharedError::validation("title", "Title cannot be blank")),
                StatusCode::BAD_REQUEST,
            ),
            (BackendError::not_found("user"), StatusCode::NOT_FOUND),
            (
                BackendError::Hashing { message: "boom".to_string() },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (BackendError::from(sqlx::Error::RowNotFound), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, status) in cases {
            assert_eq!(error.status_code(), status, "{:?}", error);
        }
    }

    #[test]
    fn test_token_failures_share_one_message() {
        let reasons = [
            TokenError::Missing,
            TokenError::Expired,
            TokenError::BadSignature,
            TokenError::Malformed("bad base64".to_string()),
        ];
        for reason in reasons {
            assert_eq!(BackendError::from(reason).message(), AUTHENTICATION_REQUIRED);
        }
    }

    #[test]
    fn test_credential_errors() {
        assert!(matches!(
            BackendError::from(CredentialError::Mismatch),
            BackendError::InvalidCredentials
        ));
        assert!(matches!(
            BackendError::from(CredentialError::Hashing("x".to_string())),
            BackendError::Hashing { .. }
        ));
    }

    #[test]
    fn test_database_message_is_generic() {
        let error = BackendError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(error.message(), "database error");
    }
}
