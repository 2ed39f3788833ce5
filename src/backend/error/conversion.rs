/**
 * Error Conversion
 *
 * Turns a `BackendError` into a JSON response:
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 * The internal cause is logged here, once, before it is dropped.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Unauthenticated(reason) => tracing::warn!("Rejected request: {}", reason),
            Self::InvalidCredentials => tracing::warn!("Login rejected: invalid credentials"),
            Self::Database(err) => tracing::error!("Database error: {:?}", err),
            Self::Hashing { message } => tracing::error!("Password hashing failed: {}", message),
            other if status.is_server_error() => tracing::error!("{}", other),
            other => tracing::debug!("{}", other),
        }

        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

/// Fallback for unknown routes
pub async fn not_found() -> Response {
    BackendError::handler(StatusCode::NOT_FOUND, "route not found").into_response()
}
