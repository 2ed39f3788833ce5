/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up id and password digest by email
 * 2. Verify password using bcrypt (on the blocking pool)
 * 3. Issue an identity token
 * 4. Return id and token
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same 401 body
 * - Passwords are never logged or returned
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::credentials::verify_password_blocking;
use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;
use crate::backend::middleware::JsonBody;
use crate::backend::users::db::find_credentials_by_email;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - Unknown email or wrong password
/// * `500 Internal Server Error` - Database, hashing or signing failure
///
/// # Example Request
///
/// ```http
/// POST /login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "securepassword123"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "id": 1,
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn login(
    State(pool): State<SqlitePool>,
    State(tokens): State<Arc<TokenService>>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    let email = request.email.trim();

    let Some(credentials) = find_credentials_by_email(&pool, email).await? else {
        tracing::warn!("Login for unknown email");
        return Err(BackendError::InvalidCredentials);
    };

    verify_password_blocking(credentials.password_digest, request.password).await?;

    let token = tokens.issue(credentials.id).map_err(|e| {
        tracing::error!("Failed to create token: {}", e);
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
    })?;
    tracing::info!(user_id = credentials.id, "User logged in");

    Ok(Json(AuthResponse {
        id: credentials.id,
        token,
    }))
}
