/**
 * Authentication Middleware
 *
 * This module provides the gate in front of every protected route. It
 * pulls the bearer token from the Authorization header, verifies it once,
 * and attaches the authenticated identity to the request extensions so
 * handlers can take it as an `AuthUser` argument.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::TokenError;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::user::UserId;

/// Authenticated user data extracted from the token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Pull the token out of an `Authorization` header value
///
/// The value must be exactly two space-separated parts with `Bearer` as the
/// scheme (any case). Every other shape yields an empty string, which then
/// fails verification.
pub fn bearer_token(header: Option<&str>) -> &str {
    let Some(value) = header else {
        return "";
    };

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("Bearer") => token,
        _ => "",
    }
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies it with the token service
/// 3. Attaches the subject to request extensions for use in handlers
///
/// Short-circuits with 401 on any failure; the wrapped handler never runs.
pub async fn require_authentication(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let user_id = app_state.tokens.verify(bearer_token(header))?;
    tracing::debug!(user_id, "Request authenticated");

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only works on routes behind [`require_authentication`]; elsewhere the
/// extension is absent and the request is rejected as unauthenticated.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl AuthUser {
    pub fn id(&self) -> UserId {
        self.0.user_id
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .map(AuthUser)
            .ok_or(BackendError::Unauthenticated(TokenError::Missing))
    }
}
