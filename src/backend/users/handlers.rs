//! User HTTP Handlers
//!
//! Account creation, lookup, search, profile edits, deletion and password
//! changes. Every mutation checks the self-mutation rule before touching
//! the database.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use super::db;
use crate::backend::auth::credentials::{hash_password_blocking, verify_password_blocking, CredentialError};
use crate::backend::auth::policy::{authorize, OwnershipRule};
use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, JsonBody, PathParam, QueryParams};
use crate::backend::server::state::AppState;
use crate::shared::user::{NewUser, PasswordChange, User, UserId, UserUpdate};

/// `GET /users?user=<q>`
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub user: String,
}

/// Create an account (public)
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(mut request): JsonBody<NewUser>,
) -> Result<(StatusCode, Json<User>), BackendError> {
    request.prepare()?;

    let digest = hash_password_blocking(std::mem::take(&mut request.password), state.bcrypt_cost).await?;
    let user = db::create_user(&state.db_pool, &request, &digest).await?;

    tracing::info!(user_id = user.id, nick = %user.nick, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Search by name or nick; an empty query lists everyone
pub async fn search_users(
    State(pool): State<SqlitePool>,
    QueryParams(params): QueryParams<SearchParams>,
) -> Result<Json<Vec<User>>, BackendError> {
    let query = params.user.trim().to_lowercase();
    let users = db::search_users(&pool, &query).await?;
    Ok(Json(users))
}

pub async fn get_user(
    State(pool): State<SqlitePool>,
    PathParam(user_id): PathParam<UserId>,
) -> Result<Json<User>, BackendError> {
    let user = db::find_user(&pool, user_id)
        .await?
        .ok_or(BackendError::not_found("user"))?;
    Ok(Json(user))
}

/// Edit name, nick and email of your own account
pub async fn update_user(
    State(pool): State<SqlitePool>,
    subject: AuthUser,
    PathParam(user_id): PathParam<UserId>,
    JsonBody(mut update): JsonBody<UserUpdate>,
) -> Result<StatusCode, BackendError> {
    authorize(OwnershipRule::SelfMutation, subject.id(), user_id)?;
    update.prepare()?;

    if !db::update_user(&pool, user_id, &update).await? {
        return Err(BackendError::not_found("user"));
    }

    tracing::info!(user_id, "User updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Delete your own account
pub async fn delete_user(
    State(pool): State<SqlitePool>,
    subject: AuthUser,
    PathParam(user_id): PathParam<UserId>,
) -> Result<StatusCode, BackendError> {
    authorize(OwnershipRule::SelfMutation, subject.id(), user_id)?;

    if !db::delete_user(&pool, user_id).await? {
        return Err(BackendError::not_found("user"));
    }

    tracing::info!(user_id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Replace your own password after proving you know the current one
///
/// A wrong current password is a 400, not a 401: the caller is already
/// authenticated.
pub async fn update_password(
    State(state): State<AppState>,
    subject: AuthUser,
    PathParam(user_id): PathParam<UserId>,
    JsonBody(change): JsonBody<PasswordChange>,
) -> Result<StatusCode, BackendError> {
    authorize(OwnershipRule::SelfMutation, subject.id(), user_id)?;
    change.prepare()?;

    let stored = db::find_password_by_id(&state.db_pool, user_id)
        .await?
        .ok_or(BackendError::not_found("user"))?;

    match verify_password_blocking(stored, change.current_password).await {
        Ok(()) => {}
        Err(CredentialError::Mismatch) => {
            return Err(BackendError::handler(
                StatusCode::BAD_REQUEST,
                "current password is incorrect",
            ));
        }
        Err(e) => return Err(e.into()),
    }

    let digest = hash_password_blocking(change.new_password, state.bcrypt_cost).await?;
    db::update_password(&state.db_pool, user_id, &digest).await?;

    tracing::info!(user_id, "Password changed");
    Ok(StatusCode::NO_CONTENT)
}
