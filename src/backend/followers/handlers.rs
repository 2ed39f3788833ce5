//! Follower HTTP Handlers
//!
//! Follow and unfollow are anti-reflexive: the subject may target anyone
//! except themselves.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use super::db;
use crate::backend::auth::policy::{authorize, OwnershipRule};
use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, PathParam};
use crate::backend::users::db::find_user;
use crate::shared::user::{User, UserId};

/// Follow `user_id`. Following someone you already follow is a no-op.
pub async fn follow(
    State(pool): State<SqlitePool>,
    subject: AuthUser,
    PathParam(user_id): PathParam<UserId>,
) -> Result<StatusCode, BackendError> {
    authorize(OwnershipRule::AntiReflexive, subject.id(), user_id)?;

    if find_user(&pool, user_id).await?.is_none() {
        return Err(BackendError::not_found("user"));
    }

    db::follow(&pool, user_id, subject.id()).await?;
    tracing::info!(follower = subject.id(), user_id, "Follow");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn unfollow(
    State(pool): State<SqlitePool>,
    subject: AuthUser,
    PathParam(user_id): PathParam<UserId>,
) -> Result<StatusCode, BackendError> {
    authorize(OwnershipRule::AntiReflexive, subject.id(), user_id)?;

    db::unfollow(&pool, user_id, subject.id()).await?;
    tracing::info!(follower = subject.id(), user_id, "Unfollow");
    Ok(StatusCode::NO_CONTENT)
}

/// Who follows `user_id`
pub async fn followers(
    State(pool): State<SqlitePool>,
    PathParam(user_id): PathParam<UserId>,
) -> Result<Json<Vec<User>>, BackendError> {
    Ok(Json(db::list_followers(&pool, user_id).await?))
}

/// Who `user_id` follows
pub async fn following(
    State(pool): State<SqlitePool>,
    PathParam(user_id): PathParam<UserId>,
) -> Result<Json<Vec<User>>, BackendError> {
    Ok(Json(db::list_following(&pool, user_id).await?))
}
