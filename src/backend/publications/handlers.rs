//! Publication HTTP Handlers
//!
//! The author of a new publication is always the authenticated subject.
//! Edits and deletes load the stored author first and check authorship
//! before writing.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use super::db;
use crate::backend::auth::policy::{authorize, OwnershipRule};
use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, JsonBody, PathParam};
use crate::shared::publication::{Publication, PublicationDraft, PublicationId};
use crate::shared::user::UserId;

pub async fn create_publication(
    State(pool): State<SqlitePool>,
    subject: AuthUser,
    JsonBody(mut draft): JsonBody<PublicationDraft>,
) -> Result<(StatusCode, Json<Publication>), BackendError> {
    draft.prepare()?;

    let id = db::create_publication(&pool, subject.id(), &draft).await?;
    let publication = db::find_publication(&pool, id)
        .await?
        .ok_or(BackendError::not_found("publication"))?;

    tracing::info!(publication_id = id, author_id = subject.id(), "Publication created");
    Ok((StatusCode::CREATED, Json(publication)))
}

/// The subject's own publications plus those of everyone they follow
pub async fn feed(
    State(pool): State<SqlitePool>,
    subject: AuthUser,
) -> Result<Json<Vec<Publication>>, BackendError> {
    Ok(Json(db::feed(&pool, subject.id()).await?))
}

pub async fn get_publication(
    State(pool): State<SqlitePool>,
    PathParam(publication_id): PathParam<PublicationId>,
) -> Result<Json<Publication>, BackendError> {
    let publication = db::find_publication(&pool, publication_id)
        .await?
        .ok_or(BackendError::not_found("publication"))?;
    Ok(Json(publication))
}

/// Load the author of `publication_id` and require it to be `subject`
async fn require_authorship(
    pool: &SqlitePool,
    subject: &AuthUser,
    publication_id: PublicationId,
) -> Result<(), BackendError> {
    let author = db::find_author_id(pool, publication_id)
        .await?
        .ok_or(BackendError::not_found("publication"))?;
    authorize(OwnershipRule::Authorship, subject.id(), author)?;
    Ok(())
}

pub async fn update_publication(
    State(pool): State<SqlitePool>,
    subject: AuthUser,
    PathParam(publication_id): PathParam<PublicationId>,
    JsonBody(mut draft): JsonBody<PublicationDraft>,
) -> Result<StatusCode, BackendError> {
    require_authorship(&pool, &subject, publication_id).await?;
    draft.prepare()?;

    if !db::update_publication(&pool, publication_id, &draft).await? {
        return Err(BackendError::not_found("publication"));
    }

    tracing::info!(publication_id, "Publication updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_publication(
    State(pool): State<SqlitePool>,
    subject: AuthUser,
    PathParam(publication_id): PathParam<PublicationId>,
) -> Result<StatusCode, BackendError> {
    require_authorship(&pool, &subject, publication_id).await?;

    if !db::delete_publication(&pool, publication_id).await? {
        return Err(BackendError::not_found("publication"));
    }

    tracing::info!(publication_id, "Publication deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Everything `user_id` has published
pub async fn publications_by_user(
    State(pool): State<SqlitePool>,
    PathParam(user_id): PathParam<UserId>,
) -> Result<Json<Vec<Publication>>, BackendError> {
    Ok(Json(db::publications_by_author(&pool, user_id).await?))
}

pub async fn like(
    State(pool): State<SqlitePool>,
    PathParam(publication_id): PathParam<PublicationId>,
) -> Result<StatusCode, BackendError> {
    if !db::like(&pool, publication_id).await? {
        return Err(BackendError::not_found("publication"));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Likes never drop below zero
pub async fn unlike(
    State(pool): State<SqlitePool>,
    PathParam(publication_id): PathParam<PublicationId>,
) -> Result<StatusCode, BackendError> {
    if !db::unlike(&pool, publication_id).await? {
        return Err(BackendError::not_found("publication"));
    }
    Ok(StatusCode::NO_CONTENT)
}
