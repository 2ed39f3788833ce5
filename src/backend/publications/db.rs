/**
 * Publication Database Operations
 *
 * Every read joins `users` so a publication always comes back with its
 * author's nick. Listings are newest first, ties broken by id.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::backend::db::{db_id, domain_id};
use crate::shared::publication::{Publication, PublicationDraft, PublicationId};
use crate::shared::user::UserId;

#[derive(Debug, Clone, sqlx::FromRow)]
struct PublicationRow {
    id: i64,
    title: String,
    content: String,
    author_id: i64,
    author_nick: String,
    likes: i64,
    created_at: DateTime<Utc>,
}

impl From<PublicationRow> for Publication {
    fn from(row: PublicationRow) -> Self {
        Publication {
            id: domain_id(row.id),
            title: row.title,
            content: row.content,
            author_id: domain_id(row.author_id),
            author_nick: row.author_nick,
            likes: domain_id(row.likes),
            created_at: row.created_at,
        }
    }
}

const SELECT_PUBLICATION: &str = r#"
    SELECT p.id, p.title, p.content, p.author_id, u.nick AS author_nick, p.likes, p.created_at
    FROM publications p
    INNER JOIN users u ON u.id = p.author_id
"#;

/// Create a publication owned by `author`
///
/// # Returns
/// The new publication's id
pub async fn create_publication(
    pool: &SqlitePool,
    author: UserId,
    draft: &PublicationDraft,
) -> Result<PublicationId, sqlx::Error> {
    let author = db_id(author).ok_or(sqlx::Error::RowNotFound)?;

    let id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO publications (title, content, author_id, likes, created_at)
        VALUES (?, ?, ?, 0, ?)
        RETURNING id
        "#,
    )
    .bind(&draft.title)
    .bind(&draft.content)
    .bind(author)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(domain_id(id))
}

/// Get publication by ID
pub async fn find_publication(
    pool: &SqlitePool,
    id: PublicationId,
) -> Result<Option<Publication>, sqlx::Error> {
    let Some(id) = db_id(id) else {
        return Ok(None);
    };

    let row = sqlx::query_as::<_, PublicationRow>(&format!("{} WHERE p.id = ?", SELECT_PUBLICATION))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Publication::from))
}

/// Publications by `viewer` and by everyone `viewer` follows
///
/// A user who follows nobody still sees their own posts.
pub async fn feed(pool: &SqlitePool, viewer: UserId) -> Result<Vec<Publication>, sqlx::Error> {
    let Some(viewer) = db_id(viewer) else {
        return Ok(Vec::new());
    };

    let rows = sqlx::query_as::<_, PublicationRow>(&format!(
        r#"{}
        LEFT JOIN followers f ON f.user_id = p.author_id AND f.follower_id = ?
        WHERE p.author_id = ? OR f.follower_id IS NOT NULL
        ORDER BY p.created_at DESC, p.id DESC
        "#,
        SELECT_PUBLICATION
    ))
    .bind(viewer)
    .bind(viewer)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Publication::from).collect())
}

/// Every publication written by `author`
pub async fn publications_by_author(
    pool: &SqlitePool,
    author: UserId,
) -> Result<Vec<Publication>, sqlx::Error> {
    let Some(author) = db_id(author) else {
        return Ok(Vec::new());
    };

    let rows = sqlx::query_as::<_, PublicationRow>(&format!(
        "{} WHERE p.author_id = ? ORDER BY p.created_at DESC, p.id DESC",
        SELECT_PUBLICATION
    ))
    .bind(author)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Publication::from).collect())
}

/// Owner of a publication, for the authorship check
pub async fn find_author_id(
    pool: &SqlitePool,
    id: PublicationId,
) -> Result<Option<UserId>, sqlx::Error> {
    let Some(id) = db_id(id) else {
        return Ok(None);
    };

    let author = sqlx::query_scalar::<_, i64>("SELECT author_id FROM publications WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(author.map(domain_id))
}

/// Overwrite title and content. The author never changes.
pub async fn update_publication(
    pool: &SqlitePool,
    id: PublicationId,
    draft: &PublicationDraft,
) -> Result<bool, sqlx::Error> {
    let Some(id) = db_id(id) else {
        return Ok(false);
    };

    let result = sqlx::query("UPDATE publications SET title = ?, content = ? WHERE id = ?")
        .bind(&draft.title)
        .bind(&draft.content)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_publication(pool: &SqlitePool, id: PublicationId) -> Result<bool, sqlx::Error> {
    let Some(id) = db_id(id) else {
        return Ok(false);
    };

    let result = sqlx::query("DELETE FROM publications WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Add one like. Returns false when the publication does not exist.
pub async fn like(pool: &SqlitePool, id: PublicationId) -> Result<bool, sqlx::Error> {
    let Some(id) = db_id(id) else {
        return Ok(false);
    };

    let result = sqlx::query("UPDATE publications SET likes = likes + 1 WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Remove one like, stopping at zero
pub async fn unlike(pool: &SqlitePool, id: PublicationId) -> Result<bool, sqlx::Error> {
    let Some(id) = db_id(id) else {
        return Ok(false);
    };

    let result = sqlx::query(
        r#"
        UPDATE publications
        SET likes = CASE WHEN likes > 0 THEN likes - 1 ELSE 0 END
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
