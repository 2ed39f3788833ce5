/**
 * User Database Operations
 *
 * Parameterized queries against the `users` table. Lookups return
 * `Option` so "no such user" stays distinct from a storage failure, and
 * mutations return whether a row was touched.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::backend::db::{db_id, domain_id};
use crate::shared::user::{NewUser, User, UserId, UserUpdate};

/// Row shape shared by every query that returns a public user
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub nick: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: domain_id(row.id),
            name: row.name,
            nick: row.nick,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

/// What login needs to check a password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredentials {
    pub id: UserId,
    pub password_digest: String,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `user` - Validated payload (its plaintext password is ignored)
/// * `password_digest` - bcrypt digest to store
///
/// # Returns
/// Created user, or a unique violation if the nick or email is taken
pub async fn create_user(
    pool: &SqlitePool,
    user: &NewUser,
    password_digest: &str,
) -> Result<User, sqlx::Error> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (name, nick, email, password, created_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, name, nick, email, created_at
        "#,
    )
    .bind(&user.name)
    .bind(&user.nick)
    .bind(&user.email)
    .bind(password_digest)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// Get user by ID
pub async fn find_user(pool: &SqlitePool, id: UserId) -> Result<Option<User>, sqlx::Error> {
    let Some(id) = db_id(id) else {
        return Ok(None);
    };

    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, name, nick, email, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(User::from))
}

/// Users whose name or nick contains `query`
pub async fn search_users(pool: &SqlitePool, query: &str) -> Result<Vec<User>, sqlx::Error> {
    let pattern = format!("%{}%", query);

    let rows = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, name, nick, email, created_at
        FROM users
        WHERE name LIKE ? OR nick LIKE ?
        ORDER BY id
        "#,
    )
    .bind(&pattern)
    .bind(&pattern)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(User::from).collect())
}

/// Overwrite name, nick and email. Returns false when no such user exists.
pub async fn update_user(
    pool: &SqlitePool,
    id: UserId,
    update: &UserUpdate,
) -> Result<bool, sqlx::Error> {
    let Some(id) = db_id(id) else {
        return Ok(false);
    };

    let result = sqlx::query("UPDATE users SET name = ?, nick = ?, email = ? WHERE id = ?")
        .bind(&update.name)
        .bind(&update.nick)
        .bind(&update.email)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a user; their follower edges and publications go with them
pub async fn delete_user(pool: &SqlitePool, id: UserId) -> Result<bool, sqlx::Error> {
    let Some(id) = db_id(id) else {
        return Ok(false);
    };

    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Get id and password digest by email
///
/// # Returns
/// Credentials or None if no account uses this email
pub async fn find_credentials_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<StoredCredentials>, sqlx::Error> {
    let row: Option<(i64, String)> =
        sqlx::query_as("SELECT id, password FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(pool)
            .await?;

    Ok(row.map(|(id, password_digest)| StoredCredentials {
        id: domain_id(id),
        password_digest,
    }))
}

/// Get the password digest of a user
pub async fn find_password_by_id(
    pool: &SqlitePool,
    id: UserId,
) -> Result<Option<String>, sqlx::Error> {
    let Some(id) = db_id(id) else {
        return Ok(None);
    };

    sqlx::query_scalar::<_, String>("SELECT password FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Replace the stored password digest
pub async fn update_password(
    pool: &SqlitePool,
    id: UserId,
    password_digest: &str,
) -> Result<bool, sqlx::Error> {
    let Some(id) = db_id(id) else {
        return Ok(false);
    };

    let result = sqlx::query("UPDATE users SET password = ? WHERE id = ?")
        .bind(password_digest)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
