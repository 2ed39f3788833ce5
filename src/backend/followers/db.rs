/**
 * Follower Database Operations
 *
 * A row `(user_id, follower_id)` means `follower_id` follows `user_id`.
 */

use sqlx::SqlitePool;

use crate::backend::db::db_id;
use crate::backend::users::db::UserRow;
use crate::shared::user::{User, UserId};

/// Record that `follower` follows `user`. Following twice is a no-op.
pub async fn follow(pool: &SqlitePool, user: UserId, follower: UserId) -> Result<(), sqlx::Error> {
    let (Some(user), Some(follower)) = (db_id(user), db_id(follower)) else {
        return Err(sqlx::Error::RowNotFound);
    };

    sqlx::query("INSERT OR IGNORE INTO followers (user_id, follower_id) VALUES (?, ?)")
        .bind(user)
        .bind(follower)
        .execute(pool)
        .await?;

    Ok(())
}

/// Remove the edge if present
pub async fn unfollow(pool: &SqlitePool, user: UserId, follower: UserId) -> Result<(), sqlx::Error> {
    let (Some(user), Some(follower)) = (db_id(user), db_id(follower)) else {
        return Ok(());
    };

    sqlx::query("DELETE FROM followers WHERE user_id = ? AND follower_id = ?")
        .bind(user)
        .bind(follower)
        .execute(pool)
        .await?;

    Ok(())
}

/// Everyone following `user`
pub async fn list_followers(pool: &SqlitePool, user: UserId) -> Result<Vec<User>, sqlx::Error> {
    let Some(user) = db_id(user) else {
        return Ok(Vec::new());
    };

    let rows = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT u.id, u.name, u.nick, u.email, u.created_at
        FROM users u
        INNER JOIN followers f ON u.id = f.follower_id
        WHERE f.user_id = ?
        ORDER BY u.id
        "#,
    )
    .bind(user)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(User::from).collect())
}

/// Everyone `follower` follows
pub async fn list_following(pool: &SqlitePool, follower: UserId) -> Result<Vec<User>, sqlx::Error> {
    let Some(follower) = db_id(follower) else {
        return Ok(Vec::new());
    };

    let rows = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT u.id, u.name, u.nick, u.email, u.created_at
        FROM users u
        INNER JOIN followers f ON u.id = f.user_id
        WHERE f.follower_id = ?
        ORDER BY u.id
        "#,
    )
    .bind(follower)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(User::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::config::load_database;
    use crate::backend::users::db::{create_user, delete_user};
    use crate::shared::user::NewUser;

    async fn seed(pool: &SqlitePool, nick: &str) -> User {
        let user = NewUser {
            name: nick.to_string(),
            nick: nick.to_string(),
            email: format!("{}@example.com", nick),
            password: String::new(),
        };
        create_user(pool, &user, "d").await.unwrap()
    }

    #[tokio::test]
    async fn test_follow_is_idempotent() {
        let pool = load_database("sqlite::memory:").await.unwrap();
        let ana = seed(&pool, "ana").await;
        let bob = seed(&pool, "bob").await;

        follow(&pool, ana.id, bob.id).await.unwrap();
        follow(&pool, ana.id, bob.id).await.unwrap();

        let followers = list_followers(&pool, ana.id).await.unwrap();
        assert_eq!(followers, vec![bob.clone()]);
        assert_eq!(list_following(&pool, bob.id).await.unwrap(), vec![ana.clone()]);
        assert!(list_following(&pool, ana.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unfollow() {
        let pool = load_database("sqlite::memory:").await.unwrap();
        let ana = seed(&pool, "ana").await;
        let bob = seed(&pool, "bob").await;

        follow(&pool, ana.id, bob.id).await.unwrap();
        unfollow(&pool, ana.id, bob.id).await.unwrap();
        unfollow(&pool, ana.id, bob.id).await.unwrap();
        assert!(list_followers(&pool, ana.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_edges_cascade_with_user() {
        let pool = load_database("sqlite::memory:").await.unwrap();
        let ana = seed(&pool, "ana").await;
        let bob = seed(&pool, "bob").await;

        follow(&pool, ana.id, bob.id).await.unwrap();
        delete_user(&pool, bob.id).await.unwrap();
        assert!(list_followers(&pool, ana.id).await.unwrap().is_empty());
    }
}
