/**
 * Server Configuration
 *
 * This module opens the SQLite pool and brings the schema up to date.
 *
 * # Configuration Sources
 *
 * The connection string comes from `AppConfig::database_url`. Unlike the
 * secret, a database that cannot be opened or migrated is a startup error:
 * the server has nothing to serve without it.
 *
 * # In-memory databases
 *
 * Every SQLite connection to `:memory:` gets its own empty database, so
 * in-memory URLs are pinned to a single connection that is never recycled.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

const MAX_CONNECTIONS: u32 = 5;

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Load and initialize database connection pool
///
/// This function:
/// 1. Parses the connection string (creating the file if missing)
/// 2. Creates a SQLite connection pool with foreign keys enforced
/// 3. Runs database migrations
///
/// # Errors
///
/// Any connection or migration failure is returned to the caller.
///
/// # Example
///
/// ```rust,no_run
/// use socialnet::backend::server::config::load_database;
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let pool = load_database("sqlite::memory:").await?;
/// # Ok(())
/// # }
/// ```
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
    };

    tracing::info!("Connecting to database...");
    let pool = pool_options.connect_with(options).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_detection() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file:test?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://socialnet.db?mode=rwc"));
    }

    #[tokio::test]
    async fn test_migrations_create_tables() {
        let pool = load_database("sqlite::memory:").await.unwrap();
        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' \
             AND name NOT LIKE 'sqlite_%' AND name != '_sqlx_migrations' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        assert_eq!(tables, vec!["followers", "publications", "users"]);
    }

    #[tokio::test]
    async fn test_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("test.db").display());

        let pool = load_database(&url).await.unwrap();
        pool.close().await;

        // Migrating an already migrated file is a no-op
        let pool = load_database(&url).await.unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
