/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - The SQLite connection pool
 * - The token service, built once from the configured secret
 * - The bcrypt work factor for new digests
 *
 * Everything is read-only after startup, so cloning the state per request
 * is a handful of reference-count bumps and no locks are needed.
 *
 * # Example
 *
 * ```rust,ignore
 * use axum::extract::State;
 * use sqlx::SqlitePool;
 *
 * async fn handler(State(pool): State<SqlitePool>) {
 *     // Only the pool is extracted
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenService;

/// Application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,
    /// Identity token issuer/verifier
    pub tokens: Arc<TokenService>,
    /// Work factor for new password digests
    pub bcrypt_cost: u32,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
