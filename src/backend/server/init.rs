/**
 * Server Initialization
 *
 * This module builds the application state from an `AppConfig` and hands
 * it to the router.
 *
 * # Initialization Process
 *
 * 1. Open the database pool and run migrations
 * 2. Build the token service from the configured secret
 * 3. Create and configure the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::sessions::TokenService;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::config::AppConfig;

/// Build the shared state for `config`
pub async fn build_state(config: &AppConfig) -> Result<AppState, sqlx::Error> {
    let db_pool = load_database(&config.database_url).await?;
    let tokens = Arc::new(TokenService::new(&config.secret_key));

    Ok(AppState {
        db_pool,
        tokens,
        bcrypt_cost: config.bcrypt_cost,
    })
}

/// Create the Axum application
///
/// # Errors
///
/// Fails when the database cannot be opened or migrated.
///
/// # Example
///
/// ```rust,no_run
/// use socialnet::backend::server::init::create_app;
/// use socialnet::shared::AppConfig;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = AppConfig::load()?;
/// let app = create_app(&config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing socialnet backend server");

    let app_state = build_state(config).await?;
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
