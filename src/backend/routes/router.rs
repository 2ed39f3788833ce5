/**
 * Router Configuration
 *
 * This module turns the route tables into a single Axum router.
 *
 * # Assembly
 *
 * 1. Every `Route` becomes a method router; protected ones get the
 *    authentication gate as a route layer, so it only runs when the route
 *    matched
 * 2. Routes sharing a URI are merged by method
 * 3. Unknown URIs fall through to a JSON 404
 * 4. Every request runs inside a tracing span tagged with a fresh request id
 */

use axum::extract::Request;
use axum::middleware::from_fn_with_state;
use axum::Router;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::backend::error::conversion::not_found;
use crate::backend::middleware::require_authentication;
use crate::backend::routes::publication_routes::publication_routes;
use crate::backend::routes::route::Route;
use crate::backend::routes::user_routes::user_routes;
use crate::backend::server::state::AppState;

/// Mount `routes` on `router`, gating the protected ones
pub fn configure(router: Router<AppState>, routes: Vec<Route>, app_state: &AppState) -> Router<AppState> {
    routes.into_iter().fold(router, |router, route| {
        tracing::debug!(
            uri = route.uri,
            method = ?route.filter,
            authenticated = route.require_authentication,
            "Mounting route"
        );

        let handler = if route.require_authentication {
            route
                .handler
                .route_layer(from_fn_with_state(app_state.clone(), require_authentication))
        } else {
            route.handler
        };

        router.route(route.uri, handler)
    })
}

/// Every route the server exposes
pub fn all_routes() -> Vec<Route> {
    let mut routes = user_routes();
    routes.extend(publication_routes());
    routes
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Pool, token service and hashing cost
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure(Router::new(), all_routes(), &app_state);

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            let request_id = Uuid::new_v4();
            tracing::info_span!(
                "request",
                %request_id,
                method = %request.method(),
                uri = %request.uri(),
            )
        }))
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_only_login_and_signup_are_public() {
        let public: HashSet<_> = all_routes()
            .into_iter()
            .filter(|route| !route.require_authentication)
            .map(|route| route.uri)
            .collect();
        assert_eq!(public, HashSet::from(["/login", "/users"]));
    }

    #[test]
    fn test_route_count() {
        assert_eq!(all_routes().len(), 19);
    }
}
