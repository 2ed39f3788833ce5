/**
 * Route Table Entries
 *
 * One `Route` per method and URI. `require_authentication` decides whether
 * the router wraps the handler with the authentication gate.
 */

use axum::handler::Handler;
use axum::routing::{on, MethodFilter, MethodRouter};

use crate::backend::server::state::AppState;

pub struct Route {
    pub uri: &'static str,
    pub filter: MethodFilter,
    pub handler: MethodRouter<AppState>,
    pub require_authentication: bool,
}

impl Route {
    pub fn new<H, T>(uri: &'static str, filter: MethodFilter, handler: H, require_authentication: bool) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self {
            uri,
            filter,
            handler: on(filter, handler),
            require_authentication,
        }
    }

    /// Route behind the authentication gate
    pub fn protected<H, T>(uri: &'static str, filter: MethodFilter, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self::new(uri, filter, handler, true)
    }

    /// Route anyone may call
    pub fn public<H, T>(uri: &'static str, filter: MethodFilter, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self::new(uri, filter, handler, false)
    }
}
