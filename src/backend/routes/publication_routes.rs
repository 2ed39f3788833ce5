/**
 * Publication Route Table
 *
 * All protected.
 * - `POST /publications` - Create, authored by the subject
 * - `GET /publications` - Feed
 * - `GET|PUT|DELETE /publications/{publicationId}` - Edit/delete: author only
 * - `GET /users/{userId}/publications` - By author
 * - `POST /publications/{publicationId}/like`, `.../unlike`
 */

use axum::routing::MethodFilter;

use crate::backend::publications;
use crate::backend::routes::route::Route;

pub fn publication_routes() -> Vec<Route> {
    vec![
        Route::protected("/publications", MethodFilter::POST, publications::create_publication),
        Route::protected("/publications", MethodFilter::GET, publications::feed),
        Route::protected(
            "/publications/{publicationId}",
            MethodFilter::GET,
            publications::get_publication,
        ),
        Route::protected(
            "/publications/{publicationId}",
            MethodFilter::PUT,
            publications::update_publication,
        ),
        Route::protected(
            "/publications/{publicationId}",
            MethodFilter::DELETE,
            publications::delete_publication,
        ),
        Route::protected(
            "/users/{userId}/publications",
            MethodFilter::GET,
            publications::publications_by_user,
        ),
        Route::protected(
            "/publications/{publicationId}/like",
            MethodFilter::POST,
            publications::like,
        ),
        Route::protected(
            "/publications/{publicationId}/unlike",
            MethodFilter::POST,
            publications::unlike,
        ),
    ]
}
