/**
 * User Route Table
 *
 * ## Public
 * - `POST /login` - Exchange credentials for a token
 * - `POST /users` - Create an account
 *
 * ## Protected
 * - `GET /users?user=<q>` - Search by name or nick
 * - `GET|PUT|DELETE /users/{userId}` - Read, edit, delete (edit/delete: self only)
 * - `POST /users/{userId}/follow`, `POST /users/{userId}/unfollow` - Not yourself
 * - `GET /users/{userId}/followers`, `GET /users/{userId}/following`
 * - `POST /users/{userId}/update-password` - Self only
 */

use axum::routing::MethodFilter;

use crate::backend::auth::login;
use crate::backend::followers;
use crate::backend::routes::route::Route;
use crate::backend::users;

pub fn user_routes() -> Vec<Route> {
    vec![
        Route::public("/login", MethodFilter::POST, login),
        Route::public("/users", MethodFilter::POST, users::create_user),
        Route::protected("/users", MethodFilter::GET, users::search_users),
        Route::protected("/users/{userId}", MethodFilter::GET, users::get_user),
        Route::protected("/users/{userId}", MethodFilter::PUT, users::update_user),
        Route::protected("/users/{userId}", MethodFilter::DELETE, users::delete_user),
        Route::protected("/users/{userId}/follow", MethodFilter::POST, followers::follow),
        Route::protected("/users/{userId}/unfollow", MethodFilter::POST, followers::unfollow),
        Route::protected("/users/{userId}/followers", MethodFilter::GET, followers::followers),
        Route::protected("/users/{userId}/following", MethodFilter::GET, followers::following),
        Route::protected(
            "/users/{userId}/update-password",
            MethodFilter::POST,
            users::update_password,
        ),
    ]
}
