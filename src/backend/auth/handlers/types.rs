/**
 * Authentication Handler Types
 *
 * Request and response bodies for `POST /login`.
 */

use serde::{Deserialize, Serialize};

use crate::shared::user::UserId;

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    /// Plaintext, checked against the stored digest and then dropped
    pub password: String,
}

/// Auth response
///
/// The token goes in `Authorization: Bearer <token>` on every later request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    pub id: UserId,
    pub token: String,
}
