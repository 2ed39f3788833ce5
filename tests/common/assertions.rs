//! Custom assertions for JSON error bodies

use axum::http::StatusCode;

use super::app::TestResponse;

/// Assert an error response: status, `{"error": message, "status": code}`
pub fn assert_error(response: &TestResponse, status: StatusCode, message: &str) {
    assert_eq!(response.status, status, "unexpected body {:?}", response.body);
    assert_eq!(response.body["error"], message);
    assert_eq!(response.body["status"], status.as_u16());
}

/// Any authentication failure looks exactly the same from outside
pub fn assert_unauthenticated(response: &TestResponse) {
    assert_error(response, StatusCode::UNAUTHORIZED, "authentication required");
}

pub fn assert_forbidden(response: &TestResponse) {
    assert_eq!(response.status, StatusCode::FORBIDDEN, "unexpected body {:?}", response.body);
    assert_eq!(response.body["status"], 403);
}
