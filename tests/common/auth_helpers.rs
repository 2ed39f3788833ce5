//! Authentication test helpers
//!
//! Accounts are created and logged in through the public HTTP routes, the
//! same way a client would.

use axum::http::StatusCode;
use serde_json::json;

use super::app::TestApp;
use socialnet::shared::UserId;

pub const TEST_PASSWORD: &str = "password123";

/// Test user credentials
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: UserId,
    pub nick: String,
    pub email: String,
    pub token: String,
}

impl TestUser {
    pub fn token(&self) -> Option<&str> {
        Some(&self.token)
    }
}

pub fn email_for(nick: &str) -> String {
    format!("{}@example.com", nick)
}

/// `POST /users`, returning the new id
pub async fn create_account(app: &TestApp, nick: &str, password: &str) -> UserId {
    let response = app
        .post(
            "/users",
            None,
            Some(json!({
                "name": format!("{} Tester", nick),
                "nick": nick,
                "email": email_for(nick),
                "password": password,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.body["id"].as_u64().expect("id is a number")
}

/// `POST /login`, returning the raw response
pub async fn login(app: &TestApp, email: &str, password: &str) -> super::app::TestResponse {
    app.post("/login", None, Some(json!({ "email": email, "password": password })))
        .await
}

/// Create an account and log in as it
pub async fn signup_and_login(app: &TestApp, nick: &str) -> TestUser {
    let id = create_account(app, nick, TEST_PASSWORD).await;
    let email = email_for(nick);

    let response = login(app, &email, TEST_PASSWORD).await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["id"].as_u64(), Some(id));

    TestUser {
        id,
        nick: nick.to_string(),
        email,
        token: response.body["token"].as_str().expect("token is a string").to_string(),
    }
}
