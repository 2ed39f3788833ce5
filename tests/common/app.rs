//! Test application fixture
//!
//! Each `TestApp` owns a fresh in-memory SQLite database, so tests never
//! see each other's rows.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use socialnet::backend::routes::create_router;
use socialnet::backend::server::{build_state, AppState};
use socialnet::shared::AppConfig;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Router plus the state behind it
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

/// Status and parsed JSON body (`Null` when the body is empty)
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = AppConfig::builder()
            .database_url("sqlite::memory:")
            .secret_key(TEST_SECRET)
            .bcrypt_cost(4)
            .build()
            .expect("test config is valid");

        let state = build_state(&config).await.expect("in-memory database opens");
        let router = create_router(state.clone());
        Self { router, state }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.send(builder.body(body).expect("request builds")).await
    }

    /// Send a fully built request, for tests that need unusual headers
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body is readable");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Option<Value>) -> TestResponse {
        self.request(Method::POST, uri, token, body).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::DELETE, uri, token, None).await
    }
}
