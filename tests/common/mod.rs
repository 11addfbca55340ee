//! Common test utilities for integration tests.
//!
//! These tests use the REAL service code: the actual routers, handlers,
//! and state, exercised through `tower::ServiceExt::oneshot` without
//! binding a TCP socket.

#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use devreg::{AppState, Config};

/// Test application wrapper using the real routes and state.
///
/// Each test builds its own instance so the in-memory registry starts
/// empty and tests never share state.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// Create a test application with the 10/20/30 tax rates used
    /// throughout the tests.
    pub fn new() -> Self {
        let config = Config {
            port: 0,
            cors_allowed_origins: vec!["*".to_string()],
            tax_rate_simple: 10.0,
            tax_rate_middle: 20.0,
            tax_rate_upper: 30.0,
        };

        let state = AppState::new(&config);

        // Must match the router assembled in main.rs
        let router = Router::new()
            .merge(devreg::routes::health::router())
            .merge(devreg::routes::developer::router())
            .with_state(state);

        Self { router }
    }

    /// Send a request through the router.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed")
    }

    /// GET the given path.
    pub async fn get(&self, path: &str) -> Response {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// POST a JSON body to the given path.
    pub async fn post_json(&self, path: &str, body: &Value) -> Response {
        self.request(
            Request::post(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// PUT a JSON body to the given path.
    pub async fn put_json(&self, path: &str, body: &Value) -> Response {
        self.request(
            Request::put(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// DELETE the given path.
    pub async fn delete(&self, path: &str) -> Response {
        self.request(Request::delete(path).body(Body::empty()).unwrap())
            .await
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a response body as JSON.
pub async fn response_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is not valid JSON")
}

/// Read a response body as raw bytes.
pub async fn response_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes()
        .to_vec()
}
