#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use gear_api::config::ServerConfig;
use gear_api::http_utils::DEFAULT_BODY_LIMIT;
use gear_api::router::build_app_router;
use gear_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and the given body cap.
pub fn test_config(max_body_bytes: usize) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_body_bytes,
    }
}

/// The production router over the default test config.
pub fn build_test_app() -> Router {
    build_test_app_with(test_config(DEFAULT_BODY_LIMIT))
}

/// The production router over `config`.
pub fn build_test_app_with(config: ServerConfig) -> Router {
    build_app_router(AppState {
        config: Arc::new(config),
    })
}

/// Send a GET request to `uri`.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a raw JSON body to `uri`.
pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Collect a response body into raw bytes.
pub async fn body_bytes(response: Response) -> axum::body::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}
