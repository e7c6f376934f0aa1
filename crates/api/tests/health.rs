//! `/health` and the request-id middleware.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use gear_api::router::REQUEST_ID_HEADER;

#[tokio::test]
async fn health_reports_status_and_crate_version() {
    let response = get(common::build_test_app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") })
    );
}

#[tokio::test]
async fn every_response_gets_a_uuid_request_id() {
    let health = get(common::build_test_app(), "/health").await;
    let missing = get(common::build_test_app(), "/nope").await;

    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    for response in [&health, &missing] {
        let id = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
        assert_eq!(id.len(), 36, "expected a hyphenated UUID, got {id}");
    }
}
