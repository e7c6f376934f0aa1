//! Handler for the JSON echo endpoint.
//!
//! Round-trips a request body through the JSON helpers: decode, wrap in the
//! `{ "data": ... }` envelope, encode, and hand back as an [`ApiResponse`].

use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use crate::error::AppResult;
use crate::http_utils::{json_request_with_limit, json_response};
use crate::response::{as_api_response, ApiResponse, DataResponse};
use crate::state::AppState;

/// Marker header added to every echoed response.
pub const ECHO_HEADER: &str = "x-gear-echo";

/// POST /api/v1/echo
///
/// Return the posted JSON value wrapped as `{ "data": <value> }`.
pub async fn echo(
    State(state): State<AppState>,
    request: Request,
) -> AppResult<ApiResponse<DataResponse<Value>>> {
    let payload = json_request_with_limit(request, state.config.max_body_bytes).await?;

    tracing::debug!(kind = json_kind(&payload), "Echoing JSON payload");

    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(ECHO_HEADER),
        HeaderValue::from_static("1"),
    );

    let response = json_response(&DataResponse { data: payload }, None, Some(&headers))?;
    as_api_response(response).await
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
