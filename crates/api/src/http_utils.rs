//! JSON request/response helpers for axum handlers.
//!
//! Decode and encode failures are returned unchanged as [`AppError`]; the
//! caller decides how to surface them (usually by returning the error from
//! a handler, which renders it through `IntoResponse`).

use axum::body::{Body, Bytes};
use axum::extract::Request;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Response;
use gear_core::json::{self, Fallback};
use http_body_util::LengthLimitError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Body size cap used by [`json_request`] (1 MiB).
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Content type stamped on every response built by [`json_response`].
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Read the request body and parse it as JSON.
///
/// Any JSON type is accepted (object, array, string, number, boolean,
/// null). The body is capped at [`DEFAULT_BODY_LIMIT`].
pub async fn json_request(request: Request) -> AppResult<Value> {
    json_request_with_limit(request, DEFAULT_BODY_LIMIT).await
}

/// Like [`json_request`] with an explicit body size cap in bytes.
pub async fn json_request_with_limit(request: Request, limit: usize) -> AppResult<Value> {
    let bytes = read_body(request.into_body(), limit).await?;
    Ok(json::decode(&bytes)?)
}

/// Read the request body and deserialize it into `T`.
pub async fn json_request_as<T: DeserializeOwned>(request: Request) -> AppResult<T> {
    let bytes = read_body(request.into_body(), DEFAULT_BODY_LIMIT).await?;
    Ok(json::decode_as(&bytes)?)
}

/// Build a `200 OK` JSON response from `data`.
///
/// `fallback` is only consulted when `data` fails to serialize. Every entry
/// of `headers` is copied onto the response as is, including repeated
/// values; a `Content-Type` among them is rejected since the JSON content
/// type is set here.
pub fn json_response<T>(
    data: &T,
    fallback: Option<Fallback<'_, T>>,
    headers: Option<&HeaderMap>,
) -> AppResult<Response>
where
    T: Serialize + ?Sized,
{
    if headers.is_some_and(|h| h.contains_key(CONTENT_TYPE)) {
        return Err(AppError::ContentTypeConflict);
    }

    let body = json::encode(data, fallback)?;

    let mut response = Response::new(Body::from(body));
    let out = response.headers_mut();
    out.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    if let Some(headers) = headers {
        for (name, value) in headers {
            out.append(name.clone(), value.clone());
        }
    }

    Ok(response)
}

/// Buffer a body, failing once more than `limit` bytes have arrived.
async fn read_body(body: Body, limit: usize) -> AppResult<Bytes> {
    axum::body::to_bytes(body, limit).await.map_err(|err| {
        let inner = err.into_inner();
        if inner.is::<LengthLimitError>() {
            tracing::debug!(limit, "Body rejected for exceeding size cap");
            AppError::PayloadTooLarge { limit }
        } else {
            AppError::BodyRead(inner.to_string())
        }
    })
}
