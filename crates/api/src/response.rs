//! Shared response types for API handlers.
//!
//! Handlers wrap their payloads in [`DataResponse`], a `{ "data": ... }`
//! envelope. [`ApiResponse`] carries a fully rendered response together
//! with the type its body is documented as, so tooling can check the
//! payload against it.

use std::fmt;
use std::marker::PhantomData;

use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use gear_core::json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// json_response(&DataResponse { data: items }, None, None)
/// ```
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DataResponse<T> {
    pub data: T,
}

/// A buffered HTTP response whose body is documented as `T`.
///
/// Status, headers and body bytes are kept verbatim; `T` only drives
/// [`ApiResponse::validate`].
pub struct ApiResponse<T> {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    _schema: PhantomData<fn() -> T>,
}

impl<T> ApiResponse<T> {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
            _schema: PhantomData,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Check the body against the documented type and return the parsed value.
    pub fn validate(&self) -> AppResult<T> {
        Ok(json::decode_as(&self.body)?)
    }
}

impl<T> fmt::Debug for ApiResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("body_len", &self.body.len())
            .finish()
    }
}

impl<T> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

/// Buffer `response` into an [`ApiResponse`], keeping body, headers and
/// status exactly as they were.
///
/// The response is server-built, so a body that fails mid-stream is an
/// [`AppError::ResponseBodyRead`] (500), never a client error.
pub async fn as_api_response<T>(response: Response) -> AppResult<ApiResponse<T>> {
    let (parts, body) = response.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|err| AppError::ResponseBodyRead(err.to_string()))?;

    Ok(ApiResponse::new(parts.status, parts.headers, body))
}
