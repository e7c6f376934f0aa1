use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gear_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers and the JSON helpers.
///
/// Wraps [`CoreError`] for codec failures and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A codec error from `gear_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body could not be read.
    #[error("Failed to read body: {0}")]
    BodyRead(String),

    /// The request body exceeded the configured size cap.
    #[error("Body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    /// Extra headers already carried a `Content-Type`, which the JSON
    /// encoder sets itself.
    #[error("Content-Type header conflicts with the JSON content type")]
    ContentTypeConflict,

    /// A response built by this server could not be buffered.
    #[error("Failed to buffer response body: {0}")]
    ResponseBodyRead(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Decode(err) => (
                    StatusCode::BAD_REQUEST,
                    "INVALID_JSON",
                    format!("Request body is not valid JSON: {err}"),
                ),
                CoreError::Encode(err) => {
                    tracing::error!(error = %err, "Response serialization failed");
                    internal()
                }
            },

            // --- HTTP-specific errors ---
            AppError::BodyRead(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::PayloadTooLarge { limit } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                format!("Request body exceeds the {limit} byte limit"),
            ),
            AppError::ContentTypeConflict => {
                tracing::error!("JSON response built with an explicit Content-Type header");
                internal()
            }
            AppError::ResponseBodyRead(msg) => {
                tracing::error!(error = %msg, "Response body could not be buffered");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Sanitized 500 triple; details only go to the log.
fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
