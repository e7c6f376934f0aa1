#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("JSON serialization failed: {0}")]
    Encode(#[source] serde_json::Error),
}
