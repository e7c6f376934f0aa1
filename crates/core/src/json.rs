//! JSON codec used by the HTTP helpers.
//!
//! Thin wrappers over `serde_json` that tag failures as [`CoreError::Decode`]
//! or [`CoreError::Encode`] so callers can tell a bad payload from a value
//! that cannot be represented as JSON.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::CoreError;

/// Replacement hook for values that fail to serialize.
///
/// Receives the original value and returns the JSON to emit in its place,
/// or `None` to give up and surface the original encode error.
pub type Fallback<'a, T> = &'a (dyn Fn(&T) -> Option<Value> + Send + Sync);

/// Parse raw bytes into an untyped JSON value.
pub fn decode(bytes: &[u8]) -> Result<Value, CoreError> {
    serde_json::from_slice(bytes).map_err(CoreError::Decode)
}

/// Parse raw bytes into `T`.
pub fn decode_as<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CoreError> {
    serde_json::from_slice(bytes).map_err(CoreError::Decode)
}

/// Serialize `data` to JSON bytes.
///
/// The value is serialized directly first. Only when that fails is
/// `fallback` consulted; its replacement is serialized in place of `data`.
pub fn encode<T>(data: &T, fallback: Option<Fallback<'_, T>>) -> Result<Vec<u8>, CoreError>
where
    T: Serialize + ?Sized,
{
    let err = match serde_json::to_vec(data) {
        Ok(bytes) => return Ok(bytes),
        Err(err) => err,
    };

    match fallback.and_then(|f| f(data)) {
        Some(replacement) => serde_json::to_vec(&replacement).map_err(CoreError::Encode),
        None => Err(CoreError::Encode(err)),
    }
}
