//! gear API server library.
//!
//! Exposes the JSON request/response helpers together with the config,
//! state, error handling and the router, so integration tests and the binary
//! entrypoint can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod http_utils;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
