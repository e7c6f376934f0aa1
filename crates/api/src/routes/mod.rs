pub mod echo;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /echo                                            echo a JSON body (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/echo", echo::router())
}
