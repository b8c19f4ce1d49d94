pub mod health;
pub mod leads;

use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /leads                 list, create
/// /leads/{id}            get
/// ```
///
/// Any other path under `/api` is a JSON 404, never the frontend.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/leads", leads::router())
        .fallback(handlers::status::api_not_found)
}
