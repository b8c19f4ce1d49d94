//! Route definitions for leads, mounted at `/api/leads`.

use axum::routing::get;
use axum::Router;

use crate::handlers::leads;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_leads
/// POST   /        -> create_lead
/// GET    /{id}    -> get_lead
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(leads::list_leads).post(leads::create_lead))
        .route("/{id}", get(leads::get_lead))
}
