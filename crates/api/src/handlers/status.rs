//! Catch-all responses: the API 404 and the status payload shown when no
//! frontend build is present.

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::state::AppState;

/// Any unmatched path under `/api`.
pub async fn api_not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "No API route");
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "message": format!("No API route for {}", uri.path()),
            "code": "NOT_FOUND",
        })),
    )
}

/// Non-API paths when there is no built frontend to serve.
pub async fn status_payload(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "name": "automind-api",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "storage": state.store.backend(),
        "endpoints": [
            "GET /health",
            "POST /api/leads",
            "GET /api/leads",
            "GET /api/leads/{id}",
        ],
    }))
}
