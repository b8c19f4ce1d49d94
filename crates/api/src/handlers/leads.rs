//! Handlers for the lead resource.
//!
//! Request bodies are taken as raw JSON so the schema evaluator can report
//! every invalid field at once, rather than failing on the first
//! deserialization error.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use automind_core::error::CoreError;
use automind_core::validation::validate_insert_payload;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/leads
///
/// Validate the payload against the lead schema and store it.
pub async fn create_lead(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(raw) = payload?;
    let input = validate_insert_payload(&raw).map_err(CoreError::from)?;

    let lead = state.store.create_lead(input).await?;

    tracing::info!(
        lead_id = %lead.id,
        storage = state.store.backend().as_str(),
        "Lead created",
    );

    Ok(Json(lead))
}

/// GET /api/leads
///
/// All leads, newest first.
pub async fn list_leads(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let leads = state.store.get_all_leads().await?;
    tracing::debug!(count = leads.len(), "Listed leads");
    Ok(Json(leads))
}

/// GET /api/leads/{id}
pub async fn get_lead(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let lead = state
        .store
        .get_lead(&id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;

    Ok(Json(lead))
}
