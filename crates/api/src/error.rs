use std::any::Any;

use automind_core::error::CoreError;
use automind_core::validation::FieldViolation;
use automind_db::store::StoreError;
use axum::extract::rejection::JsonRejection;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Message returned for every 500. Details only go to the server log.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors, [`StoreError`] for storage
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce consistent JSON error responses of the form
/// `{ "message", "code", "errors"? }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `automind_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage backend failure.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(CoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Core(CoreError::Validation(_)) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message, errors): (&str, String, Option<Vec<FieldViolation>>) = match self {
            // --- CoreError variants ---
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, %id, "Entity not found");
                ("NOT_FOUND", format!("{entity} with id {id} not found"), None)
            }
            AppError::Core(CoreError::Validation(errors)) => {
                tracing::info!(%errors, "Validation failed");
                (
                    "VALIDATION_ERROR",
                    "Validation failed".to_string(),
                    Some(errors.into_violations()),
                )
            }

            // --- Storage errors ---
            AppError::Store(err) => {
                log_store_error(&err);
                ("INTERNAL_ERROR", INTERNAL_ERROR_MESSAGE.to_string(), None)
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                tracing::info!(error = %msg, "Bad request");
                ("BAD_REQUEST", msg, Some(Vec::new()))
            }
        };

        let mut body = json!({
            "message": message,
            "code": code,
        });
        if let Some(errors) = errors {
            body["errors"] = json!(errors);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Log a storage failure with as much detail as the error carries.
///
/// Nothing logged here reaches the client.
fn log_store_error(err: &StoreError) {
    match err {
        StoreError::Database(sqlx::Error::Database(db_err)) => {
            tracing::error!(
                error = %db_err,
                code = db_err.code().as_deref().unwrap_or("unknown"),
                constraint = db_err.constraint().unwrap_or("none"),
                "Database error"
            );
        }
        StoreError::Database(other) => tracing::error!(error = %other, "Database error"),
        StoreError::Migration(other) => tracing::error!(error = %other, "Migration error"),
    }
}

/// Response for a handler that panicked. Installed via `CatchPanicLayer`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> axum::http::Response<String> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Handler panicked");

    let body = json!({
        "message": INTERNAL_ERROR_MESSAGE,
        "code": "INTERNAL_ERROR",
    })
    .to_string();

    let mut response = axum::http::Response::new(body);
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}
