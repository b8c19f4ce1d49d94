//! Tests for `AppError` -> HTTP response mapping, and for storage failures
//! surfacing through the router without leaking detail.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use automind_api::error::{panic_response, AppError, INTERNAL_ERROR_MESSAGE};
use automind_core::error::CoreError;
use automind_core::lead::{Lead, LeadField, NewLead};
use automind_core::validation::{FieldViolation, ValidationErrors, ViolationKind};
use automind_db::store::{LeadStore, StorageBackend, StoreError};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{body_json, get, post_json, valid_payload};
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

/// A store whose every call fails with a detailed database error.
struct BrokenStore;

fn leaky_error() -> StoreError {
    StoreError::Database(sqlx::Error::Configuration(
        "password authentication failed for postgres://admin:hunter2@db/leads".into(),
    ))
}

#[async_trait]
impl LeadStore for BrokenStore {
    async fn create_lead(&self, _input: NewLead) -> Result<Lead, StoreError> {
        Err(leaky_error())
    }

    async fn get_lead(&self, _id: &str) -> Result<Option<Lead>, StoreError> {
        Err(leaky_error())
    }

    async fn get_all_leads(&self) -> Result<Vec<Lead>, StoreError> {
        Err(leaky_error())
    }

    fn backend(&self) -> StorageBackend {
        StorageBackend::Durable
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(leaky_error())
    }
}

fn broken_app() -> axum::Router {
    common::build_app_with(Arc::new(BrokenStore), common::test_config())
}

// ---------------------------------------------------------------------------
// Variant mapping
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Lead",
        id: "abc".into(),
    });
    assert_eq!(err.status(), StatusCode::NOT_FOUND);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Lead with id abc not found");
    assert!(json.get("errors").is_none());
}

#[tokio::test]
async fn validation_error_returns_400_with_violations() {
    let err = AppError::Core(CoreError::Validation(ValidationErrors::new(vec![
        FieldViolation::new(LeadField::Email, ViolationKind::InvalidFormat, "Invalid email"),
    ])));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["errors"][0]["field"], "email");
    assert_eq!(json["errors"][0]["kind"], "invalid_format");
    assert_eq!(json["errors"][0]["message"], "Invalid email");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["message"], "invalid field value");
}

#[tokio::test]
async fn store_error_returns_500_and_sanitizes_message() {
    let (status, json) = error_to_response(AppError::Store(leaky_error())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], INTERNAL_ERROR_MESSAGE);
    assert!(!json.to_string().contains("hunter2"));
}

#[tokio::test]
async fn panic_response_is_generic_json() {
    let response = panic_response(Box::new("index out of bounds"));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.headers()["content-type"], "application/json");
    let json: serde_json::Value = serde_json::from_str(response.body()).unwrap();
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["message"], INTERNAL_ERROR_MESSAGE);
}

// ---------------------------------------------------------------------------
// Storage failures through the router
// ---------------------------------------------------------------------------

#[tokio::test]
async fn storage_failure_on_create_is_generic_500() {
    let response = post_json(broken_app(), "/api/leads", &valid_payload()).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["message"], INTERNAL_ERROR_MESSAGE);
    assert!(!json.to_string().contains("postgres://"));
}

#[tokio::test]
async fn storage_failure_on_list_and_get_is_generic_500() {
    for uri in ["/api/leads", "/api/leads/some-id"] {
        let response = get(broken_app(), uri).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");

        let json = body_json(response).await;
        assert_eq!(json["message"], INTERNAL_ERROR_MESSAGE);
        assert!(!json.to_string().contains("hunter2"));
    }
}

#[tokio::test]
async fn validation_runs_before_storage() {
    let response = post_json(broken_app(), "/api/leads", &serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_unhealthy_storage() {
    let response = get(broken_app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["storage"], "durable");
    assert_eq!(json["storageHealthy"], false);
}
