#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use automind_api::config::ServerConfig;
use automind_api::router::build_app_router;
use automind_api::state::AppState;
use automind_db::store::{LeadStore, MemoryLeadStore};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and a static directory that does not exist.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        static_dir: PathBuf::from("/nonexistent/automind/dist"),
        database_url: None,
    }
}

/// Build the full application router over the given store and config.
pub fn build_app_with(store: Arc<dyn LeadStore>, config: ServerConfig) -> Router {
    let state = AppState { store };
    build_app_router(state, &config)
}

/// Build the full application router with a fresh in-memory store.
pub fn build_test_app() -> Router {
    build_app_with(Arc::new(MemoryLeadStore::new()), test_config())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<String>) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// A payload that passes every schema rule.
pub fn valid_payload() -> Value {
    json!({
        "companyName": "Acme",
        "industry": "tecnologia",
        "companySize": "pequena",
        "position": "CTO",
        "challenges": ["atendimento"],
        "fullName": "Jane Doe",
        "email": "jane@acme.com",
        "phone": "(11) 99999-8888"
    })
}
