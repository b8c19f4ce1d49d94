//! Integration tests for the lead endpoints, driven through the full router
//! with an in-memory store.

mod common;

use std::io;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use common::{body_json, get, post_json, post_raw, valid_payload};
use serde_json::{json, Value};
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

// ---------------------------------------------------------------------------
// POST /api/leads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_stored_lead() {
    let app = common::build_test_app();

    let response = post_json(app, "/api/leads", &valid_payload()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let lead = body_json(response).await;
    assert!(lead["id"].is_string());
    assert!(lead["createdAt"].is_string());
    assert_eq!(lead["companyName"], "Acme");
    assert_eq!(lead["challenges"], json!(["atendimento"]));
    assert_eq!(lead["interestedSolutions"], json!([]));
    assert_eq!(lead["mainChallenge"], Value::Null);
    assert_eq!(lead["comments"], Value::Null);
}

#[tokio::test]
async fn created_lead_is_retrievable_by_id() {
    let app = common::build_test_app();

    let mut payload = valid_payload();
    payload["budget"] = json!("5k-15k");
    payload["interestedSolutions"] = json!(["chatbot", "chatbot", "automacao"]);
    let created = body_json(post_json(app.clone(), "/api/leads", &payload).await).await;

    let id = created["id"].as_str().unwrap();
    let response = get(app, &format!("/api/leads/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched, created);
    assert_eq!(fetched["budget"], "5k-15k");
    assert_eq!(fetched["interestedSolutions"], json!(["chatbot", "automacao"]));
}

#[tokio::test]
async fn invalid_payload_returns_every_violation() {
    let app = common::build_test_app();

    let payload = json!({
        "companyName": "A",
        "industry": "tecnologia",
        "companySize": "pequena",
        "position": "CTO",
        "challenges": [],
        "fullName": "Jane Doe",
        "email": "not-an-email",
        "phone": "123"
    });
    let response = post_json(app.clone(), "/api/leads", &payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["message"].is_string());

    let errors = json["errors"].as_array().unwrap();
    let fields: Vec<&str> = errors.iter().map(|e| e["field"].as_str().unwrap()).collect();
    assert_eq!(fields, ["companyName", "challenges", "email", "phone"]);
    assert_eq!(errors[0]["kind"], "too_short");
    assert_eq!(errors[1]["kind"], "missing_required");
    assert_eq!(errors[2]["kind"], "invalid_format");
    assert_eq!(errors[3]["kind"], "too_short");

    // Nothing was stored.
    let all = body_json(get(app, "/api/leads").await).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn empty_object_reports_all_required_fields() {
    let app = common::build_test_app();

    let response = post_json(app, "/api/leads", &json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let errors = json["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 8);
    assert!(errors.iter().all(|e| e["kind"] == "missing_required"));
}

#[tokio::test]
async fn wrong_json_type_is_invalid_format() {
    let app = common::build_test_app();

    let mut payload = valid_payload();
    payload["challenges"] = json!("atendimento");
    let response = post_json(app, "/api/leads", &payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["errors"][0]["field"], "challenges");
    assert_eq!(json["errors"][0]["kind"], "invalid_format");
}

#[tokio::test]
async fn malformed_json_returns_400() {
    let app = common::build_test_app();

    let response = post_raw(app, "/api/leads", "{\"companyName\": ").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["message"].is_string());
    assert_eq!(json["errors"], json!([]));
}

#[tokio::test]
async fn create_logs_the_id_but_no_personal_data() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = common::build_test_app();
    let lead = body_json(post_json(app, "/api/leads", &valid_payload()).await).await;

    let output = logs.contents();
    assert!(output.contains("Lead created"));
    assert!(output.contains(lead["id"].as_str().unwrap()));
    for personal in ["Acme", "Jane Doe", "jane@acme.com", "99999-8888"] {
        assert!(!output.contains(personal), "log leaked {personal}");
    }
}

// ---------------------------------------------------------------------------
// GET /api/leads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_starts_empty() {
    let app = common::build_test_app();

    let response = get(app, "/api/leads").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn list_is_newest_first() {
    let app = common::build_test_app();

    let mut ids = Vec::new();
    for company in ["First", "Second", "Third"] {
        let mut payload = valid_payload();
        payload["companyName"] = json!(company);
        let lead = body_json(post_json(app.clone(), "/api/leads", &payload).await).await;
        ids.push(lead["id"].clone());
    }
    ids.reverse();

    let all = body_json(get(app, "/api/leads").await).await;
    let listed: Vec<Value> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].clone())
        .collect();
    assert_eq!(listed, ids);
}

// ---------------------------------------------------------------------------
// GET /api/leads/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_id_returns_404() {
    let app = common::build_test_app();

    let id = uuid::Uuid::new_v4();
    let response = get(app, &format!("/api/leads/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], format!("Lead with id {id} not found"));
}

#[tokio::test]
async fn malformed_id_returns_404() {
    let app = common::build_test_app();

    let response = get(app, "/api/leads/nonexistent-id").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Lead with id nonexistent-id not found");
}
