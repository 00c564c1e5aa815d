//! HTTP route tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use triage_api::{create_router, AppState};
use triage_kb::RuleCatalog;

fn app() -> Router {
    let catalog = RuleCatalog::builtin().unwrap();
    let handle = PrometheusBuilder::new().build_recorder().handle();
    create_router(Arc::new(AppState::new(catalog, handle)))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

fn post_triage(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/triage")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (status, json) = send(get("/api/v1/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["symptom_count"].as_u64().unwrap() > 20);
    assert!(json["rule_count"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_symptoms() {
    let (status, json) = send(get("/api/v1/symptoms")).await;
    assert_eq!(status, StatusCode::OK);
    let data = json["data"].as_array().unwrap();
    assert_eq!(json["count"].as_u64().unwrap() as usize, data.len());
    assert_eq!(data[0]["id"], "chest_pain");
    assert!(json["disclaimer"].as_str().unwrap().contains("NOT a medical diagnostic tool"));
}

#[tokio::test]
async fn test_triage_critical() {
    let (status, json) = send(post_triage(json!({
        "symptoms": ["chest_pain", "left_arm_pain", "headache"]
    })))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["level"], "critical");
    assert!(json["explanations"][0]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("myocardial"));
    assert!(json["all_levels"]["urgent"].is_array());
    assert!(json["all_levels"]["low"].is_array());
    assert_eq!(
        json["symptoms"],
        json!(["chest_pain", "left_arm_pain", "headache"])
    );
    assert!(json["recommended_action"].as_str().unwrap().contains("emergency"));
    assert!(json["assessed_at"].is_string());
}

#[tokio::test]
async fn test_triage_empty() {
    let (status, json) = send(post_triage(json!({ "symptoms": [] }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["level"], "none");
    assert_eq!(json["all_levels"], json!({}));
}

#[tokio::test]
async fn test_triage_unknown_symptom() {
    let (status, json) = send(post_triage(json!({ "symptoms": ["fever", "glowing_skin"] }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"], "Unknown symptom: glowing_skin");
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let response = app().oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
