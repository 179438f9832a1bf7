//! Health Check and Metrics API Tests

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::{fake_employee, test_server, test_server_with_probe, DownProbe};

#[tokio::test]
async fn test_health_check_returns_ok() {
    let server = test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body.get("version").is_some());
}

#[tokio::test]
async fn test_liveness_probe() {
    let server = test_server();

    let response = server.get("/health/live").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "alive");
}

#[tokio::test]
async fn test_readiness_with_database_up() {
    let server = test_server();

    let response = server.get("/health/ready").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_ne!(body["status"], "unhealthy");
    assert!(body["checks"]["database"].get("latency_ms").is_some());
}

#[tokio::test]
async fn test_readiness_with_database_down() {
    let server = test_server_with_probe(Arc::new(DownProbe));

    let response = server.get("/health/ready").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], "unhealthy");
    assert!(body["checks"]["database"]["message"]
        .as_str()
        .is_some_and(|m| m.starts_with("Database connection failed")));
}

#[tokio::test]
async fn test_metrics_report_matched_routes() {
    let server = test_server();
    server
        .post("/api/empleados")
        .json(&fake_employee())
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/metrics").await;

    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("schedule_server_http_requests_total"));
    assert!(text.contains("path=\"/api/empleados\""));
    assert!(text.contains("schedule_server_record_writes_total"));
}
