//! Integration tests for health check endpoints

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("healthy"));
}

#[tokio::test]
async fn test_liveness_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/health/live").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("alive"));
}

#[tokio::test]
async fn test_readiness_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get_json("/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["calculator"]["status"], "healthy");
}

#[tokio::test]
async fn test_api_v1_root() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/api/v1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("BMI Calculator API v1"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = common::TestApp::new();

    let (status, _) = app.get("/api/v1/report").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
