//! Health Check API Tests

use axum::http::StatusCode;

use crate::common::{body_json, TestApp};

/// Basic health check endpoint returns 200 OK
#[tokio::test]
async fn health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

/// Liveness probe always returns 200, even with unhealthy dependencies
#[tokio::test]
async fn liveness_probe_returns_ok() {
    let app = TestApp::with_unreachable_database();

    let response = app.get("/health/live").await;

    assert_eq!(response.status(), StatusCode::OK);
}

/// Readiness probe reports 503 when the database is unreachable
#[tokio::test]
async fn readiness_probe_fails_without_database() {
    let app = TestApp::with_unreachable_database();

    let response = app.get("/health/ready").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = body_json(response).await;
    assert_eq!(body["checks"]["database"]["status"], "unhealthy");
}
