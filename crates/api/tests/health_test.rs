mod test_utils;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode, header};
use pretty_assertions::assert_eq;
use scheduler_api::ApiState;
use serde_json::{Value, json};

use test_utils::{config_with, fixture_server, server};

#[tokio::test]
async fn test_health_check() {
    let server = fixture_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_version_reports_configuration() {
    let config = config_with(&[("APP_VERSION", "1.2.3"), ("NODE_ENV", "staging")]).unwrap();
    let server = server(ApiState::with_fixtures(Arc::new(config)));

    let response = server.get("/version").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "name": "Scheduler", "version": "1.2.3", "environment": "staging" })
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = fixture_server();

    let response = server.get("/bookings").expect_failure().await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let config = config_with(&[("API_CORS_ORIGINS", "http://localhost:5173")]).unwrap();
    let server = server(ApiState::with_fixtures(Arc::new(config)));

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://localhost:5173"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static("http://localhost:5173"))
    );
}

#[tokio::test]
async fn test_cors_disabled_without_origins() {
    let server = fixture_server();

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://localhost:5173"),
        )
        .await;

    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
