use axum::{body::to_bytes, http::StatusCode, response::Response};
use pretty_assertions::assert_eq;
use scheduler_api::middleware::error_handling::{AppError, map_error};
use scheduler_core::{
    SchedulerError,
    schema::{Violation, Violations},
};
use serde_json::{Value, json};

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_validation_error_lists_violations() {
    let mut violations = Violations::new();
    violations.push(Violation::new("start", "ISO-8601 timestamp", "missing"));
    violations.push(Violation::new("guestEmail", "string", "number"));

    let response = map_error(SchedulerError::Validation(violations));

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({
            "error": "Request validation failed",
            "violations": [
                { "path": "start", "expected": "ISO-8601 timestamp", "actual": "missing" },
                { "path": "guestEmail", "expected": "string", "actual": "number" },
            ],
        })
    );
}

#[tokio::test]
async fn test_provider_errors_are_bad_gateway() {
    let response = map_error(SchedulerError::Calendar(eyre::eyre!("quota exceeded")));
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Calendar provider error: quota exceeded" })
    );

    let response = map_error(SchedulerError::Delivery(eyre::eyre!("smtp down")));
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Notification delivery error: smtp down" })
    );
}

#[tokio::test]
async fn test_internal_error_is_server_error() {
    let response = map_error(SchedulerError::Internal("clock went backwards".into()));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("clock went backwards")
    );
}

#[test]
fn test_app_error_from_scheduler_error() {
    let violations = Violations::from(Violation::new("weekStart", "ISO-8601 timestamp", "\"x\""));
    let err: AppError = SchedulerError::from(violations).into();

    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}
