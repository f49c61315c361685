use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

use crate::ApiState;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

#[derive(Serialize)]
struct VersionResponse {
    name: String,
    version: String,
    environment: String,
}

#[instrument(
    name = "http.health_check",
    fields(operation.name = "health_check", operation.kind = "query")
)]
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[instrument(
    name = "http.version",
    skip_all,
    fields(operation.name = "version", operation.kind = "query")
)]
async fn version(State(state): State<Arc<ApiState>>) -> Json<VersionResponse> {
    Json(VersionResponse {
        name: state.config.app_name().to_string(),
        version: state.config.version().to_string(),
        environment: state.config.environment().to_string(),
    })
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
}
