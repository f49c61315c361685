//! # Error Handling Middleware
//!
//! This module maps domain errors to HTTP status codes and JSON error bodies,
//! so every handler reports failures in the same shape:
//!
//! ```json
//! { "error": "Calendar provider error: rate limited" }
//! ```
//!
//! Validation failures carry the list of offending fields instead:
//!
//! ```json
//! {
//!   "error": "Request validation failed",
//!   "violations": [{ "path": "guestEmail", "expected": "string", "actual": "missing" }]
//! }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scheduler_core::errors::SchedulerError;
use serde_json::json;
use tracing::{error, warn};

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps `SchedulerError` and implements `IntoResponse` so
/// handlers can return it directly with `?`.
#[derive(Debug)]
pub struct AppError(pub SchedulerError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            SchedulerError::Validation(_) => StatusCode::BAD_REQUEST,
            SchedulerError::Calendar(_) => StatusCode::BAD_GATEWAY,
            SchedulerError::Delivery(_) => StatusCode::BAD_GATEWAY,
            SchedulerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self.0 {
            SchedulerError::Validation(violations) => {
                warn!("Rejected request payload: {}", violations);
                json!({
                    "error": "Request validation failed",
                    "violations": violations,
                })
            }
            err => {
                error!("Request failed: {}", err);
                json!({ "error": err.to_string() })
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Automatic conversion from SchedulerError to AppError
impl From<SchedulerError> for AppError {
    fn from(err: SchedulerError) -> Self {
        AppError(err)
    }
}

/// Maps a SchedulerError to an HTTP response
pub fn map_error(err: SchedulerError) -> Response {
    AppError(err).into_response()
}
