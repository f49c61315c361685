//! # Request Validation
//!
//! Extractors that turn raw request input into typed domain values, rejecting
//! the request with a structured `400` before any handler logic runs.

use axum::{
    Json, async_trait,
    extract::{FromRequest, Request},
};
use chrono::{DateTime, Utc};
use scheduler_core::{
    errors::SchedulerError,
    schema::{Schema, TIMESTAMP, Violation, parse_timestamp},
};
use serde_json::Value;

use crate::middleware::error_handling::AppError;

/// JSON body checked against `T`'s schema.
///
/// Malformed JSON and schema mismatches both surface as
/// `SchedulerError::Validation`, listing every offending field.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: Schema + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError(SchedulerError::Validation(
                    Violation::new("", "JSON object", rejection.body_text()).into(),
                ))
            })?;

        T::from_json(&value)
            .map(ValidatedJson)
            .map_err(|violations| AppError(violations.into()))
    }
}

/// Parses an ISO-8601 path parameter named `name`.
pub fn timestamp_param(name: &str, raw: &str) -> Result<DateTime<Utc>, AppError> {
    parse_timestamp(raw).ok_or_else(|| {
        AppError(SchedulerError::Validation(
            Violation::new(name, TIMESTAMP, format!("{raw:?}")).into(),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_timestamp_param_accepts_date_and_datetime() {
        assert!(timestamp_param("weekStart", "2025-07-07").is_ok());
        assert!(timestamp_param("weekStart", "2025-07-07T00:00:00.000Z").is_ok());
    }

    #[test]
    fn test_timestamp_param_names_the_field() {
        let err = timestamp_param("weekStart", "soon").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        match err.0 {
            SchedulerError::Validation(violations) => assert!(violations.contains_path("weekStart")),
            e => panic!("Expected Validation error, got: {:?}", e),
        }
    }
}
