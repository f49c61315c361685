//! # Availability Handlers
//!
//! Lists the bookable slots for a week. The calendar provider decides which
//! slots exist; this handler only validates the requested week and forwards
//! the provider's answer.

use axum::{
    Json,
    extract::{Path, State},
};
use scheduler_core::models::slot::TimeSlot;
use std::sync::Arc;
use tracing::instrument;

use crate::{
    ApiState,
    middleware::{error_handling::AppError, validation::timestamp_param},
};

/// Lists available slots for the week starting at `weekStart`
///
/// # Endpoint
///
/// ```text
/// GET /availability/2025-07-07T00:00:00.000Z
/// ```
///
/// `weekStart` is an RFC 3339 timestamp or a plain `YYYY-MM-DD` date. The
/// response is a JSON array of `{ "start", "end" }` objects.
///
/// # Errors
///
/// * `SchedulerError::Validation` - `weekStart` is not a timestamp
/// * `SchedulerError::Calendar` - the calendar provider failed
#[axum::debug_handler]
#[instrument(
    name = "http.get_slots",
    skip_all,
    fields(operation.name = "get_slots", operation.kind = "query", http.week_start = %week_start)
)]
pub async fn get_slots(
    State(state): State<Arc<ApiState>>,
    Path(week_start): Path<String>,
) -> Result<Json<Vec<TimeSlot>>, AppError> {
    let week_start = timestamp_param("weekStart", &week_start)?;

    let slots = state.calendar.available_slots(week_start).await?;

    Ok(Json(slots))
}
