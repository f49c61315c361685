use axum::{Json, extract::State};
use scheduler_core::models::{
    booking::{BookingRequest, BookingResponse},
    email::BookingConfirmation,
};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::{
    ApiState,
    middleware::{error_handling::AppError, validation::ValidatedJson},
};

/// Books a slot and sends the guest a confirmation.
///
/// The payload has been checked against the `BookingRequest` schema by the
/// time this runs; an invalid payload never reaches either provider.
#[axum::debug_handler]
#[instrument(
    name = "http.create_booking",
    skip_all,
    fields(
        operation.name = "create_booking",
        operation.kind = "mutation",
        booking.start = %request.start,
        booking.guest_email = %request.guest_email,
    )
)]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    ValidatedJson(request): ValidatedJson<BookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    // Book the slot
    let booking = state.calendar.book_slot(&request).await?;

    // Send confirmation email
    let confirmation = BookingConfirmation {
        event_id: booking.id.clone(),
        start: booking.start,
        end: booking.end,
        guest_name: request.guest_name.clone(),
    };
    let receipt = state
        .notifier
        .send_booking_confirmation(&request.guest_email, &confirmation)
        .await?;

    info!("Booked {} and sent confirmation {}", booking.id, receipt.id);

    Ok(Json(booking))
}
