use async_trait::async_trait;
use chrono::{DateTime, Datelike, Duration, NaiveTime, SecondsFormat, Utc};
use scheduler_core::{
    SchedulerError, SchedulerResult,
    models::{
        booking::{BookingRequest, BookingResponse},
        slot::{SLOT_MINUTES, SLOT_START, TimeSlot},
    },
    schema::Violation,
};
use tracing::{info, instrument};
use uuid::Uuid;

/// Operations the scheduler needs from a calendar backend.
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// Lists the slots that can be booked in the week starting at `week_start`.
    async fn available_slots(&self, week_start: DateTime<Utc>) -> SchedulerResult<Vec<TimeSlot>>;

    /// Reserves a standard-length slot starting at `request.start`.
    async fn book_slot(&self, request: &BookingRequest) -> SchedulerResult<BookingResponse>;

    /// Reports whether a slot starting at `start` could still be booked.
    async fn check_availability(&self, start: DateTime<Utc>) -> SchedulerResult<bool>;
}

/// (day offset from Monday, hour of day) of each fixture slot
const FIXTURE_SLOTS: [(i64, i64); 4] = [(0, 9), (0, 10), (1, 14), (2, 11)];

/// Shape reported for a week whose slots would run past year 9999
pub const WEEK_START: &str = "ISO-8601 timestamp on or before 9999-12-27";

fn out_of_range(path: &str, expected: &str, ts: DateTime<Utc>) -> SchedulerError {
    let raw = ts.to_rfc3339_opts(SecondsFormat::AutoSi, true);
    SchedulerError::Validation(Violation::new(path, expected, format!("{raw:?}")).into())
}

/// Calendar backed by fixture data.
///
/// Every week offers the same four slots, there is no record of previous
/// bookings and nothing prevents the same slot being booked twice.
#[derive(Debug, Clone, Default)]
pub struct FixtureCalendar;

impl FixtureCalendar {
    pub fn new() -> Self {
        Self
    }
}

/// Midnight UTC of the first Monday on or after `week_start`'s date.
pub fn week_anchor(week_start: DateTime<Utc>) -> DateTime<Utc> {
    let date = week_start.date_naive();
    let days_ahead = (7 - date.weekday().num_days_from_monday()) % 7;
    (date + Duration::days(i64::from(days_ahead)))
        .and_time(NaiveTime::MIN)
        .and_utc()
}

#[async_trait]
impl CalendarProvider for FixtureCalendar {
    #[instrument(
        name = "calendar.available_slots",
        skip_all,
        fields(
            provider.name = "FixtureCalendar",
            operation.name = "available_slots",
            operation.kind = "query",
            calendar.week_start = %week_start,
        )
    )]
    async fn available_slots(&self, week_start: DateTime<Utc>) -> SchedulerResult<Vec<TimeSlot>> {
        info!("Getting available slots for week starting {}", week_start);

        let monday = week_anchor(week_start);
        FIXTURE_SLOTS
            .iter()
            .map(|&(day, hour)| {
                TimeSlot::checked_starting_at(monday + Duration::days(day) + Duration::hours(hour))
                    .ok_or_else(|| out_of_range("weekStart", WEEK_START, week_start))
            })
            .collect()
    }

    #[instrument(
        name = "calendar.book_slot",
        skip_all,
        fields(
            provider.name = "FixtureCalendar",
            operation.name = "book_slot",
            operation.kind = "mutation",
            booking.start = %request.start,
            booking.guest_email = %request.guest_email,
            booking.guest_name = request.guest_name.as_deref().unwrap_or("unknown"),
            booking.duration = SLOT_MINUTES,
        )
    )]
    async fn book_slot(&self, request: &BookingRequest) -> SchedulerResult<BookingResponse> {
        info!("Booking slot at {} for {}", request.start, request.guest_email);

        let slot = TimeSlot::checked_starting_at(request.start)
            .ok_or_else(|| out_of_range("start", SLOT_START, request.start))?;
        Ok(BookingResponse {
            id: format!("booking-{}", Uuid::new_v4()),
            start: slot.start,
            end: slot.end,
            guest_email: request.guest_email.clone(),
        })
    }

    #[instrument(
        name = "calendar.check_availability",
        skip_all,
        fields(
            provider.name = "FixtureCalendar",
            operation.name = "check_availability",
            operation.kind = "query",
            availability.start = %start,
        )
    )]
    async fn check_availability(&self, start: DateTime<Utc>) -> SchedulerResult<bool> {
        info!("Checking availability at {}", start);
        Ok(start > Utc::now())
    }
}
