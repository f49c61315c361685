use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use scheduler_core::{
    SchedulerResult,
    models::{
        booking::{BookingRequest, BookingResponse},
        email::{BookingConfirmation, CancellationNotice, EmailConfirmation, EmailRequest},
        slot::TimeSlot,
    },
};

use crate::{CalendarProvider, NotificationProvider};

// Mock providers for testing
mock! {
    pub Calendar {}

    #[async_trait]
    impl CalendarProvider for Calendar {
        async fn available_slots(&self, week_start: DateTime<Utc>) -> SchedulerResult<Vec<TimeSlot>>;

        async fn book_slot(&self, request: &BookingRequest) -> SchedulerResult<BookingResponse>;

        async fn check_availability(&self, start: DateTime<Utc>) -> SchedulerResult<bool>;
    }
}

mock! {
    pub Mailer {}

    #[async_trait]
    impl NotificationProvider for Mailer {
        async fn send_booking_confirmation(
            &self,
            guest_email: &str,
            booking: &BookingConfirmation,
        ) -> SchedulerResult<EmailConfirmation>;

        async fn send_booking_cancellation(
            &self,
            guest_email: &str,
            booking: &CancellationNotice,
        ) -> SchedulerResult<EmailConfirmation>;

        async fn send_email(&self, request: &EmailRequest) -> SchedulerResult<EmailConfirmation>;
    }
}
