use async_trait::async_trait;
use chrono::Utc;
use scheduler_core::{
    SchedulerResult,
    models::email::{
        BookingConfirmation, CANCELLATION_SUBJECT, CONFIRMATION_SUBJECT, CancellationNotice,
        EmailConfirmation, EmailRequest,
    },
};
use tracing::{info, instrument};
use uuid::Uuid;

/// Operations the scheduler needs from a mail service.
#[async_trait]
pub trait NotificationProvider: Send + Sync {
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

/// Mailer that records what it would have sent without delivering anything.
#[derive(Debug, Clone, Default)]
pub struct FixtureMailer;

impl FixtureMailer {
    pub fn new() -> Self {
        Self
    }

    fn receipt(to: &str, subject: &str) -> EmailConfirmation {
        EmailConfirmation {
            id: format!("email-{}", Uuid::new_v4()),
            to: to.to_string(),
            subject: subject.to_string(),
            sent_at: Utc::now(),
        }
    }
}

#[async_trait]
impl NotificationProvider for FixtureMailer {
    #[instrument(
        name = "email.send_booking_confirmation",
        skip_all,
        fields(
            provider.name = "FixtureMailer",
            operation.name = "send_booking_confirmation",
            operation.kind = "notification",
            email.to = %guest_email,
            booking.event_id = %booking.event_id,
        )
    )]
    async fn send_booking_confirmation(
        &self,
        guest_email: &str,
        booking: &BookingConfirmation,
    ) -> SchedulerResult<EmailConfirmation> {
        info!(
            "Sending booking confirmation to {} for event {}",
            guest_email, booking.event_id
        );
        Ok(Self::receipt(guest_email, CONFIRMATION_SUBJECT))
    }

    #[instrument(
        name = "email.send_booking_cancellation",
        skip_all,
        fields(
            provider.name = "FixtureMailer",
            operation.name = "send_booking_cancellation",
            operation.kind = "notification",
            email.to = %guest_email,
            booking.event_id = %booking.event_id,
        )
    )]
    async fn send_booking_cancellation(
        &self,
        guest_email: &str,
        booking: &CancellationNotice,
    ) -> SchedulerResult<EmailConfirmation> {
        info!(
            "Sending cancellation notice to {} for event {}",
            guest_email, booking.event_id
        );
        Ok(Self::receipt(guest_email, CANCELLATION_SUBJECT))
    }

    #[instrument(
        name = "email.send_email",
        skip_all,
        fields(
            provider.name = "FixtureMailer",
            operation.name = "send_email",
            operation.kind = "notification",
            email.to = %request.to,
            email.html = request.is_html.unwrap_or(false),
        )
    )]
    async fn send_email(&self, request: &EmailRequest) -> SchedulerResult<EmailConfirmation> {
        info!("Sending email to {} with subject {:?}", request.to, request.subject);
        Ok(Self::receipt(&request.to, &request.subject))
    }
}
