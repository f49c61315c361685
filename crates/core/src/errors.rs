use thiserror::Error;

use crate::schema::Violations;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Request validation failed: {0}")]
    Validation(Violations),

    #[error("Calendar provider error: {0}")]
    Calendar(eyre::Report),

    #[error("Notification delivery error: {0}")]
    Delivery(eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl From<Violations> for SchedulerError {
    fn from(violations: Violations) -> Self {
        SchedulerError::Validation(violations)
    }
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;
