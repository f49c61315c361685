use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::is_representable;

/// Length of every bookable slot, in minutes
pub const SLOT_MINUTES: i64 = 30;

/// Shape reported for a slot start too late for its end to be serialized
pub const SLOT_START: &str = "ISO-8601 timestamp before 9999-12-31T23:30:00Z";

pub fn slot_duration() -> Duration {
    Duration::minutes(SLOT_MINUTES)
}

/// A fixed-length interval offered for booking. `end` is always after `start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeSlot {
    /// A standard-length slot beginning at `start`
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            start,
            end: start + slot_duration(),
        }
    }

    /// Like [`starting_at`](Self::starting_at), or `None` when either end
    /// falls outside the RFC 3339 year range
    pub fn checked_starting_at(start: DateTime<Utc>) -> Option<Self> {
        let end = start.checked_add_signed(slot_duration())?;
        (is_representable(start) && is_representable(end)).then_some(Self { start, end })
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}
