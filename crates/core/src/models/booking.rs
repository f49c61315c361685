use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    models::slot::{SLOT_START, TimeSlot},
    schema::{ObjectReader, Schema, Violations},
};

/// Inbound request to reserve a slot.
///
/// Only `start` and `guestEmail` are required. The email address is accepted
/// as any string; its format is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub start: DateTime<Utc>,
    pub guest_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Schema for BookingRequest {
    fn from_json(value: &Value) -> Result<Self, Violations> {
        let mut reader = ObjectReader::new(value)?;
        let start = reader.required_timestamp_where("start", SLOT_START, |start| {
            TimeSlot::checked_starting_at(start).is_some()
        });
        let guest_email = reader.required_string("guestEmail");
        let guest_name = reader.optional_string("guestName");
        let summary = reader.optional_string("summary");

        let violations = reader.finish();
        match (start, guest_email) {
            (Some(start), Some(guest_email)) if violations.is_empty() => Ok(Self {
                start,
                guest_email,
                guest_name,
                summary,
            }),
            _ => Err(violations),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub guest_email: String,
}
