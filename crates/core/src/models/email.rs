use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{ObjectReader, Schema, Violations};

pub const CONFIRMATION_SUBJECT: &str = "Booking Confirmation - Your meeting is scheduled";
pub const CANCELLATION_SUBJECT: &str = "Meeting Cancelled";

/// A generic outbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    pub to: String,
    pub subject: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_html: Option<bool>,
}

impl Schema for EmailRequest {
    fn from_json(value: &Value) -> Result<Self, Violations> {
        let mut reader = ObjectReader::new(value)?;
        let to = reader.required_string("to");
        let subject = reader.required_string("subject");
        let body = reader.required_string("body");
        let is_html = reader.optional_bool("isHtml");

        let violations = reader.finish();
        match (to, subject, body) {
            (Some(to), Some(subject), Some(body)) if violations.is_empty() => Ok(Self {
                to,
                subject,
                body,
                is_html,
            }),
            _ => Err(violations),
        }
    }
}

/// Record of a message handed to the mailer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailConfirmation {
    pub id: String,
    pub to: String,
    pub subject: String,
    pub sent_at: DateTime<Utc>,
}

/// Details of a booking quoted in the confirmation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub event_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
}

/// Details of a booking quoted in the cancellation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationNotice {
    pub event_id: String,
    pub start: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
}
