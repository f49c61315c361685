//! # Payload Schemas
//!
//! Structural validation of inbound JSON payloads. A payload is checked field
//! by field against its declared shape and every mismatch is recorded as a
//! [`Violation`], so a client receives the full list of problems in one
//! response instead of fixing them one round-trip at a time.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// A single field that did not match its declared shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Field path inside the payload; empty for the payload itself
    pub path: String,
    /// Shape the field was required to have
    pub expected: String,
    /// What was actually found
    pub actual: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "<root>" } else { &self.path };
        write!(f, "{path}: expected {}, actual {}", self.expected, self.actual)
    }
}

/// Every violation found while validating one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// Returns true if some violation was recorded for `path`
    pub fn contains_path(&self, path: &str) -> bool {
        self.0.iter().any(|v| v.path == path)
    }
}

impl From<Violation> for Violations {
    fn from(violation: Violation) -> Self {
        Self(vec![violation])
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

/// Types that can be built from an untyped JSON payload after checking it
/// against their schema.
pub trait Schema: Sized {
    fn from_json(value: &Value) -> Result<Self, Violations>;
}

/// Reads typed fields out of a JSON object, recording a violation for each
/// field that is missing or has the wrong shape.
///
/// Unknown fields are ignored. A `null` is not accepted for optional fields;
/// an optional field must either be absent or have its declared type.
pub struct ObjectReader<'a> {
    fields: &'a Map<String, Value>,
    violations: Violations,
}

impl<'a> ObjectReader<'a> {
    pub fn new(value: &'a Value) -> Result<Self, Violations> {
        match value {
            Value::Object(fields) => Ok(Self {
                fields,
                violations: Violations::new(),
            }),
            other => Err(Violation::new("", "object", describe(other)).into()),
        }
    }

    pub fn required_string(&mut self, key: &str) -> Option<String> {
        match self.fields.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => self.reject(key, "string", describe(other)),
            None => self.reject(key, "string", "missing"),
        }
    }

    pub fn optional_string(&mut self, key: &str) -> Option<String> {
        match self.fields.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => self.reject(key, "string", describe(other)),
            None => None,
        }
    }

    pub fn optional_bool(&mut self, key: &str) -> Option<bool> {
        match self.fields.get(key) {
            Some(Value::Bool(b)) => Some(*b),
            Some(other) => self.reject(key, "boolean", describe(other)),
            None => None,
        }
    }

    pub fn required_timestamp(&mut self, key: &str) -> Option<DateTime<Utc>> {
        match self.fields.get(key) {
            Some(Value::String(s)) => match parse_timestamp(s) {
                Some(ts) => Some(ts),
                None => self.reject(key, TIMESTAMP, format!("{s:?}")),
            },
            Some(other) => self.reject(key, TIMESTAMP, describe(other)),
            None => self.reject(key, TIMESTAMP, "missing"),
        }
    }

    /// A required timestamp that `accept` must also approve; a refused value
    /// is reported as `expected`.
    pub fn required_timestamp_where(
        &mut self,
        key: &str,
        expected: &str,
        accept: impl FnOnce(DateTime<Utc>) -> bool,
    ) -> Option<DateTime<Utc>> {
        let ts = self.required_timestamp(key)?;
        if accept(ts) {
            return Some(ts);
        }
        let raw = self.fields.get(key).and_then(Value::as_str).unwrap_or_default();
        self.reject(key, expected, format!("{raw:?}"))
    }

    /// Consumes the reader, returning everything that was rejected.
    pub fn finish(self) -> Violations {
        self.violations
    }

    fn reject<T>(&mut self, key: &str, expected: &str, actual: impl Into<String>) -> Option<T> {
        self.violations.push(Violation::new(key, expected, actual));
        None
    }
}

/// Shape name reported for timestamp fields
pub const TIMESTAMP: &str = "ISO-8601 timestamp";

/// Parses an ISO-8601 timestamp.
///
/// Accepts a full RFC 3339 date-time with offset (`2025-07-07T09:00:00Z`,
/// `2025-07-07T11:00:00+02:00`) or a bare calendar date (`2025-07-07`), which
/// is taken as midnight UTC. Instants that would not serialize back with a
/// four-digit year are refused.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let ts = match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.with_timezone(&Utc),
        Err(_) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()?
            .and_time(NaiveTime::MIN)
            .and_utc(),
    };
    is_representable(ts).then_some(ts)
}

/// True if `ts` serializes as an RFC 3339 string, i.e. its UTC year is
/// between 0000 and 9999.
pub fn is_representable(ts: DateTime<Utc>) -> bool {
    (0..=9999).contains(&ts.year())
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_parse_timestamp_accepts_offsets_and_dates() {
        let expected = Utc.with_ymd_and_hms(2025, 7, 7, 9, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2025-07-07T09:00:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2025-07-07T11:00:00+02:00"), Some(expected));
        assert_eq!(
            parse_timestamp("2025-07-07"),
            Some(Utc.with_ymd_and_hms(2025, 7, 7, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert_eq!(parse_timestamp("next monday"), None);
        assert_eq!(parse_timestamp("2025-13-01"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_parse_timestamp_rejects_years_outside_rfc3339() {
        assert_eq!(parse_timestamp("+10000-01-01T00:00:00Z"), None);
        // Normalizing to UTC moves this one into year -1
        assert_eq!(parse_timestamp("0000-01-01T00:00:00+01:00"), None);
        assert!(parse_timestamp("9999-12-31T23:59:59Z").is_some());
        assert!(parse_timestamp("0000-01-01").is_some());
    }

    #[test]
    fn test_required_timestamp_where_reports_refused_value() {
        let payload = json!({ "at": "2025-07-07T09:00:00Z", "late": "9999-12-31" });
        let mut reader = ObjectReader::new(&payload).unwrap();
        assert!(reader.required_timestamp_where("at", "early", |_| true).is_some());
        assert_eq!(reader.required_timestamp_where("late", "early", |_| false), None);
        assert_eq!(reader.required_timestamp_where("gone", "early", |_| true), None);

        let violations: Vec<_> = reader.finish().iter().cloned().collect();
        assert_eq!(
            violations,
            vec![
                Violation::new("late", "early", "\"9999-12-31\""),
                Violation::new("gone", TIMESTAMP, "missing"),
            ]
        );
    }

    #[test]
    fn test_reader_rejects_non_object() {
        let err = ObjectReader::new(&json!([1, 2])).err().unwrap();
        assert_eq!(err.len(), 1);
        assert!(err.contains_path(""));
    }

    #[test]
    fn test_reader_collects_every_violation() {
        let payload = json!({ "a": 1, "c": null });
        let mut reader = ObjectReader::new(&payload).unwrap();
        assert_eq!(reader.required_string("a"), None);
        assert_eq!(reader.required_string("b"), None);
        assert_eq!(reader.optional_string("c"), None);
        assert_eq!(reader.optional_string("d"), None);

        let violations = reader.finish();
        assert_eq!(violations.len(), 3);
        assert_eq!(
            violations.to_string(),
            "a: expected string, actual number; b: expected string, actual missing; c: expected string, actual null"
        );
    }
}
