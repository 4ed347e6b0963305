//! Shallow checks for incoming request fields.
//!
//! Validation is presence-only: a field must be supplied and must not be
//! "falsy" (missing, null, blank, or a non-positive number). Length limits and
//! other column constraints are left to the record store.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Keep a string only if it is non-blank.
pub fn truthy_text(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

/// Keep a number only if it is strictly positive. A positive number that does
/// not fit a 32-bit column is an error rather than falsy.
pub fn truthy_positive(field: &'static str, value: Option<i64>) -> Result<Option<i32>, CoreError> {
    value
        .filter(|n| *n > 0)
        .map(|n| {
            i32::try_from(n)
                .map_err(|_| CoreError::Validation(format!("field '{field}' is out of range")))
        })
        .transpose()
}

/// Require a supplied, non-blank string.
pub fn require_text(field: &'static str, value: Option<String>) -> Result<String, CoreError> {
    truthy_text(value).ok_or_else(|| missing(field))
}

/// Require a supplied, strictly positive integer that fits a 32-bit column.
pub fn require_positive(field: &'static str, value: Option<i64>) -> Result<i32, CoreError> {
    truthy_positive(field, value)?.ok_or_else(|| missing(field))
}

/// Require a supplied timestamp.
pub fn require_timestamp(
    field: &'static str,
    value: Option<Timestamp>,
) -> Result<Timestamp, CoreError> {
    value.ok_or_else(|| missing(field))
}

/// Parse an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date taken as midnight UTC.
///
/// ```
/// use casting_core::validation::parse_timestamp;
///
/// let a = parse_timestamp("2024-01-01T00:00:00Z").unwrap();
/// let b = parse_timestamp("2024-01-01").unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, CoreError> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| CoreError::Validation(format!("'{raw}' is not an ISO-8601 date or timestamp")))
}

/// Reject an update that supplies no recognized field.
pub fn require_any_field(supplied: bool) -> Result<(), CoreError> {
    if supplied {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "at least one updatable field is required".into(),
        ))
    }
}

fn missing(field: &'static str) -> CoreError {
    CoreError::Validation(format!("field '{field}' is required"))
}
