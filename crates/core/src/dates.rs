//! Calendar-date handling for due dates.
//!
//! Due dates carry no time of day. Callers may still send a full timestamp
//! (`2024-01-10T15:30:00Z`); the time portion is dropped and the date is kept
//! exactly as written, without shifting it into another timezone.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::error::CoreError;

/// Storage and wire format of a calendar date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date, discarding any time-of-day component.
///
/// Accepted inputs:
/// - `YYYY-MM-DD`
/// - RFC 3339 timestamps (`2024-01-10T08:00:00+02:00`)
/// - offset-less timestamps (`2024-01-10T08:00:00`, `2024-01-10 08:00:00`)
pub fn parse_calendar_date(input: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(timestamp.date());
        }
    }

    Err(CoreError::Validation(format!(
        "'{trimmed}' is not a valid date (expected YYYY-MM-DD)"
    )))
}

/// Serde adapter for a required calendar date field.
///
/// ```ignore
/// #[serde(deserialize_with = "todos_core::dates::calendar_date::deserialize")]
/// pub due_date: NaiveDate,
/// ```
pub mod calendar_date {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_calendar_date(&raw).map_err(serde::de::Error::custom)
    }
}
