//! Show scheduling: start-time parsing, display formatting and the
//! past/upcoming split used by listings and detail views.
//!
//! A show is *upcoming* when its start time is strictly after the comparison
//! instant and *past* otherwise, so a show starting exactly "now" is past.
//! Callers pick the instant once per request and pass it in.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/* --------------------------------------------------------------------------
Parsing
-------------------------------------------------------------------------- */

/// Naive date-time layouts accepted for a show's start time, tried in order.
/// Naive values are taken to be UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %I:%M%p",
];

/// Layouts carrying an explicit UTC offset (beyond what RFC 3339 covers).
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%:z", "%Y-%m-%d %H:%M:%S%z"];

/// Date-only layouts; the show starts at midnight UTC.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Parse a free-text start time as submitted by the show form.
pub fn parse_start_time(input: &str) -> Result<Timestamp, CoreError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(CoreError::Validation("Start time is required".to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, fmt) {
            return Ok(dt.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Ok(naive.and_utc());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                return Ok(midnight.and_utc());
            }
        }
    }

    Err(CoreError::Validation(format!(
        "Unrecognized start time '{text}'. Use a date such as 2023-05-01T20:00:00"
    )))
}

/// Render a start time the way listings display it (`2023-05-01 20:00:00`).
pub fn format_start_time(start_time: Timestamp) -> String {
    start_time.format("%Y-%m-%d %H:%M:%S").to_string()
}

/* --------------------------------------------------------------------------
Past / upcoming
-------------------------------------------------------------------------- */

/// Anything with a scheduled start.
pub trait Scheduled {
    fn start_time(&self) -> Timestamp;
}

/// Whether a show starting at `start_time` is still ahead of `now`.
pub fn is_upcoming(start_time: Timestamp, now: Timestamp) -> bool {
    start_time > now
}

/// Shows split around a single comparison instant.
#[derive(Debug)]
pub struct Partitioned<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

/// Split shows into past and upcoming relative to `now`, keeping input order
/// within each side.
pub fn partition_by_time<T, I>(shows: I, now: Timestamp) -> Partitioned<T>
where
    T: Scheduled,
    I: IntoIterator<Item = T>,
{
    let (upcoming, past) = shows
        .into_iter()
        .partition(|show| is_upcoming(show.start_time(), now));
    Partitioned { past, upcoming }
}
