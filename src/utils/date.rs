//! Entry date parsing and display.
//!
//! Header dates are ISO-like and end up as naive UTC. Dates without an
//! offset are read as UTC; dates with one are converted to it:
//!
//! | Input                        | Result                  |
//! |------------------------------|-------------------------|
//! | `2024-06-15`                 | 2024-06-15 00:00:00     |
//! | `2024-06-15 14:30`           | 2024-06-15 14:30:00     |
//! | `2024-06-15 14:30:45`        | 2024-06-15 14:30:45     |
//! | `2024-06-15T14:30:45`        | 2024-06-15 14:30:45     |
//! | `2024-06-15T14:30:45Z`       | 2024-06-15 14:30:45     |
//! | `2024-06-15T14:30:45+02:00`  | 2024-06-15 12:30:45 UTC |

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};
use std::fmt::Write;

/// Naive date-time formats tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a header date to second precision.
///
/// Returns `None` for anything that is not one of the accepted forms,
/// including out-of-range values such as `2023-02-29`.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.naive_utc().with_nanosecond(0);
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .and_then(|dt| dt.with_nanosecond(0))
}

/// Render a header date with a strftime `format`.
///
/// Empty or unparseable dates render as an empty string, and so does an
/// invalid format.
pub fn format_date(date: &str, format: &str) -> String {
    let Some(dt) = parse_date(date) else {
        return String::new();
    };

    let mut out = String::new();
    match write!(out, "{}", dt.format(format)) {
        Ok(()) => out,
        Err(_) => String::new(),
    }
}

/// Today's date as `YYYY-MM-DD`.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
