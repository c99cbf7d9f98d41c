//! Aggregation error types.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors raised while building records or aggregating site metadata.
///
/// Every variant is fatal for the current build.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("incomplete record: metadata header has no `{field}` field")]
    IncompleteRecord { field: &'static str },

    #[error("record `{title}` has no category")]
    EmptyCategory { title: String },

    #[error("invalid date `{date}` in `{title}`")]
    InvalidDate { title: String, date: String },

    #[error(
        "timeline is full: no free second within {window}s after {timestamp} for category `{category}`"
    )]
    TimelineFull {
        category: String,
        timestamp: NaiveDateTime,
        window: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_site_error_display() {
        let err = SiteError::IncompleteRecord { field: "title" };
        assert!(format!("{err}").contains("`title`"));

        let err = SiteError::InvalidDate {
            title: "Alpha".into(),
            date: "yesterday".into(),
        };
        let display = format!("{err}");
        assert!(display.contains("yesterday"));
        assert!(display.contains("Alpha"));

        let timestamp = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let err = SiteError::TimelineFull {
            category: "blog".into(),
            timestamp,
            window: 3600,
        };
        let display = format!("{err}");
        assert!(display.contains("3600s"));
        assert!(display.contains("blog"));
    }
}
