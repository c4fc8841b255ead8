//! Date-format conversions for the prediction API.
//!
//! The API exchanges dates as `YYYY-MM-DD` strings; the dashboard displays
//! them in short `M/D` form (no zero padding, e.g. "1/31").

use chrono::{Datelike, NaiveDate};
use tracing::warn;

/// Formats a date in the API's wire form, e.g. `2026-01-31`.
pub fn to_api_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses an API `YYYY-MM-DD` string. Returns `None` (and logs) on any
/// malformed input so callers can drop bad rows instead of failing a page.
pub fn parse_api_date(value: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(err) => {
            warn!("Ignoring malformed API date {:?}: {}", value, err);
            None
        }
    }
}

/// Formats a date in the dashboard's short display form, e.g. `1/31`.
pub fn to_display_date(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_format_round_trips() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        assert_eq!(to_api_date(date), "2026-01-31");
        assert_eq!(parse_api_date("2026-01-31"), Some(date));
    }

    #[test]
    fn display_format_strips_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        assert_eq!(to_display_date(date), "1/31");
        let date = NaiveDate::from_ymd_opt(2026, 12, 5).unwrap();
        assert_eq!(to_display_date(date), "12/5");
    }

    #[test]
    fn conversion_is_lossless_across_boundaries() {
        // Month and year boundaries must survive an API round trip and
        // still display correctly.
        for (y, m, d, display) in [
            (2026, 1, 31, "1/31"),
            (2026, 2, 1, "2/1"),
            (2025, 12, 31, "12/31"),
            (2026, 1, 1, "1/1"),
            (2024, 2, 29, "2/29"),
        ] {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            let api = to_api_date(date);
            let parsed = parse_api_date(&api).unwrap();
            assert_eq!(parsed, date);
            assert_eq!(to_display_date(parsed), display);
        }
    }

    #[test]
    fn malformed_dates_are_rejected() {
        assert_eq!(parse_api_date("2026-13-01"), None);
        assert_eq!(parse_api_date("2026-02-30"), None);
        assert_eq!(parse_api_date("31/01/2026"), None);
        assert_eq!(parse_api_date(""), None);
    }
}
