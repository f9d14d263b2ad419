//! Human-readable rendering of server timestamps.
//!
//! Output follows the long en-US style: `January 15, 2024` for dates and
//! `October 15, 2025 at 09:00 AM` for date-times. Input that does not parse
//! renders as [`INVALID_DATE`] instead of failing.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use crate::domain::serde_utils::NAIVE_FORMATS;

pub const INVALID_DATE: &str = "Invalid Date";

const DATE_FORMAT: &str = "%B %-d, %Y";
const DATE_TIME_FORMAT: &str = "%B %-d, %Y at %I:%M %p";

/// Parses user or server input into a local calendar date-time.
///
/// Offset-bearing timestamps are converted to local time; naive values and
/// bare dates are taken as already local.
#[must_use]
pub fn parse_local(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

#[must_use]
pub fn format_date_time(input: &str) -> String {
    parse_local(input).map_or_else(|| INVALID_DATE.to_string(), |dt| render_date_time(&dt))
}

#[must_use]
pub fn format_date(input: &str) -> String {
    parse_local(input).map_or_else(|| INVALID_DATE.to_string(), |dt| render_date(&dt))
}

#[must_use]
pub fn render_date_time(value: &NaiveDateTime) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

#[must_use]
pub fn render_date(value: &NaiveDateTime) -> String {
    value.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("2024-01-15", "January 15, 2024" ; "bare_date")]
    #[test_case("2025-10-15T09:00:00", "October 15, 2025" ; "naive_datetime")]
    #[test_case("2025-03-01T23:59:59.999999", "March 1, 2025" ; "fractional_seconds")]
    #[test_case("not a date", "Invalid Date" ; "garbage")]
    fn test_format_date(input: &str, expected: &str) {
        assert_eq!(format_date(input), expected);
    }

    #[test_case("2025-10-15T09:00:00", "October 15, 2025 at 09:00 AM" ; "morning")]
    #[test_case("2025-10-15T21:05:00", "October 15, 2025 at 09:05 PM" ; "evening")]
    #[test_case("2025-10-15 12:30", "October 15, 2025 at 12:30 PM" ; "space_separated")]
    #[test_case("2024-01-15", "January 15, 2024 at 12:00 AM" ; "bare_date_is_midnight")]
    #[test_case("", "Invalid Date" ; "empty")]
    fn test_format_date_time(input: &str, expected: &str) {
        assert_eq!(format_date_time(input), expected);
    }

    #[test]
    fn test_offset_input_converts_to_local() {
        let expected = DateTime::parse_from_rfc3339("2025-10-15T09:00:00Z")
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(format_date_time("2025-10-15T09:00:00Z"), render_date_time(&expected));
    }

    #[test]
    fn test_date_time_includes_time_of_day() {
        let date = format_date("2025-10-15T09:00:00");
        let date_time = format_date_time("2025-10-15T09:00:00");
        assert!(date_time.starts_with(&date));
        assert!(date_time.len() > date.len());
    }
}
