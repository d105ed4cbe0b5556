//! Boundary conversion of raw date/time strings into validated chrono values.
//!
//! Malformed input degrades to `None` ("unconstrained") instead of failing
//! the whole query: a single bad bound should not block an otherwise
//! satisfiable filter. Callers must treat `None` as the only failure signal.

use chrono::{NaiveDate, NaiveTime};
use tracing::warn;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";
const TIME_FORMAT_NO_SECONDS: &str = "%H:%M";

/// Parse a `YYYY-MM-DD` string into a date. `None` passes through.
pub fn normalize_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?;

    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            warn!(input = raw, error = %e, "date conversion failed");
            None
        }
    }
}

/// Parse an `HH:MM[:SS]` string into a time of day. `None` passes through.
pub fn normalize_time(raw: Option<&str>) -> Option<NaiveTime> {
    let raw = raw?;

    match NaiveTime::parse_from_str(raw, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(raw, TIME_FORMAT_NO_SECONDS))
    {
        Ok(time) => Some(time),
        Err(e) => {
            warn!(input = raw, error = %e, "time conversion failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_normalize_date_valid() {
        assert_eq!(
            normalize_date(Some("2025-03-05")),
            NaiveDate::from_ymd_opt(2025, 3, 5)
        );
        assert_eq!(
            normalize_date(Some("1999-12-31")),
            NaiveDate::from_ymd_opt(1999, 12, 31)
        );
    }

    #[test]
    fn test_normalize_date_leap_year() {
        assert_eq!(
            normalize_date(Some("2020-02-29")),
            NaiveDate::from_ymd_opt(2020, 2, 29)
        );
        // 2020-02-30 does not exist
        assert_eq!(normalize_date(Some("2020-02-30")), None);
    }

    #[test]
    fn test_normalize_date_none_passthrough() {
        assert_eq!(normalize_date(None), None);
    }

    #[test]
    fn test_normalize_date_invalid() {
        for input in [
            "",
            "not a date",
            "2020-13-01",
            "2020-00-10",
            "01-01-2020",
            "2020/01/01",
            "2020-01-01 extra",
        ] {
            assert_eq!(normalize_date(Some(input)), None, "input: {input:?}");
        }
    }

    #[test]
    fn test_normalize_time_without_seconds() {
        let time = normalize_time(Some("10:00")).unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (10, 0, 0));
    }

    #[test]
    fn test_normalize_time_with_seconds() {
        let time = normalize_time(Some("23:59:59")).unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (23, 59, 59));
    }

    #[test]
    fn test_normalize_time_none_passthrough() {
        assert_eq!(normalize_time(None), None);
    }

    #[test]
    fn test_normalize_time_invalid() {
        for input in ["", "not a time", "24:00", "12:60", "12-34", "99:99"] {
            assert_eq!(normalize_time(Some(input)), None, "input: {input:?}");
        }
    }
}
