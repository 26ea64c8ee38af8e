//! DateTime parsing utilities with a fixed fallback order.
//!
//! Text is tried as an internet date-time (RFC 3339) with fractional
//! seconds, then without, then in the medium calendar format
//! `"MMM d, yyyy"`. The first format that matches wins.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::error::DateParseError;

/// chrono pattern for the medium calendar format, e.g. `"Jan 5, 2024"`.
pub const MEDIUM_DATE_FORMAT: &str = "%b %d, %Y";

/// Parses text into an instant, trying each supported format in order.
///
/// # Examples
///
/// ```
/// use base_type_extensions::as_date;
/// use chrono::Datelike;
///
/// let dt = as_date("2024-01-15T10:30:00.250Z").unwrap();
/// assert_eq!(dt.year(), 2024);
///
/// let dt = as_date("Mar 7, 2023").unwrap();
/// assert_eq!(dt.day(), 7);
///
/// assert!(as_date("next tuesday").is_none());
/// ```
pub fn as_date(s: &str) -> Option<DateTime<Utc>> {
    if let Some(dt) = parse_internet_date_time_fractional(s) {
        return Some(dt);
    }
    if let Some(dt) = parse_internet_date_time(s) {
        return Some(dt);
    }
    tracing::debug!(input = s, "internet date-time parse failed, trying medium format");
    parse_medium_date(s)
}

/// Like [`as_date`], but reports why nothing matched.
///
/// # Errors
///
/// Returns [`DateParseError::Empty`] for an empty string and
/// [`DateParseError::Unrecognized`] when no supported format matches.
pub fn parse_date(s: &str) -> Result<DateTime<Utc>, DateParseError> {
    if s.is_empty() {
        return Err(DateParseError::Empty);
    }
    as_date(s).ok_or_else(|| DateParseError::unrecognized(s))
}

/// Parses a strict internet date-time that carries fractional seconds,
/// e.g. `"2024-01-15T10:30:00.123Z"`.
pub fn parse_internet_date_time_fractional(s: &str) -> Option<DateTime<Utc>> {
    if !has_fractional_seconds(s) {
        return None;
    }
    parse_rfc3339(s)
}

/// Parses a strict internet date-time without fractional seconds,
/// e.g. `"2024-01-15T10:30:00+05:00"`.
pub fn parse_internet_date_time(s: &str) -> Option<DateTime<Utc>> {
    if has_fractional_seconds(s) {
        return None;
    }
    parse_rfc3339(s)
}

/// Parses the medium calendar format, e.g. `"Jan 5, 2024"`, as midnight UTC.
pub fn parse_medium_date(s: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(s.trim(), MEDIUM_DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Formats an instant as a strict internet date-time in UTC, with
/// millisecond fractional seconds when `fractional` is set.
pub fn format_internet_date_time(dt: &DateTime<Utc>, fractional: bool) -> String {
    let precision = if fractional {
        SecondsFormat::Millis
    } else {
        SecondsFormat::Secs
    };
    dt.to_rfc3339_opts(precision, true)
}

fn parse_rfc3339(s: &str) -> Option<DateTime<Utc>> {
    // chrono also accepts ' ' and 't' here; the internet date-time form
    // requires 'T'.
    if s.as_bytes().get(10) != Some(&b'T') {
        return None;
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// `YYYY-MM-DD` is ten bytes; any `.` after it belongs to the seconds.
fn has_fractional_seconds(s: &str) -> bool {
    s.get(10..).is_some_and(|time| time.contains('.'))
}

/// Conversion of a receiver into an instant.
pub trait DateExt {
    fn as_date(&self) -> Option<DateTime<Utc>>;
}

impl DateExt for str {
    fn as_date(&self) -> Option<DateTime<Utc>> {
        as_date(self)
    }
}

impl DateExt for String {
    fn as_date(&self) -> Option<DateTime<Utc>> {
        as_date(self)
    }
}

/// Unix epoch seconds. Out-of-range values yield `None`.
impl DateExt for i64 {
    fn as_date(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(*self, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_fractional_format_parses() {
        let dt = parse_internet_date_time_fractional("2024-01-15T10:30:00.123Z").unwrap();
        assert_eq!(dt.timestamp_subsec_millis(), 123);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_fractional_format_rejects_whole_seconds() {
        assert!(parse_internet_date_time_fractional("2024-01-15T10:30:00Z").is_none());
    }

    #[test]
    fn test_plain_format_rejects_fractional_seconds() {
        assert!(parse_internet_date_time("2024-01-15T10:30:00.5Z").is_none());
        assert!(parse_internet_date_time("2024-01-15T10:30:00Z").is_some());
    }

    #[test]
    fn test_internet_date_time_requires_uppercase_t() {
        assert!(as_date("2024-01-15 10:30:00Z").is_none());
        assert!(as_date("2024-01-15t10:30:00Z").is_none());
        assert!(as_date("2024-01-15 10:30:00.250Z").is_none());
        assert_eq!(
            parse_date("2024-01-15 10:30:00Z"),
            Err(DateParseError::Unrecognized("2024-01-15 10:30:00Z".to_string()))
        );
        assert!(as_date("2024-01-15T10:30:00Z").is_some());
    }

    #[test]
    fn test_offset_is_converted_to_utc() {
        let dt = as_date("2024-01-15T10:30:00+05:00").unwrap();
        assert_eq!(dt.hour(), 5);
    }

    #[test]
    fn test_medium_format() {
        let dt = parse_medium_date("Jan 5, 2024").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap());

        let dt = as_date("Dec 25, 2023").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2023, 12, 25));
    }

    #[test]
    fn test_medium_format_invalid_day() {
        assert!(parse_medium_date("Feb 30, 2024").is_none());
    }

    #[test]
    fn test_unrecognized_is_none() {
        assert!(as_date("").is_none());
        assert!(as_date("2024-01-15").is_none());
        assert!(as_date("15/01/2024").is_none());
    }

    #[test]
    fn test_parse_date_errors() {
        assert_eq!(parse_date(""), Err(DateParseError::Empty));
        assert_eq!(
            parse_date("soon"),
            Err(DateParseError::Unrecognized("soon".to_string()))
        );
        assert!(parse_date("Jan 1, 2000").is_ok());
    }

    #[test]
    fn test_round_trip_through_strict_format() {
        let instants = [
            Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap(),
            Utc.timestamp_millis_opt(1_700_000_000_456).unwrap(),
        ];
        for instant in instants {
            let text = format_internet_date_time(&instant, true);
            assert_eq!(as_date(&text), Some(instant));
        }
        let whole = Utc.with_ymd_and_hms(2020, 2, 29, 12, 0, 0).unwrap();
        let text = format_internet_date_time(&whole, false);
        assert_eq!(text, "2020-02-29T12:00:00Z");
        assert_eq!(text.as_date(), Some(whole));
    }

    #[test]
    fn test_epoch_seconds() {
        assert_eq!(0_i64.as_date(), Some(Utc.timestamp_opt(0, 0).unwrap()));
        let dt = 1_705_314_600_i64.as_date().unwrap();
        assert_eq!(format_internet_date_time(&dt, false), "2024-01-15T10:30:00Z");
        assert!(i64::MAX.as_date().is_none());
    }
}
