//! Date formatting for tables and conversion to/from `<input>` values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

const INPUT_DATETIME: &str = "%Y-%m-%dT%H:%M";

/// `15.03.2024 14:02`
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

/// `15.03.2024`
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y").to_string()
}

pub fn format_datetime_opt(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(format_datetime).unwrap_or_else(|| "—".to_string())
}

/// Value for `<input type="date">`.
pub fn to_input_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Empty or malformed input clears the filter.
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Value for `<input type="datetime-local">`, in UTC.
pub fn to_input_datetime(dt: &DateTime<Utc>) -> String {
    dt.format(INPUT_DATETIME).to_string()
}

pub fn parse_input_datetime(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value.trim(), INPUT_DATETIME)
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap()
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime(&sample()), "15.03.2024 14:02");
        assert_eq!(format_date(&sample()), "15.03.2024");
        assert_eq!(format_datetime_opt(None), "—");
    }

    #[test]
    fn test_input_date() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 9);
        assert_eq!(to_input_date(d), "2025-01-09");
        assert_eq!(to_input_date(None), "");
        assert_eq!(parse_input_date("2025-01-09"), d);
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("09.01.2025"), None);
    }

    #[test]
    fn test_input_datetime() {
        assert_eq!(to_input_datetime(&sample()), "2024-03-15T14:02");
        assert_eq!(
            parse_input_datetime("2024-03-15T14:02"),
            Some(Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 0).unwrap())
        );
        assert_eq!(parse_input_datetime("invalid"), None);
    }
}
