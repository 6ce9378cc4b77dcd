use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// A date as it arrives from upstream document snapshots.
///
/// The source stores are not fully controlled, so the same field may hold a
/// timestamp map (`{seconds, nanoseconds}`, with or without the underscore
/// spelling), an epoch-millisecond number, or a string. Everything funnels
/// through [`normalize_date`] before any other code looks at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    Timestamp {
        #[serde(alias = "_seconds")]
        seconds: i64,
        #[serde(default, alias = "_nanoseconds")]
        nanoseconds: u32,
    },
    Millis(i64),
    Text(String),
}

impl From<&str> for DateValue {
    fn from(value: &str) -> Self {
        DateValue::Text(value.to_string())
    }
}

impl From<NaiveDate> for DateValue {
    fn from(value: NaiveDate) -> Self {
        DateValue::Text(format_date(value))
    }
}

/// Alternate string shapes accepted when the primary `YYYY-MM-DD` parse
/// does not apply. Lenient on purpose; upstream producers vary.
const FALLBACK_FORMATS: &[&str] = &["%m/%d/%Y", "%Y/%m/%d", "%d-%b-%Y"];

/// Collapses any supported date representation to a calendar date.
///
/// Timestamps resolve through UTC. Strings use only the text before a
/// literal `T` and are split on `-` into year/month/day, so a plain date
/// string can never shift by a day for readers west of UTC. Returns `None`
/// for anything unparseable; callers skip the record rather than fail.
pub fn normalize_date(value: &DateValue) -> Option<NaiveDate> {
    match value {
        DateValue::Timestamp {
            seconds,
            nanoseconds,
        } => DateTime::from_timestamp(*seconds, *nanoseconds).map(|dt| dt.date_naive()),
        DateValue::Millis(millis) => {
            DateTime::from_timestamp_millis(*millis).map(|dt| dt.date_naive())
        }
        DateValue::Text(text) => normalize_text(text),
    }
}

fn normalize_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let date_part = text.split('T').next().unwrap_or(text);
    let parts: Vec<&str> = date_part.split('-').collect();
    if parts.len() == 3 {
        if let (Ok(year), Ok(month), Ok(day)) = (
            parts[0].parse::<i32>(),
            parts[1].parse::<u32>(),
            parts[2].parse::<u32>(),
        ) {
            return NaiveDate::from_ymd_opt(year, month, day);
        }
    }
    FALLBACK_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}

/// Renders a calendar date as `YYYY-MM-DD`, the exact inverse of the
/// string parse path. Used for lookup keys and synthetic instance ids.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn plain_date_string_keeps_its_calendar_day() {
        let parsed = normalize_date(&DateValue::from("2025-03-01"));
        assert_eq!(parsed, Some(ymd(2025, 3, 1)));
    }

    #[test]
    fn iso_datetime_uses_only_the_date_portion() {
        let parsed = normalize_date(&DateValue::from("2025-03-01T23:59:59.000Z"));
        assert_eq!(parsed, Some(ymd(2025, 3, 1)));
    }

    #[test]
    fn timestamp_map_resolves_through_utc() {
        // 2025-06-15T00:30:00Z
        let value = DateValue::Timestamp {
            seconds: 1_749_947_400,
            nanoseconds: 0,
        };
        assert_eq!(normalize_date(&value), Some(ymd(2025, 6, 15)));
    }

    #[test]
    fn underscore_timestamp_spelling_deserializes() {
        let value: DateValue =
            serde_json::from_str(r#"{"_seconds": 1749947400, "_nanoseconds": 0}"#).unwrap();
        assert_eq!(normalize_date(&value), Some(ymd(2025, 6, 15)));
    }

    #[test]
    fn slash_format_falls_back_leniently() {
        let parsed = normalize_date(&DateValue::from("03/15/2025"));
        assert_eq!(parsed, Some(ymd(2025, 3, 15)));
    }

    #[test]
    fn garbage_yields_none_instead_of_panicking() {
        assert_eq!(normalize_date(&DateValue::from("not a date")), None);
        assert_eq!(normalize_date(&DateValue::from("")), None);
        assert_eq!(normalize_date(&DateValue::from("2025-13-40")), None);
    }

    #[test]
    fn format_is_inverse_of_parse() {
        let date = ymd(2025, 1, 9);
        let rendered = format_date(date);
        assert_eq!(rendered, "2025-01-09");
        assert_eq!(normalize_date(&DateValue::Text(rendered)), Some(date));
    }
}
