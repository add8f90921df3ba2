//! Typed comparison values.
//!
//! A row rule's value is inferred from its text by trying, in order, a
//! number, a date/time and finally falling back to a plain string. Cells are
//! coerced with the same parsers at evaluation time.

use std::cmp::Ordering;
use std::fmt;

use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date/time layouts tried after RFC 3339 and RFC 2822.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%Y%m%d %H:%M:%S",
    "%Y%m%dT%H%M%S",
    "%d %b %Y %H:%M:%S",
    "%b %d %Y %H:%M:%S",
    "%Y-%m-%d %I:%M:%S %p",
    "%Y-%m-%d %I:%M %p",
    "%Y/%m/%d %I:%M %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%d/%m/%Y %I:%M %p",
    "%b %d %Y %I:%M %p",
    "%B %d %Y %I:%M %p",
    "%d %b %Y %I:%M %p",
];

/// 12-hour layouts without minutes (`4pm`); the minute is zero.
const HOUR_FORMATS: &[&str] = &[
    "%Y-%m-%d %I %p",
    "%Y/%m/%d %I %p",
    "%m/%d/%Y %I %p",
    "%d/%m/%Y %I %p",
    "%b %d %Y %I %p",
];

/// Date-only layouts; the time is midnight.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%Y%m%d",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

/// The kind of a [`TypedValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    Date,
    String,
}

impl ValueKind {
    /// Returns the display name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Number => "number",
            ValueKind::Date => "date",
            ValueKind::String => "string",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seconds since the Unix epoch.
///
/// Timestamps without an explicit offset are read as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Returns the timestamp as seconds since the Unix epoch.
    pub fn as_secs(self) -> i64 {
        self.0
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Timestamp(secs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::from_timestamp(self.0, 0) {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            None => write!(f, "{}", self.0),
        }
    }
}

/// A rule value tagged with its inferred type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Number(f64),
    Date(Timestamp),
    String(String),
}

impl TypedValue {
    /// Infers the value type of `text`: number, then date, then string.
    pub fn infer(text: &str) -> TypedValue {
        if let Some(n) = parse_number(text) {
            return TypedValue::Number(n);
        }
        if let Some(ts) = parse_datetime(text) {
            return TypedValue::Date(ts);
        }
        TypedValue::String(text.to_string())
    }

    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            TypedValue::Number(_) => ValueKind::Number,
            TypedValue::Date(_) => ValueKind::Date,
            TypedValue::String(_) => ValueKind::String,
        }
    }

    /// Compares this value (the threshold) against a raw cell, coercing the
    /// cell to this value's kind.
    ///
    /// Returns `Err(())` when the cell cannot be coerced, `Ok(None)` when the
    /// two values are unordered (NaN).
    pub(crate) fn compare_cell(&self, cell: &str) -> Result<Option<Ordering>, ()> {
        match self {
            TypedValue::Number(threshold) => {
                let cell = parse_number(cell).ok_or(())?;
                Ok(threshold.partial_cmp(&cell))
            }
            TypedValue::Date(threshold) => {
                let cell = parse_datetime(cell).ok_or(())?;
                Ok(Some(threshold.cmp(&cell)))
            }
            TypedValue::String(threshold) => Ok(Some(threshold.as_str().cmp(cell))),
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Number(n) => write!(f, "{}", n),
            TypedValue::Date(ts) => write!(f, "{}", ts),
            TypedValue::String(s) => f.write_str(s),
        }
    }
}

/// Parses a decimal number, ignoring surrounding whitespace.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Parses a date/time in one of the supported layouts.
///
/// RFC 3339 and RFC 2822 strings keep their offset; every other layout is
/// read as UTC. Date-only layouts resolve to midnight.
///
/// ```
/// use dyntable_filter::{parse_datetime, Timestamp};
///
/// assert_eq!(parse_datetime("1970-01-02"), Some(Timestamp(86_400)));
/// assert_eq!(parse_datetime("1970-01-01 01:00:00"), Some(Timestamp(3_600)));
/// assert_eq!(parse_datetime("not a date"), None);
/// ```
pub fn parse_datetime(text: &str) -> Option<Timestamp> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(Timestamp(dt.timestamp()));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(Timestamp(dt.timestamp()));
    }

    let naive = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| HOUR_FORMATS.iter().find_map(|fmt| parse_on_the_hour(text, fmt)))
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    Some(Timestamp(naive.and_utc().timestamp()))
}

fn parse_on_the_hour(text: &str, fmt: &str) -> Option<NaiveDateTime> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, text, StrftimeItems::new(fmt)).ok()?;
    parsed.set_minute(0).ok()?;
    parsed.to_naive_datetime_with_offset(0).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_number_first() {
        assert_eq!(TypedValue::infer("42"), TypedValue::Number(42.0));
        assert_eq!(TypedValue::infer("-1.5"), TypedValue::Number(-1.5));
        assert_eq!(TypedValue::infer(" 7 "), TypedValue::Number(7.0));
    }

    #[test]
    fn infer_date_second() {
        let value = TypedValue::infer("2014-07-30 12:00:00");
        assert_eq!(value.kind(), ValueKind::Date);
        assert_eq!(value, TypedValue::Date(Timestamp(1_406_721_600)));
    }

    #[test]
    fn infer_string_fallback() {
        assert_eq!(
            TypedValue::infer("Active"),
            TypedValue::String("Active".to_string())
        );
        assert_eq!(TypedValue::infer(""), TypedValue::String(String::new()));
    }

    #[test]
    fn datetime_layouts() {
        let noon = Some(Timestamp(1_406_721_600));
        assert_eq!(parse_datetime("2014-07-30 12:00:00"), noon);
        assert_eq!(parse_datetime("2014-07-30T12:00:00"), noon);
        assert_eq!(parse_datetime("2014-07-30 12:00"), noon);
        assert_eq!(parse_datetime("2014/07/30 12:00:00"), noon);
        assert_eq!(parse_datetime("07/30/2014 12:00:00"), noon);
        assert_eq!(parse_datetime("2014-07-30T12:00:00Z"), noon);
        assert_eq!(parse_datetime("2014-07-30T14:00:00+02:00"), noon);
    }

    #[test]
    fn twelve_hour_and_day_first_layouts() {
        let four_pm = Some(Timestamp(1_406_736_000));
        assert_eq!(parse_datetime("2014-07-30 4pm"), four_pm);
        assert_eq!(parse_datetime("2014-07-30 4:00 PM"), four_pm);
        assert_eq!(parse_datetime("Jul 30 2014 4:00PM"), four_pm);
        assert_eq!(parse_datetime("07/30/2014 04:00:00 pm"), four_pm);
        assert_eq!(parse_datetime("2014-07-30 12am"), Some(Timestamp(1_406_678_400)));

        assert_eq!(parse_datetime("30/07/2014"), Some(Timestamp(1_406_678_400)));
        assert_eq!(parse_datetime("30/07/2014 16:00"), four_pm);
        // Month first wins when both readings are valid.
        assert_eq!(parse_datetime("07/08/2014"), parse_datetime("2014-07-08"));
    }

    #[test]
    fn date_only_is_midnight() {
        assert_eq!(parse_datetime("2014-07-30"), Some(Timestamp(1_406_678_400)));
        assert_eq!(parse_datetime("30 Jul 2014"), Some(Timestamp(1_406_678_400)));
    }

    #[test]
    fn garbage_is_not_a_date() {
        assert_eq!(parse_datetime("abc"), None);
        assert_eq!(parse_datetime(""), None);
        assert_eq!(parse_datetime("2014-13-45"), None);
    }

    #[test]
    fn compare_cell_coerces_to_threshold_kind() {
        let number = TypedValue::Number(10.0);
        assert_eq!(number.compare_cell("12"), Ok(Some(Ordering::Less)));
        assert_eq!(number.compare_cell("ten"), Err(()));

        let date = TypedValue::infer("2014-07-30 12:00:00");
        assert_eq!(
            date.compare_cell("2014-07-30 16:00:00"),
            Ok(Some(Ordering::Less))
        );
        assert_eq!(date.compare_cell("abc"), Err(()));
    }

    #[test]
    fn nan_is_unordered() {
        let number = TypedValue::Number(1.0);
        assert_eq!(number.compare_cell("NaN"), Ok(None));
    }

    #[test]
    fn timestamp_display_round_trips() {
        let ts = Timestamp(1_406_721_600);
        assert_eq!(ts.to_string(), "2014-07-30 12:00:00");
        assert_eq!(parse_datetime(&ts.to_string()), Some(ts));
    }
}
