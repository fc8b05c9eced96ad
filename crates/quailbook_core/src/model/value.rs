//! Strict calendar date and clock time values.
//!
//! # Responsibility
//! - Parse and print `YYYY-MM-DD` dates and `HH:MM` times without loss.
//! - Derive local epoch-millisecond timestamps from a date and optional time.
//!
//! # Invariants
//! - A value prints back exactly the text form it was parsed from.
//! - Dates are never shifted into another timezone.

use chrono::{Datelike, Days, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));
static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").expect("valid time regex"));

/// Error returned when user or persisted text is not a valid value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueParseError {
    /// Text is not a real `YYYY-MM-DD` date.
    InvalidDate(String),
    /// Text is not a 24-hour `HH:MM` time.
    InvalidTime(String),
    /// Text does not name a variant of an enumerated field.
    UnknownVariant { field: &'static str, value: String },
}

impl Display for ValueParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(value) => write!(f, "invalid date `{value}`; expected YYYY-MM-DD"),
            Self::InvalidTime(value) => write!(f, "invalid time `{value}`; expected HH:MM"),
            Self::UnknownVariant { field, value } => write!(f, "unknown {field} `{value}`"),
        }
    }
}

impl Error for ValueParseError {}

/// Calendar day in zero-padded `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Builds a date from year, one-based month and day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn naive(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// One-based month.
    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns the date `days` calendar days earlier, saturating at the
    /// earliest representable date.
    pub fn days_before(self, days: u64) -> Self {
        Self(self.0.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN))
    }

    /// Long display form, e.g. `10 March 2024`.
    pub fn display_long(self) -> String {
        self.0.format("%-d %B %Y").to_string()
    }

    /// Short display form, e.g. `10 Mar`.
    pub fn display_short(self) -> String {
        self.0.format("%-d %b").to_string()
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for CalendarDate {
    type Err = ValueParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if !DATE_RE.is_match(value) {
            return Err(ValueParseError::InvalidDate(value.to_string()));
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ValueParseError::InvalidDate(value.to_string()))
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = ValueParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(value: CalendarDate) -> Self {
        value.to_string()
    }
}

/// Time of day in 24-hour `HH:MM` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn naive(self) -> NaiveTime {
        self.0
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for ClockTime {
    type Err = ValueParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ValueParseError::InvalidTime(value.to_string());
        let captures = TIME_RE.captures(value).ok_or_else(invalid)?;
        let hour = captures[1].parse::<u32>().map_err(|_| invalid())?;
        let minute = captures[2].parse::<u32>().map_err(|_| invalid())?;
        Self::from_hm(hour, minute).ok_or_else(invalid)
    }
}

/// Derives the epoch-millisecond instant of `date` at `time` in local time.
///
/// A missing time means local midnight. Wall-clock times skipped by a
/// daylight-saving jump resolve as if they were UTC.
pub fn derive_timestamp(date: CalendarDate, time: Option<ClockTime>) -> i64 {
    let naive: NaiveDateTime = date
        .naive()
        .and_time(time.map_or(NaiveTime::MIN, ClockTime::naive));
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map_or_else(|| naive.and_utc().timestamp_millis(), |local| local.timestamp_millis())
}

/// Serde adapter for optional times persisted as `""` when absent.
pub(crate) mod optional_time {
    use super::ClockTime;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<ClockTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(time) => serializer.collect_str(time),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ClockTime>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => text.parse().map(Some).map_err(D::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{derive_timestamp, CalendarDate, ClockTime, ValueParseError};
    use chrono::{Local, NaiveDate, TimeZone};

    #[test]
    fn date_parses_and_prints_zero_padded_form() {
        let date: CalendarDate = "2024-03-09".parse().unwrap();
        assert_eq!(date.to_string(), "2024-03-09");
        assert_eq!(date.month(), 3);
    }

    #[test]
    fn date_rejects_unpadded_and_impossible_values() {
        assert!(matches!(
            "2024-3-9".parse::<CalendarDate>(),
            Err(ValueParseError::InvalidDate(_))
        ));
        assert!("2024-02-30".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn time_accepts_only_24_hour_hh_mm() {
        assert_eq!("08:30".parse::<ClockTime>().unwrap().to_string(), "08:30");
        assert!("8:30".parse::<ClockTime>().is_err());
        assert!("24:00".parse::<ClockTime>().is_err());
        assert!("08:30:00".parse::<ClockTime>().is_err());
    }

    #[test]
    fn days_before_crosses_month_boundaries() {
        let date = CalendarDate::from_ymd(2024, 3, 2).unwrap();
        assert_eq!(date.days_before(3).to_string(), "2024-02-28");
    }

    #[test]
    fn timestamp_is_local_instant_of_date_and_time() {
        let date = CalendarDate::from_ymd(2024, 3, 10).unwrap();
        let time = ClockTime::from_hm(8, 30);
        let expected = Local
            .from_local_datetime(
                &NaiveDate::from_ymd_opt(2024, 3, 10)
                    .unwrap()
                    .and_hms_opt(8, 30, 0)
                    .unwrap(),
            )
            .earliest()
            .unwrap()
            .timestamp_millis();
        assert_eq!(derive_timestamp(date, time), expected);
    }

    #[test]
    fn missing_time_means_midnight() {
        let date = CalendarDate::from_ymd(2024, 3, 10).unwrap();
        let midnight = ClockTime::from_hm(0, 0);
        assert_eq!(derive_timestamp(date, None), derive_timestamp(date, midnight));
    }

    #[test]
    fn display_forms_are_human_readable() {
        let date = CalendarDate::from_ymd(2024, 3, 10).unwrap();
        assert_eq!(date.display_long(), "10 March 2024");
        assert_eq!(date.display_short(), "10 Mar");
    }
}
