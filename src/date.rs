use std::{
    str::FromStr,
    time::{SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};

use crate::{
    DATE_SEPARATOR, MIN_DAY, Month, MonthKey, ParseError, Weekday, prelude::*,
    types::{days_in_month, weekday_of},
};

const SECONDS_PER_DAY: u64 = 86_400;

/// One day of the calendar: a single cell of a month view.
///
/// Ordering is chronological. Formats as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year", "month.get()", "day")]
pub struct CalendarDate {
    year:  i32,
    month: Month,
    day:   u8,
}

impl CalendarDate {
    /// Creates a date, validating month and day.
    ///
    /// Any `i32` year is accepted, including the two years just outside the
    /// `MonthKey` range that a grid's neighbouring months can reach.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` or `ParseError::InvalidDay` when a
    /// component is out of range for the given year and month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        let month = Month::new(month)?;
        if day < MIN_DAY || day > days_in_month(year, month.get()) {
            return Err(ParseError::InvalidDay {
                year,
                month: month.get(),
                day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date whose day is already known to fit `key`.
    pub(crate) const fn from_key(key: MonthKey, day: u8) -> Self {
        Self {
            year: key.year,
            month: key.month,
            day,
        }
    }

    /// Today's date in UTC, read from the host clock
    pub fn today() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        #[allow(clippy::cast_possible_wrap)]
        let days = (secs / SECONDS_PER_DAY) as i64;
        civil_from_days(days)
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// The month this date falls in
    pub const fn month_key(&self) -> MonthKey {
        MonthKey {
            year:  self.year,
            month: self.month,
        }
    }

    pub fn weekday(&self) -> Weekday {
        weekday_of(self.year, self.month.get(), self.day)
    }

    /// ISO 8601 calendar date, `YYYY-MM-DD`
    pub fn iso(&self) -> String {
        self.to_string()
    }

    pub fn is_same_day(&self, other: &Self) -> bool {
        self == other
    }

    /// Same month of the same year
    pub fn is_same_month(&self, other: &Self) -> bool {
        self.month_key() == other.month_key()
    }

    /// Strictly earlier calendar day
    pub fn is_before_day(&self, other: &Self) -> bool {
        self < other
    }
}

/// Converts days since 1970-01-01 into a civil date (Howard Hinnant's algorithm).
fn civil_from_days(days: i64) -> CalendarDate {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (year, month, day) = (year as i32, month as u8, day as u8);
    CalendarDate {
        year,
        month: Month::wrapping(month),
        day,
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`, the form `Display` writes.
    ///
    /// The year is an optional `-` followed by digits, at least four
    /// characters in all (`0987`, `-001`, `10000`). Month and day are exactly
    /// two digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // Split from the right so a leading minus stays with the year.
        let parts: Vec<&str> = trimmed.rsplitn(3, DATE_SEPARATOR).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD: {trimmed}"
            )));
        };

        let year = parse_year(year)?;
        let month = parse_digits(month, 2)?;
        let day = parse_digits(day, 2)?;

        #[allow(clippy::cast_possible_truncation)]
        let (month, day) = (month as u8, day as u8);
        Self::new(year, month, day)
    }
}

/// Parses a signed year of at least four characters.
fn parse_year(s: &str) -> Result<i32, ParseError> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if s.len() < 4 || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    s.parse::<i32>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Parses a fixed-width run of ASCII digits.
fn parse_digits(s: &str, width: usize) -> Result<u32, ParseError> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    s.parse::<u32>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
