use crate::consts::{
    CALENDAR_MONTHS, DAYS_IN_MONTH, DAYS_PER_WEEK, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP,
    JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_YEAR, WEEK_DAYS,
};
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Maps any value onto 1..=12, counting 13 as January again and 0 as December.
    pub(crate) const fn wrapping(value: u8) -> Self {
        let wrapped = ((value as u16 + 11) % 12) as u8 + 1;
        match NonZeroU8::new(wrapped) {
            Some(non_zero) => Self(non_zero),
            None => Self(NonZeroU8::MIN),
        }
    }

    /// Three-letter English abbreviation ("Jan" .. "Dec")
    pub const fn abbreviation(self) -> &'static str {
        CALENDAR_MONTHS[(self.get() - 1) as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Self; DAYS_PER_WEEK] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Zero-based index, 0 = Sunday .. 6 = Saturday
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// One-based number, 1 = Sunday .. 7 = Saturday
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Weekday for a zero-based index; wraps modulo 7.
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index as usize) % DAYS_PER_WEEK]
    }

    /// Two-letter abbreviation ("Su" .. "Sa")
    pub const fn abbreviation(self) -> &'static str {
        WEEK_DAYS[self.index() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Checks that `year` lies in `MIN_YEAR..=MAX_YEAR`.
pub(crate) fn check_year(year: i32) -> Result<i32, ParseError> {
    if year < MIN_YEAR || year > MAX_YEAR {
        return Err(ParseError::InvalidYear(year));
    }
    Ok(year)
}

/// Identifies one calendar month of one year.
///
/// Years are limited to `MIN_YEAR..=MAX_YEAR` so the neighbouring months of
/// every key exist; the month is validated by [`Month`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMonthKey")]
pub struct MonthKey {
    pub(crate) year:  i32,
    pub(crate) month: Month,
}

#[derive(Deserialize)]
struct RawMonthKey {
    year:  i32,
    month: u8,
}

impl TryFrom<RawMonthKey> for MonthKey {
    type Error = ParseError;

    fn try_from(raw: RawMonthKey) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month)
    }
}

impl MonthKey {
    /// Creates a month key, validating the year and month number.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if `year` is outside
    /// `MIN_YEAR..=MAX_YEAR`, or `ParseError::InvalidMonth` if `month` is
    /// outside 1..=12.
    pub fn new(year: i32, month: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  check_year(year)?,
            month: Month::new(month)?,
        })
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(self) -> Month {
        self.month
    }

    /// Number of days in this month
    pub const fn days(self) -> u8 {
        days_in_month(self.year, self.month.get())
    }

    /// Weekday of the first day of this month
    pub fn first_weekday(self) -> Weekday {
        first_weekday(self.year, self.month.get())
    }

    /// The month before this one, wrapping January into December of the previous year.
    ///
    /// From `MIN_YEAR` this reaches year `i32::MIN`; stepping back again saturates.
    pub fn previous(self) -> Self {
        let (year, month) = if self.month.get() == JANUARY {
            (self.year.saturating_sub(1), DECEMBER)
        } else {
            (self.year, self.month.get() - 1)
        };
        Self {
            year,
            month: Month::wrapping(month),
        }
    }

    /// The month after this one, wrapping December into January of the next year.
    ///
    /// From `MAX_YEAR` this reaches year `i32::MAX`; stepping on again saturates.
    pub fn next(self) -> Self {
        let (year, month) = if self.month.get() == DECEMBER {
            (self.year.saturating_add(1), JANUARY)
        } else {
            (self.year, self.month.get() + 1)
        };
        Self {
            year,
            month: Month::wrapping(month),
        }
    }

    /// Month key for the current UTC date
    pub fn current() -> Self {
        crate::CalendarDate::today().month_key()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month.get())
    }
}

// Helper functions

/// Leap years are the multiples of four.
///
/// This deliberately omits the Gregorian century correction: 1900 and 2100 are
/// leap years here. Month views built on this rule keep a stable shape for
/// callers that already render them.
pub const fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == 0
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Weekday of the first day of `month` in the proleptic Gregorian calendar.
pub fn first_weekday(year: i32, month: u8) -> Weekday {
    weekday_of(year, month, 1)
}

/// Sakamoto's method, with floored division so negative years work.
pub(crate) fn weekday_of(year: i32, month: u8, day: u8) -> Weekday {
    const OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

    debug_assert!(month != 0 && month <= MAX_MONTH);
    let y = i64::from(year) - i64::from(month < 3);
    let raw = y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        + OFFSETS[usize::from(month - 1) % 12]
        + i64::from(day);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = raw.rem_euclid(7) as u8;
    Weekday::from_index(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
        assert!(matches!(Month::new(255), Err(ParseError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_conversions() {
        let month: Month = 8.try_into().unwrap();
        assert_eq!(month.get(), 8);
        assert_eq!(u8::from(month), 8);
        assert_eq!(month.to_string(), "8");
        assert_eq!(month.abbreviation(), "Aug");
        assert!(Month::try_from(0).is_err());
    }

    #[test]
    fn test_month_wrapping() {
        assert_eq!(Month::wrapping(1).get(), 1);
        assert_eq!(Month::wrapping(12).get(), 12);
        assert_eq!(Month::wrapping(13).get(), 1);
        assert_eq!(Month::wrapping(0).get(), 12);
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);
        assert!(serde_json::from_str::<Month>("13").is_err());
    }

    #[test]
    fn test_weekday_numbering() {
        assert_eq!(Weekday::Sunday.number(), 1);
        assert_eq!(Weekday::Saturday.number(), 7);
        assert_eq!(Weekday::from_index(3), Weekday::Wednesday);
        assert_eq!(Weekday::from_index(7), Weekday::Sunday);
        assert_eq!(Weekday::Friday.to_string(), "Fr");
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        i32,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
            TestCase {
                year:        1900,
                is_leap:     true,
                description: "century year, no correction applied",
            },
            TestCase {
                year:        2100,
                is_leap:     true,
                description: "century year, no correction applied",
            },
            TestCase {
                year:        -4,
                is_leap:     true,
                description: "negative multiple of 4",
            },
            TestCase {
                year:        -1,
                is_leap:     false,
                description: "negative non-multiple of 4",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12u8 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 29);
    }

    #[test]
    fn test_first_weekday_known_months() {
        assert_eq!(first_weekday(2024, 1), Weekday::Monday);
        assert_eq!(first_weekday(2024, 2), Weekday::Thursday);
        assert_eq!(first_weekday(2023, 10), Weekday::Sunday);
        assert_eq!(first_weekday(2000, 1), Weekday::Saturday);
        assert_eq!(first_weekday(1970, 1), Weekday::Thursday);
        assert_eq!(first_weekday(2026, 10), Weekday::Thursday);
    }

    #[test]
    fn test_weekday_of_negative_years_cycle() {
        // The Gregorian calendar repeats every 400 years.
        for month in 1..=12 {
            assert_eq!(weekday_of(-400, month, 1), weekday_of(0, month, 1));
            assert_eq!(weekday_of(-399, month, 15), weekday_of(1, month, 15));
        }
    }

    #[test]
    fn test_month_key_navigation() {
        let jan = MonthKey::new(2024, 1).unwrap();
        assert_eq!(jan.previous(), MonthKey::new(2023, 12).unwrap());
        assert_eq!(jan.next(), MonthKey::new(2024, 2).unwrap());

        let dec = MonthKey::new(2024, 12).unwrap();
        assert_eq!(dec.next(), MonthKey::new(2025, 1).unwrap());
        assert_eq!(dec.previous(), MonthKey::new(2024, 11).unwrap());
    }

    #[test]
    fn test_month_key_year_bounds() {
        assert!(matches!(MonthKey::new(i32::MAX, 12), Err(ParseError::InvalidYear(i32::MAX))));
        assert!(matches!(MonthKey::new(i32::MIN, 1), Err(ParseError::InvalidYear(i32::MIN))));

        let last = MonthKey::new(MAX_YEAR, 12).unwrap();
        assert!(last < last.next());
        assert_eq!(last.next().year(), i32::MAX);

        let first = MonthKey::new(MIN_YEAR, 1).unwrap();
        assert!(first.previous() < first);
        assert_eq!(first.previous().year(), i32::MIN);
    }

    #[test]
    fn test_month_key_deserialize_validates() {
        assert!(serde_json::from_str::<MonthKey>(r#"{"year":2024,"month":13}"#).is_err());
        let json = format!(r#"{{"year":{},"month":1}}"#, i32::MAX);
        assert!(serde_json::from_str::<MonthKey>(&json).is_err());
    }

    #[test]
    fn test_month_key_display_and_serde() {
        let key = MonthKey::new(2024, 3).unwrap();
        assert_eq!(key.to_string(), "2024-03");
        assert_eq!(key.days(), 31);

        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, r#"{"year":2024,"month":3}"#);
        let parsed: MonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, key);
    }
}
