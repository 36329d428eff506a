//! Month-view calendar grids and pagination windows.
//!
//! Both builders are pure functions from small inputs to vectors: a
//! [`CalendarGrid`] of 42 days for a [`MonthKey`], and the list of
//! [`PageToken`]s a pager shows for a current page out of a total.
//!
//! ```
//! use calendar_paging::{MonthKey, PaginationOptions, calendar_view_month, pagination};
//!
//! let grid = calendar_view_month(MonthKey::new(2024, 2)?);
//! assert_eq!(grid.len(), 42);
//! assert_eq!(grid[0].iso(), "2024-01-28");
//!
//! let pages = pagination(5, 10, &PaginationOptions::default());
//! assert_eq!(pages.len(), 9);
//! # Ok::<(), calendar_paging::ParseError>(())
//! ```

mod calendar;
mod consts;
mod date;
mod pagination;
mod prelude;
mod types;

pub use calendar::{CalendarGrid, calendar_view_month, calendar_view_years};
pub use consts::*;
pub use date::CalendarDate;
pub use pagination::{
    PageToken, PaginationError, PaginationOptions, Sentinel, pagination, try_pagination,
};
pub use types::{Month, MonthKey, Weekday, days_in_month, first_weekday, is_leap_year};

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}..={})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Left-pads `value` with zeroes to `width` characters.
///
/// Longer values are returned unchanged: `zero_pad(8, 3)` is `"008"`,
/// `zero_pad(1234, 2)` is `"1234"`.
pub fn zero_pad(value: impl std::fmt::Display, width: usize) -> String {
    format!("{value:0>width$}")
}

/// Inclusive ascending sequence `from, from + step, ...` up to `to`.
///
/// Empty when `from > to` or `step` is zero.
pub fn step_range(from: i64, to: i64, step: u32) -> Vec<i64> {
    if step == 0 || from > to {
        return Vec::new();
    }
    let step = i64::from(step);
    let mut out = Vec::new();
    let mut i = from;
    while i <= to {
        out.push(i);
        match i.checked_add(step) {
            Some(next) => i = next,
            None => break,
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        assert_eq!(ParseError::InvalidMonth(13).to_string(), "Invalid month: 13 (must be 1-12)");
        assert_eq!(
            ParseError::InvalidDay {
                year:  2023,
                month: 2,
                day:   29,
            }
            .to_string(),
            "Invalid day 29 for month 2023-02"
        );
        assert_eq!(ParseError::InvalidFormat("x".into()).to_string(), "Invalid date format: x");
        assert_eq!(ParseError::EmptyInput.to_string(), "Empty date string");
        assert_eq!(
            ParseError::InvalidYear(i32::MAX).to_string(),
            format!("Invalid year: {} (must be {}..={})", i32::MAX, MIN_YEAR, MAX_YEAR)
        );
    }

    #[test]
    fn test_zero_pad() {
        assert_eq!(zero_pad(8, 2), "08");
        assert_eq!(zero_pad(8, 3), "008");
        assert_eq!(zero_pad(12, 2), "12");
        assert_eq!(zero_pad(1234, 2), "1234");
        assert_eq!(zero_pad("7", 2), "07");
    }

    #[test]
    fn test_step_range() {
        assert_eq!(step_range(1, 5, 1), vec![1, 2, 3, 4, 5]);
        assert_eq!(step_range(0, 10, 3), vec![0, 3, 6, 9]);
        assert_eq!(step_range(-2, 2, 2), vec![-2, 0, 2]);
        assert_eq!(step_range(3, 3, 1), vec![3]);
        assert!(step_range(5, 1, 1).is_empty());
        assert!(step_range(1, 5, 0).is_empty());
        assert_eq!(step_range(i64::MAX - 1, i64::MAX, 5), vec![i64::MAX - 1]);
    }

    #[test]
    fn test_tables() {
        assert_eq!(CALENDAR_CELLS, 42);
        assert_eq!(WEEK_DAYS[Weekday::Sunday.index() as usize], "Su");
        assert_eq!(CALENDAR_MONTHS[11], "Dec");
    }
}
