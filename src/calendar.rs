use serde::Serialize;

use crate::{CALENDAR_CELLS, CalendarDate, DAYS_PER_WEEK, MonthKey, prelude::*};

#[allow(clippy::cast_possible_truncation)]
const GRID_CELLS: u8 = CALENDAR_CELLS as u8;
const _: () = assert!(GRID_CELLS as usize == CALENDAR_CELLS);

/// A month view: exactly [`CALENDAR_CELLS`] days, six weeks of seven,
/// Sunday first.
///
/// Cells are chronological: the tail of the previous month, every day of
/// the queried month, then the head of the next month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Serialize)]
pub struct CalendarGrid {
    month: MonthKey,
    #[deref]
    cells: Vec<CalendarDate>,
}

impl CalendarGrid {
    /// The month this grid was built for
    pub const fn month(&self) -> MonthKey {
        self.month
    }

    pub fn cells(&self) -> &[CalendarDate] {
        &self.cells
    }

    /// The grid's rows, seven cells each
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDate]> {
        self.cells.chunks_exact(DAYS_PER_WEEK)
    }

    /// Whether `date` belongs to the queried month rather than a neighbour
    pub fn in_month(&self, date: &CalendarDate) -> bool {
        date.month_key() == self.month
    }

    pub fn into_cells(self) -> Vec<CalendarDate> {
        self.cells
    }
}

impl IntoIterator for CalendarGrid {
    type Item = CalendarDate;
    type IntoIter = std::vec::IntoIter<CalendarDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

/// Builds the six-week month view for `month`.
///
/// Days in February follow [`crate::is_leap_year`], so February 1900 has 29
/// cells of its own here.
pub fn calendar_view_month(month: MonthKey) -> CalendarGrid {
    let month_days = month.days();
    let days_from_previous = month.first_weekday().number() - 1;
    let days_from_next = GRID_CELLS - (days_from_previous + month_days);

    let previous = month.previous();
    let next = month.next();
    let previous_days = previous.days();

    log::trace!(
        "calendar view {month}: {days_from_previous} leading, {month_days} current, {days_from_next} trailing"
    );

    let mut cells = Vec::with_capacity(CALENDAR_CELLS);
    cells.extend(
        (previous_days - days_from_previous + 1..=previous_days)
            .map(|day| CalendarDate::from_key(previous, day)),
    );
    cells.extend((1..=month_days).map(|day| CalendarDate::from_key(month, day)));
    cells.extend((1..=days_from_next).map(|day| CalendarDate::from_key(next, day)));
    debug_assert_eq!(cells.len(), CALENDAR_CELLS);

    CalendarGrid { month, cells }
}

/// Years `center - radius ..= center + radius`, ascending, for a year picker.
///
/// `2 * radius + 1` entries, fewer only when a bound saturates at the ends of `i32`.
pub fn calendar_view_years(center: i32, radius: u32) -> Vec<i32> {
    let radius = i32::try_from(radius).unwrap_or(i32::MAX);
    (center.saturating_sub(radius)..=center.saturating_add(radius)).collect()
}
