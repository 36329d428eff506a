/// Number of week rows in a month view
pub const CALENDAR_WEEKS: usize = 6;

/// Number of day columns in a month view
pub const DAYS_PER_WEEK: usize = 7;

/// Total cells in a month view (always 42)
pub const CALENDAR_CELLS: usize = CALENDAR_WEEKS * DAYS_PER_WEEK;

/// Smallest accepted year, one above `i32::MIN` so the previous year exists
pub const MIN_YEAR: i32 = i32::MIN + 1;

/// Largest accepted year, one below `i32::MAX` so the next year exists
pub const MAX_YEAR: i32 = i32::MAX - 1;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days, adjusted by `is_leap_year`
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Every fourth year is a leap year. No century correction is applied.
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;

/// Weekday abbreviations, Sunday first
pub const WEEK_DAYS: [&str; DAYS_PER_WEEK] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Month abbreviations, January first
pub const CALENDAR_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Default year-picker radius around the centre year
pub const DEFAULT_YEAR_RADIUS: u32 = 12;

/// Default number of pages shown on each side of the current page
pub const DEFAULT_NEIGHBOURS: u32 = 2;
