//! Calendar-day arithmetic shared by scheduling and status evaluation.

use jiff::{civil::Date, ToSpan};

/// Largest day offset `jiff` can represent in a single span.
const MAX_SPAN_DAYS: u64 = 7_304_484;

/// Number of calendar days from `start` to `end`, counting both ends.
///
/// Returns 1 when the dates are equal, and zero or a negative number when `end`
/// falls before `start`.
pub fn inclusive_day_count(start: Date, end: Date) -> i64 {
    i64::from((end - start).get_days()) + 1
}

/// Calendar date of a 1-based plan day.
pub fn date_for_day(start: Date, day: u32) -> Option<Date> {
    offset(start, i64::from(day) - 1)
}

/// `date` shifted by `days`, or `None` when the result is out of range.
pub fn offset(date: Date, days: i64) -> Option<Date> {
    if days.unsigned_abs() > MAX_SPAN_DAYS {
        return None;
    }
    date.checked_add(days.days()).ok()
}

/// `date` shifted forward by `days`, saturating at [`Date::MAX`].
pub fn saturating_offset(date: Date, days: i64) -> Date {
    offset(date, days).unwrap_or(Date::MAX)
}
