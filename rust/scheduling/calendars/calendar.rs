use chrono::prelude::*;

/// Create a `NaiveDateTime` with default null time.
///
/// Panics if date values are invalid.
pub fn ndt(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("`year`, `month` `day` are invalid.")
        .and_time(NaiveTime::MIN)
}

/// Strip the time-of-day from a date, leaving the calendar date at midnight.
pub(crate) fn midnight(date: &NaiveDateTime) -> NaiveDateTime {
    date.date().and_time(NaiveTime::MIN)
}
