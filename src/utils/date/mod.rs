// Date utility functions
// Week and minute arithmetic shared by the calendar grid

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc. Values above 6 wrap.
///
/// Returns `None` when the week start would precede `NaiveDate::MIN`.
pub fn checked_week_start(date: NaiveDate, first_day_of_week: u8) -> Option<NaiveDate> {
    let weekday = date.weekday().num_days_from_sunday() as u64;
    let first = (first_day_of_week % 7) as u64;
    let offset = (weekday + 7 - first) % 7;
    date.checked_sub_days(Days::new(offset))
}

/// Saturating variant of [`checked_week_start`].
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    checked_week_start(date, first_day_of_week).unwrap_or(NaiveDate::MIN)
}

pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Drop seconds and sub-second precision.
pub fn truncate_to_minute(value: NaiveDateTime) -> NaiveDateTime {
    let time = value.time();
    let minute = NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(NaiveTime::MIN);
    value.date().and_time(minute)
}
