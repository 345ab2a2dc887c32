//! Gregorian calendar helpers
//!
//! `chrono` reports an impossible date as `None`. Callers that surface the
//! failure to a person need to know *why* the date was rejected, so
//! [`calendar_date`] distinguishes a bad month from a bad day.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Reasons a (year, month, day) triple is not a calendar date
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("month must be in 1..12")]
    MonthOutOfRange,

    #[error("day is out of range for month")]
    DayOutOfRange,
}

/// Builds a calendar date, leap years included
///
/// # Errors
///
/// * `CalendarError::MonthOutOfRange` - month is 0 or greater than 12
/// * `CalendarError::DayOutOfRange` - day is 0 or past the end of the month
///
/// # Examples
///
/// ```rust
/// use core_kernel::calendar::{calendar_date, CalendarError};
///
/// assert!(calendar_date(2000, 2, 29).is_ok());
/// assert_eq!(calendar_date(1900, 2, 29), Err(CalendarError::DayOutOfRange));
/// assert_eq!(calendar_date(1998, 13, 1), Err(CalendarError::MonthOutOfRange));
/// ```
pub fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::MonthOutOfRange);
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::DayOutOfRange)
}

/// Whole years elapsed between `birth` and `today`
///
/// One year is subtracted when the birthday has not yet occurred in
/// `today`'s year. A birth date after `today` yields 0.
pub fn age_in_years(birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    u32::try_from(age).unwrap_or(0)
}
