//! Leap-year, month-length and validity rules.

use crate::calendar::CalendarError;

/// Returns `true` if `year` is a leap year under the proleptic Gregorian rule.
///
/// Year 0 and negative years follow the same rule (Euclidean remainder), so
/// `0`, `-4` and `-400` are leap years while `-100` is not.
pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
/// - `CalendarError::InvalidMonth` when `month` is outside `1..=12`.
pub fn days_in_month(month: i32, year: i32) -> Result<u8, CalendarError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(CalendarError::InvalidMonth { month }),
    }
}

/// Returns `true` when the triple names a real calendar day.
///
/// Total over all inputs; out-of-range months simply yield `false`.
pub fn is_valid_date(month: i32, day: i32, year: i32) -> bool {
    match days_in_month(month, year) {
        Ok(length) => (1..=i32::from(length)).contains(&day),
        Err(_) => false,
    }
}

/// Number of days in `year`.
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}
