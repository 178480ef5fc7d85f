//! Linear day-count codec.
//!
//! # Responsibility
//! - Map every valid `Date` to a unique `i64` day count and back.
//!
//! # Invariants
//! - Day 0 is January 1 of year 0; earlier days are negative.
//! - `decode(encode(d)) == Some(d)` for every valid `d`.
//! - `encode(decode(n)) == n` for every `n` between `encode(Date::MIN)` and
//!   `encode(Date::MAX)`.
//! - All divisions on signed values are floor (Euclidean) divisions.

use crate::calendar::rules::days_in_month;
use crate::model::date::Date;

/// Days in any 400 consecutive years.
pub const DAYS_PER_400_YEARS: i64 = 146_097;
/// Days in a 100-year block that does not contain a 400-multiple leap year.
pub const DAYS_PER_100_YEARS: i64 = 36_524;
/// Days in a 4-year block that contains one leap year.
pub const DAYS_PER_4_YEARS: i64 = 1_461;
/// Days in a common year.
pub const DAYS_PER_YEAR: i64 = 365;

/// Year 0 is a leap year; decoding aligns its blocks on January 1 of year 1.
const DAYS_IN_YEAR_ZERO: i64 = 366;

/// Encodes `date` as the number of days elapsed since January 1 of year 0.
///
/// ```
/// # use todolist_core::{day_count, Date};
/// let epoch = Date::new(1, 1, 0).unwrap();
/// assert_eq!(day_count::encode(epoch), 0);
/// let unix_epoch = Date::new(1, 1, 1970).unwrap();
/// assert_eq!(day_count::encode(unix_epoch), 719_528);
/// ```
pub fn encode(date: Date) -> i64 {
    let year = i64::from(date.year());
    let prior = year - 1;
    let whole_years =
        DAYS_PER_YEAR * year + prior.div_euclid(4) - prior.div_euclid(100) + prior.div_euclid(400);

    whole_years + days_before_month(date.month(), date.year()) + i64::from(date.day())
}

/// Decodes a day count produced by [`encode`].
///
/// Returns `None` only when the decoded year does not fit in `i32`.
///
/// ```
/// # use todolist_core::{day_count, Date};
/// assert_eq!(day_count::decode(0), Some(Date::new(1, 1, 0).unwrap()));
/// assert_eq!(day_count::decode(-1), Some(Date::new(12, 31, -1).unwrap()));
/// ```
pub fn decode(count: i64) -> Option<Date> {
    let since_year_one = count.checked_sub(DAYS_IN_YEAR_ZERO)?;

    let mut year = since_year_one.div_euclid(DAYS_PER_400_YEARS) * 400 + 1;
    let mut remaining = since_year_one.rem_euclid(DAYS_PER_400_YEARS);

    let centuries = remaining / DAYS_PER_100_YEARS;
    remaining %= DAYS_PER_100_YEARS;
    let quads = remaining / DAYS_PER_4_YEARS;
    remaining %= DAYS_PER_4_YEARS;
    let years = remaining / DAYS_PER_YEAR;
    remaining %= DAYS_PER_YEAR;

    year += centuries * 100 + quads * 4 + years;

    // A quotient of 4 only happens on the final (leap) day of a 400- or
    // 4-year block; the naive count has rolled one year too far.
    if centuries == 4 || years == 4 {
        let year = i32::try_from(year - 1).ok()?;
        return Date::new(12, 31, year).ok();
    }

    let year = i32::try_from(year).ok()?;
    month_and_day(remaining, year)
}

/// Absolute number of days between two dates. Symmetric and non-negative.
pub fn days_between(first: Date, second: Date) -> i64 {
    (encode(first) - encode(second)).abs()
}

fn days_before_month(month: u8, year: i32) -> i64 {
    (1..month)
        .map(|prior| days_in_month(i32::from(prior), year).map_or(0, i64::from))
        .sum()
}

fn month_and_day(day_of_year: i64, year: i32) -> Option<Date> {
    let mut remaining = day_of_year;
    for month in 1..=12 {
        let length = i64::from(days_in_month(month, year).ok()?);
        if remaining < length {
            let day = i32::try_from(remaining + 1).ok()?;
            return Date::new(month, day, year).ok();
        }
        remaining -= length;
    }
    None
}
