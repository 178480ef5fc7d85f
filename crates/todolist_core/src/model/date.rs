//! Calendar date value type.
//!
//! # Responsibility
//! - Hold a validated `(month, day, year)` triple.
//! - Expose chronological ordering, day arithmetic and text rendering.
//!
//! # Invariants
//! - Every `Date` satisfies `rules::is_valid_date`; there is no unchecked
//!   constructor and no mutator.
//! - `Ord` agrees exactly with `day_count::encode`.
//! - Deserialized dates are re-validated.

use crate::calendar::day_count;
use crate::calendar::rules::is_valid_date;
use crate::calendar::CalendarError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Field ordering used when rendering or parsing date text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DateFormat {
    /// `month/day/year`.
    #[default]
    Mdy,
    /// `day/month/year`.
    Dmy,
    /// `year/month/day`.
    Ymd,
}

impl DateFormat {
    /// Every supported ordering, in settings-menu order.
    pub const ALL: [DateFormat; 3] = [DateFormat::Mdy, DateFormat::Dmy, DateFormat::Ymd];

    /// Human-readable label, e.g. `MONTH/DAY/YEAR`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mdy => "MONTH/DAY/YEAR",
            Self::Dmy => "DAY/MONTH/YEAR",
            Self::Ymd => "YEAR/MONTH/DAY",
        }
    }

    /// Short code, e.g. `MDY`.
    pub fn code(self) -> &'static str {
        match self {
            Self::Mdy => "MDY",
            Self::Dmy => "DMY",
            Self::Ymd => "YMD",
        }
    }
}

impl Display for DateFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for unrecognized date format names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDateFormat(pub String);

impl Display for UnknownDateFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown date format `{}`; expected MDY|DMY|YMD",
            self.0
        )
    }
}

impl std::error::Error for UnknownDateFormat {}

impl FromStr for DateFormat {
    type Err = UnknownDateFormat;

    /// Accepts the short code or the label, case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|format| normalized == format.code() || normalized == format.label())
            .ok_or_else(|| UnknownDateFormat(value.to_string()))
    }
}

/// Immutable proleptic Gregorian calendar date.
///
/// Field order (year, month, day) drives the derived chronological ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "DateRecord", into = "DateRecord")]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl Date {
    /// Earliest representable date.
    pub const MIN: Date = Date {
        year: i32::MIN,
        month: 1,
        day: 1,
    };

    /// Latest representable date.
    pub const MAX: Date = Date {
        year: i32::MAX,
        month: 12,
        day: 31,
    };

    /// Creates a date from month (1 = January), day of month and year.
    ///
    /// # Errors
    /// - `CalendarError::InvalidDate` when the triple is not on the calendar.
    ///
    /// ```
    /// # use todolist_core::Date;
    /// assert!(Date::new(2, 29, 2024).is_ok());
    /// assert!(Date::new(2, 30, 2000).is_err());
    /// ```
    pub fn new(month: i32, day: i32, year: i32) -> Result<Self, CalendarError> {
        if !is_valid_date(month, day, year) {
            return Err(CalendarError::InvalidDate { month, day, year });
        }
        // Validity bounds month to 1..=12 and day to 1..=31.
        Ok(Self {
            year,
            month: month as u8,
            day: day as u8,
        })
    }

    /// Month, 1 = January through 12 = December.
    pub fn month(self) -> u8 {
        self.month
    }

    /// Day of month.
    pub fn day(self) -> u8 {
        self.day
    }

    pub fn year(self) -> i32 {
        self.year
    }

    /// Days elapsed since January 1 of year 0.
    pub fn day_count(self) -> i64 {
        day_count::encode(self)
    }

    /// Inverse of [`Date::day_count`]; `None` outside the `i32` year range.
    pub fn from_day_count(count: i64) -> Option<Self> {
        day_count::decode(count)
    }

    /// Absolute number of days between `self` and `other`.
    pub fn days_between(self, other: Date) -> i64 {
        day_count::days_between(self, other)
    }

    /// Moves the date by `days` (negative moves backwards).
    ///
    /// Returns `None` if the result leaves the representable year range.
    pub fn shift_by_days(self, days: i64) -> Option<Self> {
        self.day_count()
            .checked_add(days)
            .and_then(day_count::decode)
    }

    pub fn next_day(self) -> Option<Self> {
        self.shift_by_days(1)
    }

    pub fn previous_day(self) -> Option<Self> {
        self.shift_by_days(-1)
    }

    /// Renders the date with `/` separators in the requested field order.
    ///
    /// Fields are not zero padded: `3/1/2024`.
    pub fn to_text(self, format: DateFormat) -> String {
        match format {
            DateFormat::Dmy => format!("{}/{}/{}", self.day, self.month, self.year),
            DateFormat::Mdy => format!("{}/{}/{}", self.month, self.day, self.year),
            DateFormat::Ymd => format!("{}/{}/{}", self.year, self.month, self.day),
        }
    }
}

/// Diagnostic rendering; use [`Date::to_text`] for user-facing text.
impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Day {}; Month {}; Year {}", self.day, self.month, self.year)
    }
}

/// Wire shape for `Date`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct DateRecord {
    month: i32,
    day: i32,
    year: i32,
}

impl TryFrom<DateRecord> for Date {
    type Error = CalendarError;

    fn try_from(record: DateRecord) -> Result<Self, Self::Error> {
        Date::new(record.month, record.day, record.year)
    }
}

impl From<Date> for DateRecord {
    fn from(date: Date) -> Self {
        Self {
            month: i32::from(date.month),
            day: i32::from(date.day),
            year: date.year,
        }
    }
}
