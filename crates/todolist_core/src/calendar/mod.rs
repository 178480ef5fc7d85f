//! Proleptic Gregorian calendar arithmetic.
//!
//! # Responsibility
//! - Define the leap-year and month-length rules shared by every date path.
//! - Convert between `(month, day, year)` triples and a linear day count.
//!
//! # Invariants
//! - Rules apply uniformly to year 0 and negative years.
//! - `day_count::encode` and `day_count::decode` are exact inverses.
//! - Functions here are pure and never log.

pub mod day_count;
pub mod rules;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Precondition failures raised by calendar rules and date construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarError {
    /// Month outside `1..=12` passed to a rule that requires a real month.
    InvalidMonth { month: i32 },
    /// Triple does not name a day on the calendar.
    InvalidDate { month: i32, day: i32, year: i32 },
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth { month } => {
                write!(f, "month must be within 1..=12, got {month}")
            }
            Self::InvalidDate { month, day, year } => {
                write!(f, "invalid date: month {month}, day {day}, year {year}")
            }
        }
    }
}

impl Error for CalendarError {}
