//! Free-form date text parsing.
//!
//! # Responsibility
//! - Turn user-typed text such as `3/1/2024` or `1-3-2024` into a `Date`.
//!
//! # Invariants
//! - Parsing never panics and never returns an error: bad input is `None`.
//! - `parse_default(&d.to_text(f), f) == Some(d)` for every valid `d`,
//!   negative years included.
//! - Exactly three integer fields; anything left over rejects the input.

use crate::model::date::{Date, DateFormat};
use once_cell::sync::Lazy;
use regex::Regex;

/// Separators used when the caller does not supply any.
pub const DEFAULT_SEPARATORS: [char; 2] = ['/', '-'];

// Plain digits, or comma-grouped thousands (`2,024`).
static INTEGER_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<sign>[+-]?)(?P<digits>[0-9]+|[0-9]{1,3}(?:,[0-9]{3})+)$")
        .expect("valid integer token regex")
});

/// Parses `text` in `format`, treating every char in `separators` as a field
/// break. An empty `separators` slice selects [`DEFAULT_SEPARATORS`].
///
/// A `-` or `+` separator that starts a field and is followed by a digit is
/// read as a sign, so `-44/7/4` parses as year -44 under `Ymd`.
///
/// ```
/// # use todolist_core::{parse, Date, DateFormat};
/// let parsed = parse("1.3.2024", DateFormat::Dmy, &['.']);
/// assert_eq!(parsed, Some(Date::new(3, 1, 2024).unwrap()));
/// assert_eq!(parse("31/02/2024", DateFormat::Dmy, &[]), None);
/// ```
pub fn parse(text: &str, format: DateFormat, separators: &[char]) -> Option<Date> {
    let separators = if separators.is_empty() {
        &DEFAULT_SEPARATORS[..]
    } else {
        separators
    };

    let normalized = replace_separators(text, separators);
    let mut tokens = normalized.split_whitespace();
    let first = parse_field(tokens.next()?)?;
    let second = parse_field(tokens.next()?)?;
    let third = parse_field(tokens.next()?)?;
    if tokens.next().is_some() {
        return None;
    }

    let (month, day, year) = match format {
        DateFormat::Dmy => (second, first, third),
        DateFormat::Mdy => (first, second, third),
        DateFormat::Ymd => (second, third, first),
    };
    Date::new(month, day, year).ok()
}

/// [`parse`] with [`DEFAULT_SEPARATORS`].
pub fn parse_default(text: &str, format: DateFormat) -> Option<Date> {
    parse(text, format, &DEFAULT_SEPARATORS)
}

fn replace_separators(text: &str, separators: &[char]) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut previous: Option<char> = None;
    let mut chars = text.chars().peekable();

    while let Some(current) = chars.next() {
        let next_is_digit = chars.peek().is_some_and(char::is_ascii_digit);
        let keep = !separators.contains(&current)
            || (is_sign(current) && next_is_digit && starts_field(previous, separators));
        normalized.push(if keep { current } else { ' ' });
        previous = Some(current);
    }
    normalized
}

fn starts_field(previous: Option<char>, separators: &[char]) -> bool {
    match previous {
        None => true,
        Some(c) if c.is_whitespace() => true,
        Some(c) => separators.contains(&c) && !is_sign(c),
    }
}

fn is_sign(c: char) -> bool {
    c == '-' || c == '+'
}

fn parse_field(token: &str) -> Option<i32> {
    let captures = INTEGER_TOKEN_RE.captures(token)?;
    let digits = captures.name("digits")?.as_str().replace(',', "");
    let sign = captures.name("sign").map_or("", |m| m.as_str());
    format!("{sign}{digits}").parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
    use super::{parse, parse_default, parse_field, replace_separators, DEFAULT_SEPARATORS};
    use crate::model::date::{Date, DateFormat};

    fn date(month: i32, day: i32, year: i32) -> Date {
        Date::new(month, day, year).expect("test date should be valid")
    }

    #[test]
    fn maps_fields_by_format() {
        assert_eq!(parse_default("3/1/2024", DateFormat::Mdy), Some(date(3, 1, 2024)));
        assert_eq!(parse_default("3/1/2024", DateFormat::Dmy), Some(date(1, 3, 2024)));
        assert_eq!(parse_default("2024-3-1", DateFormat::Ymd), Some(date(3, 1, 2024)));
    }

    #[test]
    fn rejects_invalid_and_malformed_text() {
        assert_eq!(parse_default("31/02/2024", DateFormat::Dmy), None);
        assert_eq!(parse_default("3/1/2024/x", DateFormat::Mdy), None);
        assert_eq!(parse_default("3/1/2024 5", DateFormat::Mdy), None);
        assert_eq!(parse_default("3/1", DateFormat::Mdy), None);
        assert_eq!(parse_default("", DateFormat::Mdy), None);
        assert_eq!(parse_default("march/1/2024", DateFormat::Mdy), None);
        assert_eq!(parse_default("3/1/99999999999", DateFormat::Mdy), None);
        assert_eq!(parse_default("3.1.2024", DateFormat::Mdy), None);
    }

    #[test]
    fn tolerates_whitespace_and_repeated_separators() {
        assert_eq!(parse_default("  3 / 1 / 2024 ", DateFormat::Mdy), Some(date(3, 1, 2024)));
        assert_eq!(parse_default("3//1//2024", DateFormat::Mdy), Some(date(3, 1, 2024)));
        assert_eq!(parse_default("03/01/2024", DateFormat::Mdy), Some(date(3, 1, 2024)));
        assert_eq!(parse_default("3 1 2024", DateFormat::Mdy), Some(date(3, 1, 2024)));
    }

    #[test]
    fn leading_minus_reads_as_sign() {
        assert_eq!(parse_default("-44/7/4", DateFormat::Ymd), Some(date(7, 4, -44)));
        assert_eq!(parse_default("7/4/-44", DateFormat::Mdy), Some(date(7, 4, -44)));
        assert_eq!(parse_default("-44-7-4", DateFormat::Ymd), Some(date(7, 4, -44)));
        assert_eq!(parse_default("7--4--2024", DateFormat::Mdy), Some(date(7, 4, 2024)));
    }

    #[test]
    fn empty_separator_list_uses_defaults() {
        assert_eq!(parse("3-1-2024", DateFormat::Mdy, &[]), Some(date(3, 1, 2024)));
        assert_eq!(parse("3-1-2024", DateFormat::Mdy, &['.']), None);
    }

    #[test]
    fn fields_accept_signs_and_digit_groups() {
        assert_eq!(parse_field("2024"), Some(2024));
        assert_eq!(parse_field("+7"), Some(7));
        assert_eq!(parse_field("-44"), Some(-44));
        assert_eq!(parse_field("2,024"), Some(2024));
        assert_eq!(parse_field("20,24"), None);
        assert_eq!(parse_field("1e3"), None);
        assert_eq!(parse_field("-"), None);
    }

    #[test]
    fn separators_become_spaces() {
        assert_eq!(replace_separators("3/1-2024", &DEFAULT_SEPARATORS), "3 1 2024");
        assert_eq!(replace_separators("3/-1", &DEFAULT_SEPARATORS), "3 -1");
    }
}
