//! Relative date interval parsing.
//!
//! Turns compact interval tokens such as `1y2m3w4d` into an absolute
//! [`DateRange`] anchored on a given day. Used by the `summary` and `list`
//! commands to build the `beginDate`/`endDate` query parameters.
//!
//! ## Token Format
//!
//! A token is a sequence of `<digits><unit>` pairs where the unit is one of
//! `y`, `m`, `w`, `d`. Each unit is optional but may appear at most once, and
//! units must follow that fixed order:
//!
//! ```text
//! (\d+y)?(\d+m)?(\d+w)?(\d+d)?
//! ```
//!
//! A token must name at least one unit, so the empty string is rejected
//! rather than silently producing a zero-length range.
//!
//! ## Day Arithmetic
//!
//! Units are converted with fixed factors: a year is 365 days, a month is 30
//! days, a week is 7 days. The range begins `total` days before the anchor
//! day and ends the day after it, so the anchor day is included when the
//! range is used as a half-open filter.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use ritual::libs::interval::IntervalToken;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let range = "1w".parse::<IntervalToken>()?.range_from(today)?;
//! assert_eq!(range.begin, NaiveDate::from_ymd_opt(2024, 3, 8).unwrap());
//! assert_eq!(range.end, NaiveDate::from_ymd_opt(2024, 3, 16).unwrap());
//! # Ok::<(), ritual::libs::interval::IntervalError>(())
//! ```

use chrono::{Days, Local, NaiveDate};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Date format used for the `beginDate` and `endDate` query parameters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Help text shown alongside interval arguments.
pub const INTERVAL_HELP: &str = "Interval of format #y#m#w#d, each # representing any number of digits (e.g. 1y2m3w4d, 2w, 45d)";

/// One of the four units an interval token can name.
///
/// The declaration order is the order units must appear in a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntervalUnit {
    Year,
    Month,
    Week,
    Day,
}

impl IntervalUnit {
    /// Maps a unit letter to its unit.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'y' => Some(Self::Year),
            'm' => Some(Self::Month),
            'w' => Some(Self::Week),
            'd' => Some(Self::Day),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Year => 'y',
            Self::Month => 'm',
            Self::Week => 'w',
            Self::Day => 'd',
        }
    }

    /// Number of days one unit stands for.
    pub fn days(self) -> u64 {
        match self {
            Self::Year => 365,
            Self::Month => 30,
            Self::Week => 7,
            Self::Day => 1,
        }
    }
}

impl fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Reasons an interval token is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("interval must name at least one of y, m, w or d")]
    Empty,
    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedCharacter { found: char, position: usize },
    #[error("unit '{unit}' at position {position} has no number before it")]
    MissingMagnitude { unit: IntervalUnit, position: usize },
    #[error("number '{digits}' is not followed by a unit")]
    MissingUnit { digits: String },
    #[error("unit '{unit}' cannot follow '{previous}'; units go in the order y, m, w, d and appear once")]
    OutOfOrder { unit: IntervalUnit, previous: IntervalUnit },
    #[error("number '{digits}' is too large")]
    Magnitude { digits: String },
    #[error("interval of {days} days reaches outside the supported calendar")]
    OutOfRange { days: u64 },
}

/// A parsed interval token: ordered `(magnitude, unit)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalToken {
    parts: Vec<(u64, IntervalUnit)>,
}

impl IntervalToken {
    pub fn parts(&self) -> &[(u64, IntervalUnit)] {
        &self.parts
    }

    /// Sum of all parts converted to days.
    pub fn total_days(&self) -> Result<u64, IntervalError> {
        self.parts.iter().try_fold(0u64, |total, &(magnitude, unit)| {
            magnitude
                .checked_mul(unit.days())
                .and_then(|days| total.checked_add(days))
                .ok_or_else(|| IntervalError::Magnitude { digits: magnitude.to_string() })
        })
    }

    /// Resolves the token against `today`.
    ///
    /// `begin` is `today - total_days` and `end` is `today + 1 day`.
    pub fn range_from(&self, today: NaiveDate) -> Result<DateRange, IntervalError> {
        let days = self.total_days()?;
        let begin = today.checked_sub_days(Days::new(days)).ok_or(IntervalError::OutOfRange { days })?;
        let end = today.checked_add_days(Days::new(1)).ok_or(IntervalError::OutOfRange { days })?;
        Ok(DateRange { begin, end })
    }
}

impl FromStr for IntervalToken {
    type Err = IntervalError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut parts = Vec::new();
        let mut digits = String::new();
        let mut previous: Option<IntervalUnit> = None;

        for (position, ch) in token.char_indices() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                continue;
            }

            let unit = IntervalUnit::from_symbol(ch).ok_or(IntervalError::UnexpectedCharacter { found: ch, position })?;
            if digits.is_empty() {
                return Err(IntervalError::MissingMagnitude { unit, position });
            }
            if let Some(previous) = previous {
                if unit <= previous {
                    return Err(IntervalError::OutOfOrder { unit, previous });
                }
            }

            // Digits are ASCII decimal here, so only overflow can fail
            let magnitude = digits.parse::<u64>().map_err(|_| IntervalError::Magnitude { digits: digits.clone() })?;
            parts.push((magnitude, unit));
            previous = Some(unit);
            digits.clear();
        }

        if !digits.is_empty() {
            return Err(IntervalError::MissingUnit { digits });
        }
        if parts.is_empty() {
            return Err(IntervalError::Empty);
        }

        Ok(Self { parts })
    }
}

impl fmt::Display for IntervalToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (magnitude, unit) in &self.parts {
            write!(f, "{}{}", magnitude, unit)?;
        }
        Ok(())
    }
}

/// Absolute calendar range produced from an interval token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub begin: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn begin_date(&self) -> String {
        self.begin.format(DATE_FORMAT).to_string()
    }

    pub fn end_date(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }

    /// Query parameters understood by the date-filtered endpoints.
    pub fn query_params(&self) -> [(&'static str, String); 2] {
        [("beginDate", self.begin_date()), ("endDate", self.end_date())]
    }
}

/// Parses `token` and resolves it against the local calendar date.
pub fn parse_interval(token: &str) -> Result<DateRange, IntervalError> {
    token.parse::<IntervalToken>()?.range_from(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_digits_concatenate() {
        let token: IntervalToken = "45d".parse().unwrap();
        assert_eq!(token.parts(), &[(45, IntervalUnit::Day)]);
        assert_eq!(token.total_days().unwrap(), 45);
    }

    #[test]
    fn test_all_units() {
        let token: IntervalToken = "1y2m3w4d".parse().unwrap();
        assert_eq!(token.total_days().unwrap(), 450);
        assert_eq!(token.to_string(), "1y2m3w4d");
    }

    #[test]
    fn test_range_crosses_year() {
        let range = "2w".parse::<IntervalToken>().unwrap().range_from(day(2024, 1, 3)).unwrap();
        assert_eq!(range.begin, day(2023, 12, 20));
        assert_eq!(range.end, day(2024, 1, 4));
        assert_eq!(range.begin_date(), "2023-12-20");
        assert_eq!(range.end_date(), "2024-01-04");
    }

    #[test]
    fn test_rejections() {
        assert_eq!("".parse::<IntervalToken>(), Err(IntervalError::Empty));
        assert!(matches!("abc".parse::<IntervalToken>(), Err(IntervalError::UnexpectedCharacter { found: 'a', position: 0 })));
        assert!(matches!("y".parse::<IntervalToken>(), Err(IntervalError::MissingMagnitude { .. })));
        assert!(matches!("12".parse::<IntervalToken>(), Err(IntervalError::MissingUnit { .. })));
        assert!(matches!("1d1d".parse::<IntervalToken>(), Err(IntervalError::OutOfOrder { .. })));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert!(matches!("99999999999999999999999d".parse::<IntervalToken>(), Err(IntervalError::Magnitude { .. })));

        let token: IntervalToken = "18446744073709551615y".parse().unwrap();
        assert!(matches!(token.total_days(), Err(IntervalError::Magnitude { .. })));

        let token: IntervalToken = "9999999y".parse().unwrap();
        assert!(matches!(token.range_from(day(2024, 1, 1)), Err(IntervalError::OutOfRange { .. })));
    }
}
