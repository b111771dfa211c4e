// SPDX-License-Identifier: MPL-2.0
//! Year value object.
//!
//! A [`Year`] is the lookup key of the archive. It is guaranteed to lie in the
//! open range `(1800, 3000)`, whether it came from the year form, the location
//! URL or the manifest.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Year Bounds
// =============================================================================

/// Exclusive bounds of a valid year.
pub mod year_bounds {
    /// Every valid year is strictly greater than this.
    pub const LOWER_EXCLUSIVE: i32 = 1800;
    /// Every valid year is strictly less than this.
    pub const UPPER_EXCLUSIVE: i32 = 3000;
}

// =============================================================================
// Year
// =============================================================================

/// A speech year, guaranteed to be within `(1800, 3000)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(i32);

impl Year {
    /// Creates a year, returning `None` outside of the valid range.
    #[must_use]
    pub fn new(value: i32) -> Option<Self> {
        if value > year_bounds::LOWER_EXCLUSIVE && value < year_bounds::UPPER_EXCLUSIVE {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Creates a year from a JSON-style number.
    ///
    /// The number must be finite and integral; `2022.0` is accepted, `2022.5`
    /// is not.
    #[must_use]
    pub fn from_number(value: f64) -> Option<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return None;
        }
        if value <= f64::from(year_bounds::LOWER_EXCLUSIVE)
            || value >= f64::from(year_bounds::UPPER_EXCLUSIVE)
        {
            return None;
        }
        // Range checked above, the cast cannot truncate.
        #[allow(clippy::cast_possible_truncation)]
        Self::new(value as i32)
    }

    /// Parses user or URL input.
    ///
    /// Surrounding whitespace is ignored and the text is read as a number, so
    /// `" 2022 "`, `"+2022"` and `"2022.0"` all yield 2022. Anything that is
    /// not a finite integral number inside the range yields `None`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<f64>().ok().and_then(Self::from_number)
    }

    /// The year preceding `calendar_year`, kept inside the valid range.
    ///
    /// This is the default selection when nothing else asks for a year: the
    /// most recent speech is given on New Year's Eve of the previous year.
    #[must_use]
    pub fn preceding(calendar_year: i32) -> Self {
        let wanted = calendar_year.saturating_sub(1).clamp(
            year_bounds::LOWER_EXCLUSIVE + 1,
            year_bounds::UPPER_EXCLUSIVE - 1,
        );
        Self(wanted)
    }

    /// Returns the raw year.
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a value is not a valid [`Year`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidYear(pub String);

impl fmt::Display for InvalidYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is not a year between {} and {}",
            self.0,
            year_bounds::LOWER_EXCLUSIVE,
            year_bounds::UPPER_EXCLUSIVE
        )
    }
}

impl std::error::Error for InvalidYear {}

impl FromStr for Year {
    type Err = InvalidYear;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidYear(s.to_string()))
    }
}

impl TryFrom<i32> for Year {
    type Error = InvalidYear;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| InvalidYear(value.to_string()))
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_exclusive() {
        assert!(Year::new(1800).is_none());
        assert!(Year::new(3000).is_none());
        assert_eq!(Year::new(1801).map(Year::value), Some(1801));
        assert_eq!(Year::new(2999).map(Year::value), Some(2999));
    }

    #[test]
    fn parse_accepts_numeric_text() {
        assert_eq!(Year::parse("2022").map(Year::value), Some(2022));
        assert_eq!(Year::parse("  2022\n").map(Year::value), Some(2022));
        assert_eq!(Year::parse("+2022").map(Year::value), Some(2022));
        assert_eq!(Year::parse("2022.0").map(Year::value), Some(2022));
    }

    #[test]
    fn parse_rejects_malformed_or_out_of_range_input() {
        for input in ["abc", "", "   ", "500", "5000", "2022.5", "NaN", "inf", "1e3", "20 22"] {
            assert!(Year::parse(input).is_none(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn from_number_requires_integral_finite_values() {
        assert_eq!(Year::from_number(2022.0).map(Year::value), Some(2022));
        assert!(Year::from_number(2022.25).is_none());
        assert!(Year::from_number(f64::NAN).is_none());
        assert!(Year::from_number(1500.0).is_none());
        assert!(Year::from_number(9999.0).is_none());
    }

    #[test]
    fn preceding_is_previous_calendar_year() {
        assert_eq!(Year::preceding(2026).value(), 2025);
    }

    #[test]
    fn preceding_stays_in_range() {
        assert_eq!(Year::preceding(1700).value(), 1801);
        assert_eq!(Year::preceding(4000).value(), 2999);
    }

    #[test]
    fn deserializing_rejects_out_of_range_years() {
        let ok: Year = serde_json::from_str("2023").expect("valid year");
        assert_eq!(ok.value(), 2023);
        assert!(serde_json::from_str::<Year>("1500").is_err());
    }

    #[test]
    fn from_str_reports_invalid_input() {
        let err = "abc".parse::<Year>().unwrap_err();
        assert!(err.to_string().contains("abc"));
    }
}
