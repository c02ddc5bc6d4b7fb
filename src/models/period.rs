//! Reporting period
//!
//! A period is a calendar month. Reports are scoped by filtering transactions
//! whose date falls inside the selected month.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A (year, month) selection
///
/// Ordering is chronological: year first, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a period, rejecting months outside 1..=12
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The period a date belongs to
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month, according to the local clock
    pub fn current() -> Self {
        Self::of(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Get the next period
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Human-readable month/year token, e.g. "Jan/2025"
    pub fn label(&self) -> String {
        let month = (self.month as usize)
            .checked_sub(1)
            .and_then(|i| MONTH_ABBREVIATIONS.get(i))
            .copied()
            .unwrap_or("???");
        format!("{}/{:04}", month, self.year)
    }

    /// Every period from `self` to `end`, inclusive
    ///
    /// Empty when `end` precedes `self`.
    pub fn through(self, end: Period) -> impl Iterator<Item = Period> {
        std::iter::successors(Some(self), |p| Some(p.next())).take_while(move |p| *p <= end)
    }

    /// Parse a period string in `YYYY-MM` form
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(year: i32, month: u32) -> Period {
        Period::new(year, month).unwrap()
    }

    #[test]
    fn test_contains() {
        let jan = period(2025, 1);
        assert!(jan.contains(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
        assert!(jan.contains(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()));
        assert!(!jan.contains(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()));
        assert!(!jan.contains(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
    }

    #[test]
    fn test_navigation() {
        assert_eq!(period(2025, 1).next(), period(2025, 2));
        assert_eq!(period(2024, 12).next(), period(2025, 1));
    }

    #[test]
    fn test_label() {
        assert_eq!(period(2025, 1).label(), "Jan/2025");
        assert_eq!(period(2024, 12).label(), "Dec/2024");
    }

    #[test]
    fn test_label_out_of_range_month_does_not_panic() {
        assert_eq!(Period { year: 2025, month: 13 }.label(), "???/2025");
        assert_eq!(Period { year: 2025, month: 0 }.label(), "???/2025");
    }

    #[test]
    fn test_new_rejects_invalid_month() {
        assert!(Period::new(2025, 0).is_err());
        assert!(Period::new(2025, 13).is_err());
    }

    #[test]
    fn test_through_spans_year_boundary() {
        let months: Vec<_> = period(2024, 11).through(period(2025, 2)).collect();
        assert_eq!(
            months,
            vec![period(2024, 11), period(2024, 12), period(2025, 1), period(2025, 2)]
        );

        assert_eq!(period(2025, 3).through(period(2025, 3)).count(), 1);
        assert_eq!(period(2025, 3).through(period(2025, 1)).count(), 0);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Period::parse("2025-01").unwrap(), period(2025, 1));
        assert_eq!("2025-12".parse::<Period>().unwrap(), period(2025, 12));
        assert_eq!(
            Period::parse("2025-13"),
            Err(PeriodParseError::InvalidMonth(13))
        );
        assert!(matches!(
            Period::parse("january"),
            Err(PeriodParseError::InvalidFormat(_))
        ));
        assert_eq!(period(2025, 3).to_string(), "2025-03");
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(period(2024, 12) < period(2025, 1));
        assert!(period(2025, 2) > period(2025, 1));
    }
}
