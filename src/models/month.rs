//! Displayed-month cursor
//!
//! The calendar shows one month at a time. `MonthCursor` moves by whole
//! months with year rollover and knows the shape of the month it points at.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A (year, month) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthCursor {
    year: i32,
    /// 1-12
    month: u32,
}

impl MonthCursor {
    /// Create a cursor from a year and a zero-based month index
    ///
    /// Out-of-range indices roll over into neighbouring years, so
    /// `new(2025, 12)` is January 2026 and `new(2025, -1)` is December 2024.
    /// Returns `None` when the result is outside the supported date range.
    pub fn new(year: i32, month_index: i32) -> Option<Self> {
        let total = i64::from(year) * 12 + i64::from(month_index);
        let year = i32::try_from(total.div_euclid(12)).ok()?;
        let month = total.rem_euclid(12) as u32 + 1;

        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self { year, month })
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month on the local clock
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1-12
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Zero-based month index, 0-11
    pub fn month_index(&self) -> u32 {
        self.month - 1
    }

    /// Move by `delta` months; stays put at the edge of the supported range
    pub fn shift(&self, delta: i32) -> Self {
        Self::new(self.year, self.month_index() as i32 + delta).unwrap_or(*self)
    }

    /// The following month
    pub fn next(&self) -> Self {
        self.shift(1)
    }

    /// The preceding month
    pub fn prev(&self) -> Self {
        self.shift(-1)
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        // Construction guarantees day 1 exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Date of `day` within this month, if it exists
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Number of days in the month
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Weekday of the first day (0 = Sunday .. 6 = Saturday)
    pub fn first_weekday(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Full month name, e.g. "January"
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month_index() as usize]
    }

    /// Parse a "YYYY-MM" string
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let invalid = || MonthParseError(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Self::new(year, month as i32 - 1).ok_or_else(invalid)
    }
}

impl Default for MonthCursor {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Error returned for malformed "YYYY-MM" strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthParseError(pub String);

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid month '{}', expected YYYY-MM", self.0)
    }
}

impl std::error::Error for MonthParseError {}
