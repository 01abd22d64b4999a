use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// A Gregorian date as entered by the user
///
/// Only loosely validated: day-in-month upper bounds are not checked,
/// so 30 February is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GregorianDate {
    /// Day of month (1-31)
    pub day: u32,
    /// Month (1-12)
    pub month: u32,
    /// Gregorian year
    pub year: i32,
}

impl GregorianDate {
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Build from a calendar-checked chrono date
    pub fn from_naive(date: NaiveDate) -> Self {
        Self::new(date.day(), date.month(), date.year())
    }

    /// Today's date in the local timezone
    pub fn today() -> Self {
        Self::from_naive(Local::now().date_naive())
    }

    /// 1-indexed ordinal position of this date within its year
    pub fn day_of_year(&self) -> u32 {
        day_of_year(self.day, self.month, self.year)
    }
}

impl fmt::Display for GregorianDate {
    /// Renders as DD/MM/YYYY with zero-padded day and month
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day, self.month, self.year)
    }
}

/// Check if a given Gregorian year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`
///
/// Returns 0 for a month outside 1-12.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Compute the day of year (1-365, or 366 in leap years)
///
/// Sums the lengths of all months before `month` and adds `day`.
/// Callers are expected to have checked month in 1-12 and day in 1-31.
pub fn day_of_year(day: u32, month: u32, year: i32) -> u32 {
    (1..month).map(|m| days_in_month(m, year)).sum::<u32>() + day
}
