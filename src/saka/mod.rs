//! Saka calendar domain
//!
//! This module contains the calendar table and the conversion arithmetic.
//! It is split into submodules:
//! - `month`: Month entries and the fixed twelve-month table
//! - `gregorian`: Gregorian dates, leap years and day-of-year numbers
//! - `convert`: Mapping a day-of-year onto a Saka month, day and year

mod convert;
mod gregorian;
mod month;

// Re-export all public types
pub use convert::{
    Conversion, HindiDate, SAKA_YEAR_OFFSET, convert, convert_day_of_year, hindi_day, saka_year,
    select_month,
};
pub use gregorian::{GregorianDate, day_of_year, days_in_month, is_leap_year};
pub use month::{CHAITRA_START, MonthEntry, calendar_table};
