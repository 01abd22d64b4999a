use super::gregorian::GregorianDate;
use super::month::{CHAITRA_START, MonthEntry, calendar_table};
use std::fmt;
use tracing::debug;

/// Offset between the Gregorian and Saka year numbers
pub const SAKA_YEAR_OFFSET: i64 = 78;

/// Days assumed per year when a month wraps past 31 December
const WRAP_YEAR_LENGTH: u32 = 365;

/// A date in the (approximate) Hindi/Saka calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HindiDate {
    /// Day within the Saka month, counted from 1
    pub day: u32,
    /// Saka month name
    pub month: &'static str,
    /// Saka year
    pub saka_year: i64,
}

impl fmt::Display for HindiDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, Saka {}", self.day, self.month, self.saka_year)
    }
}

/// Result of converting one Gregorian date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub gregorian: GregorianDate,
    pub day_of_year: u32,
    pub hindi: HindiDate,
}

/// Saka year for a Gregorian year and day-of-year
///
/// Dates before Chaitra belong to the tail of the previous Saka year.
/// Widened to `i64` so every `i32` Gregorian year has a Saka year.
pub fn saka_year(year: i32, day_of_year: u32) -> i64 {
    let saka = i64::from(year) - SAKA_YEAR_OFFSET;
    if day_of_year < CHAITRA_START {
        saka - 1
    } else {
        saka
    }
}

/// Pick the Saka month covering `day_of_year`
///
/// Among the table entries starting on or before `day_of_year`, the one with
/// the latest start wins (ties go to the later table position). Before Chaitra
/// only the months that themselves start before Chaitra are candidates, and
/// if none has started yet the synthetic Pausha(0) entry is returned.
pub fn select_month(table: &[MonthEntry], day_of_year: u32) -> MonthEntry {
    let before_chaitra = day_of_year < CHAITRA_START;
    let selected = table
        .iter()
        .filter(|entry| entry.start_day_of_year <= day_of_year)
        .filter(|entry| !before_chaitra || entry.starts_before_chaitra())
        .max_by_key(|entry| entry.start_day_of_year)
        .copied();

    match selected {
        Some(entry) => entry,
        None => {
            debug!(day_of_year, "no month started yet, using Pausha fallback");
            MonthEntry::PAUSHA_FALLBACK
        }
    }
}

/// Day within `month` for `day_of_year`, counted from 1
///
/// A month starting after `day_of_year` is treated as having started in the
/// previous Gregorian year.
pub fn hindi_day(month: &MonthEntry, day_of_year: u32) -> u32 {
    if month.start_day_of_year > day_of_year {
        day_of_year + WRAP_YEAR_LENGTH - month.start_day_of_year + 1
    } else {
        day_of_year - month.start_day_of_year + 1
    }
}

/// Map a day-of-year in a Gregorian year onto the Saka calendar
pub fn convert_day_of_year(table: &[MonthEntry], day_of_year: u32, year: i32) -> HindiDate {
    let month = select_month(table, day_of_year);
    let hindi = HindiDate {
        day: hindi_day(&month, day_of_year),
        month: month.name,
        saka_year: saka_year(year, day_of_year),
    };
    debug!(
        day_of_year,
        year,
        month = month.name,
        start = month.start_day_of_year,
        "selected Saka month"
    );
    hindi
}

/// Convert a Gregorian date using the built-in calendar table
///
/// # Example
/// ```
/// use kalnirnay::{GregorianDate, convert};
///
/// let result = convert(GregorianDate::new(22, 3, 2023));
/// assert_eq!(result.day_of_year, 81);
/// assert_eq!(result.hindi.to_string(), "1 Chaitra, Saka 1945");
/// ```
pub fn convert(date: GregorianDate) -> Conversion {
    let day_of_year = date.day_of_year();
    Conversion {
        gregorian: date,
        day_of_year,
        hindi: convert_day_of_year(calendar_table(), day_of_year, date.year),
    }
}
