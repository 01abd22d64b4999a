//! Validation helper functions for date input
//!
//! This module contains parsing of single "DD MM YYYY" fields, the loose range
//! check applied before conversion, and interpretation of the repeat prompt.

use crate::saka::GregorianDate;
use thiserror::Error;

/// Error type for rejected user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Fewer than three integers could be read
    #[error("Invalid input format.")]
    Malformed,

    /// Month outside 1-12 or day outside 1-31
    #[error("Invalid Date Entered!")]
    OutOfRange {
        /// The day as entered
        day: i32,
        /// The month as entered
        month: i32,
    },
}

/// Parse one integer field the way a `%d` conversion accepts it
///
/// # Arguments
/// * `token` - Whitespace-free token (e.g., "15", "+6", "-3")
///
/// # Returns
/// Result containing the parsed value or `InputError::Malformed`
pub fn parse_field(token: &str) -> Result<i32, InputError> {
    token.parse::<i32>().map_err(|_| InputError::Malformed)
}

/// Check month in 1-12 and day in 1-31
///
/// Day-in-month upper bounds are not checked, so 30 February
/// is accepted.
///
/// # Arguments
/// * `day` - Day as entered
/// * `month` - Month as entered
/// * `year` - Year as entered (any value)
///
/// # Returns
/// Result containing the date or `InputError::OutOfRange`
pub fn validate_date(day: i32, month: i32, year: i32) -> Result<GregorianDate, InputError> {
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(InputError::OutOfRange { day, month });
    }
    Ok(GregorianDate::new(day as u32, month as u32, year))
}

/// Whether the answer to the repeat prompt asks for another conversion
pub fn wants_another(choice: char) -> bool {
    matches!(choice, 'y' | 'Y')
}
