//! Formatting helper functions for console output
//!
//! This module contains the banner, the bordered result block and the
//! prompt strings shown during an interactive session.

use crate::saka::Conversion;

/// Title shown inside the banner
pub const TITLE: &str = "   KALNIRNAY: Gregorian to Hindi Converter";

/// Prompt for the date to convert
pub const DATE_PROMPT: &str = "\nEnter Gregorian Date (DD MM YYYY): ";

/// Prompt asked after each attempt
pub const REPEAT_PROMPT: &str = "\nDo you want to convert another date? (y/n): ";

/// A horizontal rule of `width` copies of `ch`
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat_n(ch, width).collect()
}

/// Format the title banner
///
/// # Arguments
/// * `width` - Width of the `=` rules
///
/// # Returns
/// Banner text ending with a newline
pub fn format_banner(width: usize) -> String {
    let line = rule('=', width);
    format!("{line}\n{TITLE}\n{line}\n")
}

/// Format a conversion as a bordered block
///
/// # Arguments
/// * `conversion` - Converted date
/// * `width` - Width of the `-` rules
///
/// # Returns
/// Block text ending with a newline, e.g.
/// ```text
/// -----------------------------------------
/// Gregorian: 15/06/2023
/// Hindi Date: 24 Jyaistha, Saka 1945
/// -----------------------------------------
/// ```
pub fn format_conversion(conversion: &Conversion, width: usize) -> String {
    let line = rule('-', width);
    format!(
        "{line}\nGregorian: {}\nHindi Date: {}\n{line}\n",
        conversion.gregorian, conversion.hindi
    )
}
