//! KALNIRNAY Library
//!
//! This library converts Gregorian calendar dates into approximate Hindi (Saka)
//! calendar dates using a fixed table of month start offsets.
//!
//! # Architecture
//!
//! The library follows a 3-layer layout:
//! - **Console Layer**: `session` - Interactive prompt/convert/repeat loop
//! - **Domain Layer**: `saka` module - Calendar table and conversion arithmetic
//! - **Support Layer**: `validation`, `formatting`, `config` - Input checks, output text, settings
//!
//! # Example
//!
//! ```
//! use kalnirnay::{GregorianDate, convert};
//!
//! let result = convert(GregorianDate::new(15, 6, 2023));
//! assert_eq!(result.hindi.month, "Jyaistha");
//! assert_eq!(result.hindi.saka_year, 1945);
//! ```

pub mod config;
pub mod formatting;
pub mod saka;
pub mod session;
pub mod validation;

// Re-export commonly used types
pub use config::{Config, ConfigFile, DisplayConfig};
pub use saka::{
    Conversion, GregorianDate, HindiDate, MonthEntry, calendar_table, convert, day_of_year,
    is_leap_year,
};
pub use session::{Session, SessionEnd, convert_once};
pub use validation::InputError;
