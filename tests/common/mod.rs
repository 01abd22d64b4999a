//! Common test utilities for integration tests
#![allow(dead_code)]

use kalnirnay::{DisplayConfig, Session, SessionEnd};
use std::io::Cursor;

/// Display settings without the banner, so output starts at the first prompt
pub fn quiet_display() -> DisplayConfig {
    DisplayConfig {
        show_banner: false,
        ..DisplayConfig::default()
    }
}

/// Run a session over `input` and return how it ended plus everything written
pub fn run_session(input: &str, display: DisplayConfig) -> (SessionEnd, String) {
    let mut session = Session::new(Cursor::new(input.to_string()), Vec::new(), display);
    let end = session.run().unwrap();
    let output = String::from_utf8(session.into_output()).unwrap();
    (end, output)
}

/// Collect the "Hindi Date:" lines from session output
pub fn hindi_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.split("Hindi Date: ").nth(1))
        .map(str::to_string)
        .collect()
}
