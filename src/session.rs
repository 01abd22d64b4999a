//! Interactive conversion loop
//!
//! A [`Session`] prompts for a date, converts it, prints the result and asks
//! whether to continue. It works over any `BufRead`/`Write` pair so the same
//! loop drives stdin/stdout and in-memory buffers in tests.

use crate::config::DisplayConfig;
use crate::formatting::{DATE_PROMPT, REPEAT_PROMPT, format_banner, format_conversion};
use crate::saka::{Conversion, GregorianDate, convert};
use crate::validation::{InputError, parse_field, validate_date, wants_another};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Whitespace-separated reader over a line-buffered source
///
/// Tokens may be spread across several lines, and a single character can be
/// taken without consuming the rest of its token.
pub struct Scanner<R> {
    reader: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
        }
    }

    /// Advance to the next non-whitespace character; false at end of input
    fn skip_whitespace(&mut self) -> io::Result<bool> {
        loop {
            if let Some(offset) = self.line[self.pos..].find(|c: char| !c.is_whitespace()) {
                self.pos += offset;
                return Ok(true);
            }
            self.line.clear();
            self.pos = 0;
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(false);
            }
        }
    }

    /// Next whitespace-delimited token, or `None` at end of input
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }
        let rest = &self.line[self.pos..];
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let token = rest[..len].to_string();
        self.pos += len;
        Ok(Some(token))
    }

    /// Next non-whitespace character, or `None` at end of input
    pub fn next_char(&mut self) -> io::Result<Option<char>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }
        let ch = self.line[self.pos..].chars().next();
        if let Some(c) = ch {
            self.pos += c.len_utf8();
        }
        Ok(ch)
    }
}

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user answered something other than y/Y
    Declined,
    /// A date could not be read as three integers
    MalformedInput,
    /// Input ran out at the repeat prompt
    EndOfInput,
}

/// Interactive read/convert/print loop
pub struct Session<R, W> {
    input: Scanner<R>,
    output: W,
    display: DisplayConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, display: DisplayConfig) -> Self {
        Self {
            input: Scanner::new(input),
            output,
            display,
        }
    }

    /// Run until the user declines, input is malformed, or input ends
    ///
    /// # Returns
    /// Result containing the reason the loop ended; errors are I/O failures only
    pub fn run(&mut self) -> Result<SessionEnd> {
        info!("session started");
        if self.display.show_banner {
            write!(self.output, "{}", format_banner(self.display.rule_width))?;
        }

        let mut conversions = 0usize;
        let end = loop {
            self.prompt(DATE_PROMPT)?;
            match self.read_date()? {
                Ok(date) => {
                    let conversion = convert(date);
                    write!(
                        self.output,
                        "{}",
                        format_conversion(&conversion, self.display.rule_width)
                    )?;
                    conversions += 1;
                }
                Err(InputError::Malformed) => {
                    info!("malformed date input");
                    writeln!(self.output, "{}", InputError::Malformed)?;
                    break SessionEnd::MalformedInput;
                }
                Err(err) => {
                    info!(?err, "date out of range");
                    writeln!(self.output, "{err}")?;
                }
            }

            self.prompt(REPEAT_PROMPT)?;
            match self.input.next_char()? {
                Some(choice) if wants_another(choice) => continue,
                Some(choice) => {
                    debug!(%choice, "user declined another conversion");
                    break SessionEnd::Declined;
                }
                None => break SessionEnd::EndOfInput,
            }
        };

        self.output.flush()?;
        info!(?end, conversions, "session finished");
        Ok(end)
    }

    /// Consume the session and return the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Read three integers and range-check them
    fn read_date(&mut self) -> io::Result<Result<GregorianDate, InputError>> {
        let mut fields = [0i32; 3];
        for field in &mut fields {
            match self.input.next_token()? {
                Some(token) => match parse_field(&token) {
                    Ok(value) => *field = value,
                    Err(err) => return Ok(Err(err)),
                },
                None => return Ok(Err(InputError::Malformed)),
            }
        }
        let [day, month, year] = fields;
        Ok(validate_date(day, month, year))
    }
}

/// Convert a single date and print its bordered block
///
/// Used by the one-shot command-line modes; no banner or prompts are written.
pub fn convert_once<W: Write>(
    date: GregorianDate,
    display: &DisplayConfig,
    mut output: W,
) -> Result<Conversion> {
    let conversion = convert(date);
    info!(%date, hindi = %conversion.hindi, "converted date");
    write!(output, "{}", format_conversion(&conversion, display.rule_width))?;
    output.flush()?;
    Ok(conversion)
}
