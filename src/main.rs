//! KALNIRNAY - Main Entry Point
//!
//! This is the main entry point for the converter binary.
//! The actual implementation is in the `kalnirnay` library.

mod logging;

use anyhow::{Context, Result, bail};
use clap::Parser;
use kalnirnay::validation::validate_date;
use kalnirnay::{ConfigFile, DisplayConfig, GregorianDate, Session, convert_once};
use std::io;
use std::path::PathBuf;
use std::process;

/// KALNIRNAY - Gregorian to Hindi (Saka) calendar converter
///
/// Without arguments, starts an interactive session reading dates from stdin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Convert a single date given as DAY MONTH YEAR and exit
    #[arg(
        num_args = 3,
        value_names = ["DAY", "MONTH", "YEAR"],
        allow_negative_numbers = true,
        conflicts_with = "today"
    )]
    date: Option<Vec<i32>>,

    /// Convert today's local date and exit
    #[arg(long)]
    today: bool,

    /// Path to a TOML display configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not print the title banner
    #[arg(long)]
    no_banner: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut display = match &args.config {
        Some(path) => ConfigFile::new(path).load()?.display,
        None => DisplayConfig::default(),
    };
    if args.no_banner {
        display.show_banner = false;
    }

    if args.today {
        convert_once(GregorianDate::today(), &display, io::stdout().lock())?;
        return Ok(());
    }

    if let Some(fields) = args.date {
        let &[day, month, year] = fields.as_slice() else {
            bail!("expected DAY MONTH YEAR, got {} value(s)", fields.len());
        };
        let date = validate_date(day, month, year)
            .with_context(|| format!("cannot convert {day} {month} {year}"))?;
        convert_once(date, &display, io::stdout().lock())?;
        return Ok(());
    }

    Session::new(io::stdin().lock(), io::stdout().lock(), display).run()?;
    Ok(())
}
