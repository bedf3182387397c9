//! `ziyu` CLI: day count / Gonghe calendar conversion and cycle discovery.
//!
//! ## Usage
//!
//! ```sh
//! # Day count to date
//! ziyu to-date 800609
//!
//! # Date to day count, with a time of day
//! ziyu to-day-count 2192 1 3 --time 0.5
//!
//! # From a Gregorian or Julian date
//! ziyu from-gregorian 1978-03-04
//! ziyu from-julian-day 2226910.5
//!
//! # Rational approximations of the tropical year
//! ziyu fraction 365.24219 --special 2209 --format json
//!
//! # Solar/lunar cycles and 60-day aligned periods
//! ziyu cycle --max-year 5000 --period
//!
//! # Leap rules
//! ziyu leap --max-years 1000
//! ```

mod cli;
mod logging;
mod report;

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing::info;
use ziyu_calendar::{to_day_count, CycleConstants, DayCount};
use ziyu_discovery::cycle::{find_cycle, find_period, SearchOptions};
use ziyu_discovery::fraction::{find_fraction, find_mixed_fraction};
use ziyu_discovery::leap::find_leap_rule;

use crate::cli::{Cli, Command};
use crate::report::DayReport;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let constants = load_constants(cli.constants.as_deref())?;
    let format = cli.format;

    let output = match cli.command {
        Command::ToDate(args) => {
            let day_count: DayCount = args
                .day_count
                .parse()
                .with_context(|| format!("Invalid day count: {}", args.day_count))?;
            report::day(format, &DayReport::new(&constants, day_count))?
        }
        Command::ToDayCount(args) => {
            let day_count = to_day_count(&constants, args.year, args.month, args.day, args.time)
                .context("Failed to convert date to day count")?;
            report::day(format, &DayReport::new(&constants, day_count))?
        }
        Command::FromGregorian(args) => {
            let date = NaiveDate::parse_from_str(&args.date, "%Y-%m-%d").with_context(|| {
                format!("Invalid Gregorian date (expected YYYY-MM-DD): {}", args.date)
            })?;
            report::day(format, &DayReport::new(&constants, DayCount::from_gregorian(date)))?
        }
        Command::FromJulianDay(args) => {
            let day_count = DayCount::from_julian_day(args.julian_day)
                .context("Failed to convert Julian day")?;
            report::day(format, &DayReport::new(&constants, day_count))?
        }
        Command::Fraction(args) => {
            if args.mixed {
                let found = find_mixed_fraction(args.value, args.max_denominator, &args.special);
                report::mixed_fractions(format, &found)?
            } else {
                let found = find_fraction(
                    args.value,
                    args.min_denominator..args.max_denominator,
                    &args.special,
                );
                report::fractions(format, &found)?
            }
        }
        Command::Cycle(args) => {
            let mut options = SearchOptions {
                late_day_floor: args.late_day_floor,
                ..SearchOptions::default()
            };
            if let Some(notable) = args.notable {
                options.notable_years = notable;
            }
            let found = if args.period {
                find_period(args.solar, args.lunar, args.max_year, &options)
            } else {
                find_cycle(args.solar, args.lunar, args.max_year, &options)
            };
            report::cycles(format, &found)?
        }
        Command::Leap(args) => {
            let found = find_leap_rule(args.year_len, args.max_years, &args.special);
            report::leap_rules(format, &found)?
        }
    };

    print!("{output}");
    Ok(())
}

fn load_constants(path: Option<&Path>) -> Result<CycleConstants> {
    let Some(path) = path else {
        return Ok(CycleConstants::gonghe());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read constants file: {}", path.display()))?;
    let constants: CycleConstants = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid cycle constants in {}", path.display()))?;
    info!(path = %path.display(), "loaded cycle constants");
    Ok(constants)
}
