use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Ziyu day count and Gonghe calendar tools.
#[derive(Parser)]
#[command(
    name = "ziyu",
    version,
    about = "Ziyu day count / Gonghe calendar conversion and cycle discovery"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// JSON file with alternative cycle constants.
    #[arg(long, global = true)]
    pub constants: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a day count (integer or fractional) to a Gonghe date.
    ToDate(ToDateArgs),
    /// Convert a Gonghe date to a day count.
    ToDayCount(ToDayCountArgs),
    /// Convert a proleptic Gregorian date (YYYY-MM-DD) to day count and Gonghe date.
    FromGregorian(FromGregorianArgs),
    /// Convert a Julian day to day count and Gonghe date.
    FromJulianDay(FromJulianDayArgs),
    /// Search rational approximations of a number.
    Fraction(FractionArgs),
    /// Search year counts where solar years and lunar months end on the same day.
    Cycle(CycleArgs),
    /// Search leap-day rules for a year length.
    Leap(LeapArgs),
}

#[derive(clap::Args)]
pub struct ToDateArgs {
    /// Day count, e.g. `0`, `-3` or `800609.75`.
    #[arg(allow_negative_numbers = true)]
    pub day_count: String,
}

#[derive(clap::Args)]
pub struct ToDayCountArgs {
    #[arg(allow_negative_numbers = true)]
    pub year: i64,
    pub month: u8,
    pub day: u32,

    /// Time of day as a fraction in [0, 1).
    #[arg(long, default_value_t = 0.0)]
    pub time: f64,
}

#[derive(clap::Args)]
pub struct FromGregorianArgs {
    /// Date as YYYY-MM-DD.
    #[arg(allow_negative_numbers = true)]
    pub date: String,
}

#[derive(clap::Args)]
pub struct FromJulianDayArgs {
    #[arg(allow_negative_numbers = true)]
    pub julian_day: f64,
}

#[derive(clap::Args)]
pub struct FractionArgs {
    /// Number to approximate.
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// Smallest denominator tried.
    #[arg(long, default_value_t = 1)]
    pub min_denominator: u64,

    /// Exclusive upper bound on the denominator.
    #[arg(long, default_value_t = 10_000)]
    pub max_denominator: u64,

    /// Denominators always reported (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub special: Vec<u64>,

    /// Approximate only the fractional part.
    #[arg(long)]
    pub mixed: bool,
}

#[derive(clap::Args)]
pub struct CycleArgs {
    /// Solar year length in days.
    #[arg(long, default_value_t = ziyu_discovery::TROPICAL_YEAR)]
    pub solar: f64,

    /// Lunar month length in days.
    #[arg(long, default_value_t = ziyu_discovery::SYNODIC_MONTH)]
    pub lunar: f64,

    /// Exclusive upper bound on the year count.
    #[arg(long, default_value_t = 10_000)]
    pub max_year: u64,

    /// Year counts always reported (comma-separated); defaults to the historical cycles.
    #[arg(long, value_delimiter = ',')]
    pub notable: Option<Vec<u64>>,

    /// Also report same-day candidates with at least this much time left.
    #[arg(long)]
    pub late_day_floor: Option<f64>,

    /// Keep only candidates whose day count is a whole number of sexagenary cycles.
    #[arg(long)]
    pub period: bool,
}

#[derive(clap::Args)]
pub struct LeapArgs {
    /// Year length in days.
    #[arg(long, default_value_t = ziyu_discovery::TROPICAL_YEAR)]
    pub year_len: f64,

    /// Largest cycle length in years.
    #[arg(long, default_value_t = 1000)]
    pub max_years: u32,

    /// Cycle lengths always reported (comma-separated).
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = ziyu_discovery::leap::DEFAULT_SPECIAL_YEARS
    )]
    pub special: Vec<u32>,
}
