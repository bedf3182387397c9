//! # ziyu-discovery
//!
//! Offline searches that produced the constants of the Gonghe calendar.
//! Nothing in [`ziyu_calendar`] calls into this crate.
//!
//! ## Modules
//!
//! - [`fraction`]: improving rational approximations of a real number
//! - [`cycle`]: year counts where solar years and lunar months end on the same day
//! - [`leap`]: "N leap days every M years" rules
//! - [`ephemeris`]: solstice/new-moon lookup and the epoch search
//!
//! ```rust
//! use ziyu_discovery::cycle::{find_period, SearchOptions};
//! use ziyu_discovery::{SYNODIC_MONTH, TROPICAL_YEAR};
//!
//! let periods = find_period(TROPICAL_YEAR, SYNODIC_MONTH, 5000, &SearchOptions::default());
//! assert_eq!(periods[0].years, 4418);
//! assert_eq!(periods[0].days, 1_613_640);
//! ```

pub mod cycle;
pub mod ephemeris;
pub mod fraction;
pub mod leap;

/// Mean tropical year in days.
pub const TROPICAL_YEAR: f64 = 365.242190;

/// Mean synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530589;

pub use cycle::{find_cycle, find_period, CycleCandidate, SearchOptions};
pub use ephemeris::{find_aligned_solstices, Ephemeris, MeanMotionEphemeris};
pub use fraction::{find_fraction, find_mixed_fraction, Approximation, Comparison};
pub use leap::{find_leap_rule, LeapRule};
