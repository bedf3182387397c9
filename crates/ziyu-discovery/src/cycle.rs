//! Search for year counts where whole solar years and whole lunar months end
//! on the same civil day.
//!
//! For each candidate year count `i`, the month count is `round(i * Y / M)`.
//! A candidate survives when both spans end on the same day number and the
//! time left in that day (the smaller of the two fractional parts) beats
//! every earlier survivor. Notable year counts are always reported.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{SYNODIC_MONTH, TROPICAL_YEAR};

/// Historically used cycle lengths reported regardless of fit.
pub const DEFAULT_NOTABLE_YEARS: [u64; 6] = [19, 76, 391, 1520, 1539, 4560];

/// Tuning knobs for [`find_cycle`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Year counts always reported, even when the spans end on different days.
    pub notable_years: Vec<u64>,
    /// Starting value of the time-left high-water mark.
    pub initial_time_left: f64,
    /// Also report same-day candidates whose time left is at least this,
    /// even when it does not beat the high-water mark.
    pub late_day_floor: Option<f64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            notable_years: DEFAULT_NOTABLE_YEARS.to_vec(),
            initial_time_left: 0.5,
            late_day_floor: None,
        }
    }
}

/// One reported year count and its month/day alignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleCandidate {
    pub years: u64,
    pub months: u64,
    /// Months beyond twelve per year.
    pub leap_months: i64,
    /// Civil days covered: the day number the spans end on, plus one.
    pub days: i64,
    pub solar_days: f64,
    pub lunar_days: f64,
    pub solar_time_left: f64,
    pub lunar_time_left: f64,
    /// Absolute gap between the two fractional parts.
    pub residual_time_error: f64,
    pub same_day: bool,
    pub aligns_with_60day_cycle: bool,
    pub aligns_with_7day_cycle: bool,
    pub notable: bool,
}

impl CycleCandidate {
    fn new(years: u64, months: f64, solar_days: f64, lunar_days: f64, notable: bool) -> Self {
        let days = solar_days.trunc() as i64 + 1;
        let solar_time_left = solar_days.fract();
        let lunar_time_left = lunar_days.fract();
        Self {
            years,
            months: months as u64,
            leap_months: months as i64 - 12 * years as i64,
            days,
            solar_days,
            lunar_days,
            solar_time_left,
            lunar_time_left,
            residual_time_error: (solar_time_left - lunar_time_left).abs(),
            same_day: solar_days.trunc() == lunar_days.trunc(),
            aligns_with_60day_cycle: days % 60 == 0,
            aligns_with_7day_cycle: days % 7 == 0,
            notable,
        }
    }

    /// The smaller of the two fractional day parts.
    pub fn time_left(&self) -> f64 {
        self.solar_time_left.min(self.lunar_time_left)
    }
}

/// Scan year counts `0..max_year` for solar/lunar alignments.
///
/// Lengths must be finite and positive; otherwise nothing is reported.
pub fn find_cycle(
    solar_len: f64,
    lunar_len: f64,
    max_year: u64,
    options: &SearchOptions,
) -> Vec<CycleCandidate> {
    if !valid_length(solar_len) || !valid_length(lunar_len) {
        warn!(solar_len, lunar_len, "cycle lengths must be finite and positive");
        return Vec::new();
    }

    let mut high_water = options.initial_time_left;
    let mut report = Vec::new();

    for years in 0..max_year {
        let y = years as f64;
        let months = (y * solar_len / lunar_len).round();
        let solar_days = y * solar_len;
        let lunar_days = months * lunar_len;

        let same_day = solar_days.trunc() == lunar_days.trunc();
        let time_left = solar_days.fract().min(lunar_days.fract());
        let notable = options.notable_years.contains(&years);

        if !notable {
            if !same_day {
                continue;
            }
            if time_left > high_water {
                high_water = time_left;
            } else if !options
                .late_day_floor
                .is_some_and(|floor| time_left >= floor)
            {
                continue;
            }
        }

        let candidate = CycleCandidate::new(years, months, solar_days, lunar_days, notable);
        debug!(
            years,
            months = candidate.months,
            days = candidate.days,
            time_left,
            notable,
            "cycle candidate"
        );
        report.push(candidate);
    }

    info!(max_year, reported = report.len(), "cycle search finished");
    report
}

/// [`find_cycle`] restricted to candidates whose day count is a whole number
/// of sexagenary cycles.
pub fn find_period(
    solar_len: f64,
    lunar_len: f64,
    max_year: u64,
    options: &SearchOptions,
) -> Vec<CycleCandidate> {
    find_cycle(solar_len, lunar_len, max_year, options)
        .into_iter()
        .filter(|c| c.aligns_with_60day_cycle)
        .collect()
}

/// [`find_cycle`] with the mean tropical year and synodic month and default options.
pub fn find_cycle_default(max_year: u64) -> Vec<CycleCandidate> {
    find_cycle(TROPICAL_YEAR, SYNODIC_MONTH, max_year, &SearchOptions::default())
}

fn valid_length(len: f64) -> bool {
    len.is_finite() && len > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_derived_fields() {
        let c = CycleCandidate::new(19, 235.0, 19.0 * 365.24219, 235.0 * 29.530589, false);
        assert_eq!(c.leap_months, 7);
        assert_eq!(c.days, 6940);
        assert!(c.same_day);
        assert!((c.time_left() - 0.6016).abs() < 1e-3);
    }

    #[test]
    fn zero_year_is_not_reported() {
        // Time left at year 0 is 0.0, below the starting high-water mark.
        let report = find_cycle(365.24219, 29.530589, 1, &SearchOptions::default());
        assert!(report.is_empty());
    }

    #[test]
    fn invalid_lengths_give_empty_report() {
        let opts = SearchOptions::default();
        assert!(find_cycle(f64::NAN, 29.5, 100, &opts).is_empty());
        assert!(find_cycle(365.0, 0.0, 100, &opts).is_empty());
        assert!(find_cycle(-365.0, 29.5, 100, &opts).is_empty());
    }
}
