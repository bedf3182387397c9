//! Search for "N leap days every M years" rules matching a year length.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Cycle lengths used by historical calendars, always reported when within tolerance.
pub const DEFAULT_SPECIAL_YEARS: [u32; 3] = [100, 400, 900];

/// `leap_days` leap days every `years` years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeapRule {
    pub years: u32,
    pub leap_days: u32,
    pub mean_year: f64,
    /// Absolute gap between `mean_year` and the target year length.
    pub error: f64,
    /// Years until the rule drifts by a whole day; `None` for an exact rule.
    pub drift_years: Option<f64>,
    pub special: bool,
}

/// Scan cycle lengths `1..=max_years` for leap rules approximating `year_len`.
///
/// Only rules within the error of the plain four-year rule are considered.
/// A rule is reported when its error is no worse than every earlier report
/// (ties are kept), or when its cycle length is in `special_years`.
pub fn find_leap_rule(year_len: f64, max_years: u32, special_years: &[u32]) -> Vec<LeapRule> {
    if !year_len.is_finite() || year_len <= 0.0 {
        warn!(year_len, "year length must be finite and positive");
        return Vec::new();
    }

    let common = year_len.floor();
    let tolerance = (year_len * 4.0 - (year_len * 4.0).round()).abs();
    let mut best_error = 1.0;
    let mut report = Vec::new();

    for years in 1..=max_years {
        let (leap_days, error) = best_leap_days(year_len, common, years);
        if error > tolerance {
            continue;
        }
        let special = special_years.contains(&years);
        if error > best_error && !special {
            continue;
        }
        if error < best_error {
            best_error = error;
        }

        let mean_year = (f64::from(years) * common + f64::from(leap_days)) / f64::from(years);
        debug!(years, leap_days, error, special, "leap rule reported");
        report.push(LeapRule {
            years,
            leap_days,
            mean_year,
            error,
            drift_years: (error > 0.0).then(|| 1.0 / error),
            special,
        });
    }

    info!(year_len, reported = report.len(), "leap rule search finished");
    report
}

/// Nearest leap-day count in `1..=years`, ties to the larger count.
fn best_leap_days(year_len: f64, common: f64, years: u32) -> (u32, f64) {
    let y = f64::from(years);
    let error_of = |leap: u32| ((y * common + f64::from(leap)) / y - year_len).abs();

    let ideal = (year_len - common) * y;
    let lower = (ideal.floor().max(1.0) as u32).min(years);
    let upper = (lower + 1).min(years);

    let (lower_error, upper_error) = (error_of(lower), error_of(upper));
    if upper_error <= lower_error {
        (upper, upper_error)
    } else {
        (lower, lower_error)
    }
}
