//! Rational approximation of a real number by a single-pass denominator scan.
//!
//! For each denominator `q` the nearer of `floor(x*q)/q` and
//! `(floor(x*q)+1)/q` is taken. An entry is reported when its error is
//! strictly below every error reported so far, or when `q` is one of the
//! caller's special denominators (historically used cycle lengths), which
//! are always reported and flagged.
//!
//! This is not a continued-fraction expansion: a denominator that is a
//! local best but no better than an earlier, smaller one is skipped.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Whether the approximation lies above or below the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    #[serde(rename = ">")]
    Above,
    #[serde(rename = "<")]
    Below,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Above => f.write_str(">"),
            Comparison::Below => f.write_str("<"),
        }
    }
}

/// One reported fraction `numerator / denominator`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Approximation {
    pub numerator: i64,
    pub denominator: u64,
    /// `numerator / denominator` as a decimal.
    pub value: f64,
    /// Signed error, `value - target`.
    pub error: f64,
    pub comparison: Comparison,
    /// The denominator was in the caller's special set.
    pub special: bool,
}

impl Approximation {
    pub fn abs_error(&self) -> f64 {
        self.error.abs()
    }
}

/// An approximation of only the fractional part, e.g. `365 + 752/3105`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixedApproximation {
    pub whole: i64,
    pub fraction: Approximation,
}

impl MixedApproximation {
    /// The same value as an improper fraction.
    pub fn improper_numerator(&self) -> i64 {
        self.whole * self.fraction.denominator as i64 + self.fraction.numerator
    }
}

/// Scan denominators in `denominators` for improving approximations of `target`.
///
/// Denominator 0 is skipped. Candidates whose numerator is 0 are skipped
/// unless the denominator is special; a zero-numerator special entry is
/// reported but never counts as an improvement. A non-finite `target`
/// yields an empty report.
pub fn find_fraction(
    target: f64,
    denominators: Range<u64>,
    special: &[u64],
) -> Vec<Approximation> {
    if !target.is_finite() {
        warn!(target, "non-finite target, nothing to approximate");
        return Vec::new();
    }

    let mut best_error = f64::INFINITY;
    let mut report = Vec::new();

    for denominator in denominators.start.max(1)..denominators.end {
        let (numerator, abs_error) = nearest_numerator(target, denominator);
        let is_special = special.contains(&denominator);
        if numerator == 0 && !is_special {
            continue;
        }

        let improves = numerator != 0 && abs_error < best_error;
        if !improves && !is_special {
            continue;
        }
        if improves {
            best_error = abs_error;
        }

        let value = numerator as f64 / denominator as f64;
        let entry = Approximation {
            numerator,
            denominator,
            value,
            error: value - target,
            comparison: if value > target {
                Comparison::Above
            } else {
                Comparison::Below
            },
            special: is_special,
        };
        debug!(
            numerator,
            denominator,
            error = entry.error,
            special = is_special,
            "approximation reported"
        );
        report.push(entry);
    }

    info!(target, reported = report.len(), "fraction search finished");
    report
}

/// [`find_fraction`] over `1..max_denominator` with no special denominators.
pub fn find_fraction_upto(target: f64, max_denominator: u64) -> Vec<Approximation> {
    find_fraction(target, 1..max_denominator, &[])
}

/// Approximate only the fractional part of `target`, keeping the whole part apart.
pub fn find_mixed_fraction(
    target: f64,
    max_denominator: u64,
    special: &[u64],
) -> Vec<MixedApproximation> {
    if !target.is_finite() {
        warn!(target, "non-finite target, nothing to approximate");
        return Vec::new();
    }
    let whole = target.floor();
    find_fraction(target - whole, 1..max_denominator, special)
        .into_iter()
        .map(|fraction| MixedApproximation {
            whole: whole as i64,
            fraction,
        })
        .collect()
}

/// The nearer of `floor(x*q)` and `floor(x*q) + 1`, ties to the upper one.
fn nearest_numerator(target: f64, denominator: u64) -> (i64, f64) {
    let q = denominator as f64;
    let lower = (target * q).floor();
    let upper = lower + 1.0;
    let lower_error = (lower / q - target).abs();
    let upper_error = (upper / q - target).abs();
    if lower_error < upper_error {
        (lower as i64, lower_error)
    } else {
        (upper as i64, upper_error)
    }
}
