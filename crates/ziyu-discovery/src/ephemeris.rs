//! Solstice and new-moon lookup, and the search for epoch-grade solstices.
//!
//! Timestamps are Julian days (UT). The calendar itself never consults an
//! ephemeris; this is only used to find and check candidate epochs.

use tracing::{debug, info, warn};
use ziyu_calendar::naming::sexagenary_index;

/// Source of astronomical events in Julian days.
pub trait Ephemeris {
    /// First winter solstice in `[t0, t1)`.
    fn find_solstice(&self, t0: f64, t1: f64) -> Option<f64>;

    /// First new moon in `[t0, t1)`.
    fn find_new_moon(&self, t0: f64, t1: f64) -> Option<f64>;
}

/// Events repeating at fixed mean periods from a known instance of each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanMotionEphemeris {
    pub solstice_epoch: f64,
    pub year_len: f64,
    pub new_moon_epoch: f64,
    pub month_len: f64,
}

impl MeanMotionEphemeris {
    pub fn new(solstice_epoch: f64, year_len: f64, new_moon_epoch: f64, month_len: f64) -> Self {
        Self {
            solstice_epoch,
            year_len,
            new_moon_epoch,
            month_len,
        }
    }
}

impl Ephemeris for MeanMotionEphemeris {
    fn find_solstice(&self, t0: f64, t1: f64) -> Option<f64> {
        next_event(self.solstice_epoch, self.year_len, t0, t1)
    }

    fn find_new_moon(&self, t0: f64, t1: f64) -> Option<f64> {
        next_event(self.new_moon_epoch, self.month_len, t0, t1)
    }
}

fn next_event(epoch: f64, period: f64, t0: f64, t1: f64) -> Option<f64> {
    if !(period.is_finite() && period > 0.0 && epoch.is_finite() && t0.is_finite()) {
        return None;
    }
    let mut t = epoch + ((t0 - epoch) / period).ceil() * period;
    if t < t0 {
        t += period;
    }
    (t < t1).then_some(t)
}

/// Julian-day midnights of winter solstices in `[t0, t1)` that share their
/// civil day with a new moon and fall on a 甲子 day.
pub fn find_aligned_solstices<E: Ephemeris + ?Sized>(eph: &E, t0: f64, t1: f64) -> Vec<f64> {
    let mut found = Vec::new();
    let mut t = t0;

    while let Some(solstice) = eph.find_solstice(t, t1) {
        let next = solstice + 1.0;
        if next.is_nan() || next <= t {
            warn!(t, solstice, "ephemeris did not advance, stopping search");
            break;
        }
        t = next;
        let Some(new_moon) = eph.find_new_moon(solstice - 1.0, solstice + 1.0) else {
            continue;
        };
        if civil_day(solstice) != civil_day(new_moon) {
            continue;
        }
        if sexagenary_index(solstice) != Ok(0) {
            debug!(solstice, new_moon, "solstice new moon not on a 甲子 day");
            continue;
        }
        let midnight = civil_day(solstice) - 0.5;
        debug!(midnight, "aligned solstice");
        found.push(midnight);
    }

    info!(t0, t1, found = found.len(), "aligned solstice search finished");
    found
}

fn civil_day(jd: f64) -> f64 {
    (jd + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_event_steps_on_period() {
        assert_eq!(next_event(10.0, 5.0, 11.0, 100.0), Some(15.0));
        assert_eq!(next_event(10.0, 5.0, 15.0, 100.0), Some(15.0));
        assert_eq!(next_event(10.0, 5.0, -1.0, 100.0), Some(0.0));
        assert_eq!(next_event(10.0, 5.0, 16.0, 20.0), None);
    }

    #[test]
    fn next_event_rejects_bad_period() {
        assert_eq!(next_event(10.0, 0.0, 0.0, 100.0), None);
        assert_eq!(next_event(10.0, f64::NAN, 0.0, 100.0), None);
    }
}
