//! Splitting a day count into periods (紀) of 4418 years.
//!
//! 4418 tropical years, 54643 synodic months and 1613640 days coincide to
//! within a day, and 1613640 is a multiple of 60, so every period starts on a
//! winter-solstice new-moon 甲子 day. `PeriodDay { period: 1, day: 0 }` and
//! day count 1613640 name the same day.

use serde::{Deserialize, Serialize};

use crate::day_count::DayCount;
use crate::error::{CalendarError, Result};

pub const PERIOD_YEARS: i64 = 4418;
pub const PERIOD_MONTHS: i64 = 54_643;
pub const PERIOD_DAYS: i64 = 1_613_640;

/// A day count expressed as `(period, day within period)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodDay {
    pub period: i64,
    /// Always in `[0, PERIOD_DAYS)`.
    pub day: DayCount,
}

impl PeriodDay {
    /// Floor-divide by the period length; the fraction stays on the day.
    pub fn split(day_count: DayCount) -> Self {
        let period = day_count.day().div_euclid(PERIOD_DAYS);
        let day = day_count.day().rem_euclid(PERIOD_DAYS);
        Self {
            period,
            day: DayCount::from_valid_parts(day, day_count.fraction()),
        }
    }

    /// Recombine into a linear day count.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the result overflows `i64`.
    pub fn join(&self) -> Result<DayCount> {
        self.period
            .checked_mul(PERIOD_DAYS)
            .and_then(|start| self.day.checked_add_days(start))
            .ok_or_else(|| {
                CalendarError::OutOfRange(format!(
                    "period {} day {} does not fit a 64-bit day count",
                    self.period, self.day
                ))
            })
    }
}
