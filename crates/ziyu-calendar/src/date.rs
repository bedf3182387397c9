//! Structured Gonghe calendar dates.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::constants::CycleConstants;
use crate::day_count::DayCount;
use crate::error::{CalendarError, Result};
use crate::{forward, inverse};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// A `(year, month, day, time)` date. Year 0 exists; years before it are negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i64,
    /// `1..=12`
    pub month: u8,
    /// `1..=month_length(year, month)`
    pub day: u8,
    /// Time of day in `[0, 1)`.
    pub time: f64,
}

impl CalendarDate {
    /// Build a date, checking month, day and time against `constants`.
    ///
    /// # Errors
    /// `InvalidMonth`, `InvalidDay`, or `InvalidInput` for a time outside `[0, 1)`.
    pub fn new(
        constants: &CycleConstants,
        year: i64,
        month: u8,
        day: u8,
        time: f64,
    ) -> Result<Self> {
        let max_day = constants.month_length(year, month)?;
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        if !(0.0..1.0).contains(&time) {
            return Err(CalendarError::InvalidInput(format!(
                "time of day must be in [0, 1), got {time}"
            )));
        }
        Ok(Self {
            year,
            month,
            day,
            time,
        })
    }

    /// Inverse conversion, see [`inverse::to_date`].
    pub fn from_day_count(constants: &CycleConstants, day_count: DayCount) -> Self {
        inverse::to_date(constants, day_count)
    }

    /// Forward conversion, see [`forward::to_day_count`].
    ///
    /// # Errors
    /// Propagates the forward converter's errors.
    pub fn to_day_count(&self, constants: &CycleConstants) -> Result<DayCount> {
        forward::to_day_count(
            constants,
            self.year,
            self.month,
            u32::from(self.day),
            self.time,
        )
    }

    pub fn ymd(&self) -> (i64, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// 1-based day of the year.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if `month` is out of range.
    pub fn day_of_year(&self, constants: &CycleConstants) -> Result<i64> {
        let index = crate::constants::month_index(self.month)?;
        Ok(constants.month_table()[index] + i64::from(self.day))
    }

    /// Wall-clock view of `time`, truncated to whole seconds.
    pub fn time_of_day(&self) -> Option<NaiveTime> {
        fraction_to_time(self.time)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.time > 0.0 {
            if let Some(t) = self.time_of_day() {
                write!(f, "T{}", t.format("%H:%M:%S"))?;
            }
        }
        Ok(())
    }
}

/// Convert a day fraction in `[0, 1)` to a time of day, truncated to seconds.
pub fn fraction_to_time(fraction: f64) -> Option<NaiveTime> {
    if !(0.0..1.0).contains(&fraction) {
        return None;
    }
    let seconds = ((fraction * SECONDS_PER_DAY).floor() as u32).min(86_399);
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
}
