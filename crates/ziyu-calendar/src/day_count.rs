//! The linear day count ("Ziyu day"): whole days since the epoch plus a
//! separately tracked time of day.
//!
//! Keeping the fraction apart from the integer day means very large day
//! counts keep full sub-day precision, which a single `f64` would not.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};
use crate::naming;

/// Julian Day (JD) of day count 0 at midnight.
pub const JULIAN_DAY_OF_EPOCH: f64 = 613_270.5;

/// Julian Day Number (JDN) of the civil day that day count 0 names.
pub const JULIAN_DAY_NUMBER_OF_EPOCH: i64 = 613_271;

/// JDN minus chrono's `num_days_from_ce` (0001-01-01 proleptic Gregorian is day 1, JDN 1721426).
const JDN_OF_CE_DAY_ZERO: i64 = 1_721_425;

/// A signed day count with a time-of-day fraction in `[0, 1)`.
///
/// `-3.25` is stored as day `-4`, fraction `0.75`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "DayCountParts")]
pub struct DayCount {
    day: i64,
    fraction: f64,
}

#[derive(Deserialize)]
struct DayCountParts {
    day: i64,
    #[serde(default)]
    fraction: f64,
}

impl TryFrom<DayCountParts> for DayCount {
    type Error = CalendarError;

    fn try_from(parts: DayCountParts) -> Result<Self> {
        DayCount::from_parts(parts.day, parts.fraction)
    }
}

impl DayCount {
    /// Day count 0, midnight.
    pub const EPOCH: DayCount = DayCount {
        day: 0,
        fraction: 0.0,
    };

    /// A whole day at midnight.
    pub const fn new(day: i64) -> Self {
        Self { day, fraction: 0.0 }
    }

    /// Build from a day and a fraction; a fraction outside `[0, 1)` carries into the day.
    ///
    /// # Errors
    /// `InvalidInput` for a non-finite fraction, `OutOfRange` if the carry overflows.
    pub fn from_parts(day: i64, fraction: f64) -> Result<Self> {
        if !fraction.is_finite() {
            return Err(CalendarError::InvalidInput(format!(
                "time of day must be finite, got {fraction}"
            )));
        }
        let carry = fraction.floor();
        let carry_days = float_to_day(carry)?;
        let mut day = day
            .checked_add(carry_days)
            .ok_or_else(|| out_of_range(day as f64 + carry))?;
        let mut fraction = fraction - carry;
        // A tiny negative fraction can round up to exactly 1.0.
        if fraction >= 1.0 {
            fraction = 0.0;
            day = day.checked_add(1).ok_or_else(|| out_of_range(day as f64))?;
        }
        Ok(Self { day, fraction })
    }

    /// Split a real-valued day count into whole day and fraction.
    ///
    /// # Errors
    /// `InvalidInput` for NaN or infinity, `OutOfRange` beyond the `i64` day range.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(CalendarError::InvalidInput(format!(
                "day count must be finite, got {value}"
            )));
        }
        let day = value.floor();
        Self::from_parts(float_to_day(day)?, value - day)
    }

    /// Caller guarantees `fraction` is in `[0, 1)`.
    pub(crate) fn from_valid_parts(day: i64, fraction: f64) -> Self {
        Self { day, fraction }
    }

    pub fn day(&self) -> i64 {
        self.day
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Lossy single-float view.
    pub fn to_f64(&self) -> f64 {
        self.day as f64 + self.fraction
    }

    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        self.day.checked_add(days).map(|day| Self { day, ..self })
    }

    /// Convert from a Julian Day (JD, days starting at noon).
    ///
    /// # Errors
    /// Same as [`DayCount::from_f64`].
    pub fn from_julian_day(jd: f64) -> Result<Self> {
        Self::from_f64(jd - JULIAN_DAY_OF_EPOCH)
    }

    pub fn julian_day(&self) -> f64 {
        (self.day as f64 + JULIAN_DAY_OF_EPOCH) + self.fraction
    }

    /// JDN of the civil day (midnight to midnight) this count falls on.
    pub fn julian_day_number(&self) -> i64 {
        self.day.saturating_add(JULIAN_DAY_NUMBER_OF_EPOCH)
    }

    /// Day count of midnight at the start of a proleptic Gregorian date.
    pub fn from_gregorian(date: NaiveDate) -> Self {
        let jdn = date.num_days_from_ce() as i64 + JDN_OF_CE_DAY_ZERO;
        Self::new(jdn - JULIAN_DAY_NUMBER_OF_EPOCH)
    }

    /// The proleptic Gregorian date, if it is inside chrono's range.
    pub fn to_gregorian(&self) -> Option<NaiveDate> {
        let ce_day = self
            .julian_day_number()
            .checked_sub(JDN_OF_CE_DAY_ZERO)
            .and_then(|d| i32::try_from(d).ok())?;
        NaiveDate::from_num_days_from_ce_opt(ce_day)
    }

    /// Index in the 60-day cycle; the epoch is 甲子 (0).
    pub fn sexagenary_index(&self) -> u8 {
        naming::sexagenary_index_of_jdn(self.julian_day_number())
    }

    /// Weekday index, `0` = Sunday.
    pub fn weekday_index(&self) -> u8 {
        naming::weekday_index_of_jdn(self.julian_day_number())
    }
}

impl From<i64> for DayCount {
    fn from(day: i64) -> Self {
        Self::new(day)
    }
}

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fraction == 0.0 {
            write!(f, "{}", self.day)
        } else {
            write!(f, "{}", self.to_f64())
        }
    }
}

impl FromStr for DayCount {
    type Err = CalendarError;

    /// Integers parse exactly; anything else goes through `f64`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(day) = s.parse::<i64>() {
            return Ok(Self::new(day));
        }
        let value: f64 = s
            .parse()
            .map_err(|_| CalendarError::InvalidInput(format!("not a day count: {s:?}")))?;
        Self::from_f64(value)
    }
}

/// Convert an integral float to a day, rejecting values outside `i64`.
fn float_to_day(value: f64) -> Result<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound.
    if value >= i64::MIN as f64 && value < i64::MAX as f64 {
        Ok(value as i64)
    } else {
        Err(out_of_range(value))
    }
}

fn out_of_range(value: f64) -> CalendarError {
    CalendarError::OutOfRange(format!("day count {value} does not fit in 64 bits"))
}
