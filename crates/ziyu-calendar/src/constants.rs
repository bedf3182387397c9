//! Leap-cycle and month tables shared by the forward and inverse converters.
//!
//! A [`CycleConstants`] value is built once (normally via
//! [`CycleConstants::gonghe`]) and only ever borrowed afterwards. Every
//! constructor, including serde deserialization, goes through the same
//! validation so a converter never sees an inconsistent table.

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};

/// Number of months in every year.
pub const MONTHS_PER_YEAR: u8 = 12;

/// Cumulative days before each month, plus the leap-year total as the 13th entry.
pub const GONGHE_MONTH_TABLE: [i64; 13] = [
    0, 30, 61, 91, 122, 152, 183, 213, 244, 274, 305, 335, 366,
];

/// Day count of the last day of year 0 (the day before `(1, 1, 1)`).
pub const GONGHE_EPOCH_OFFSET: i64 = 800_973;

/// Raw, unvalidated form of [`CycleConstants`], as read from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawCycleConstants {
    pub small_cycle_years: i64,
    pub small_cycle_days: i64,
    pub large_cycle_years: i64,
    pub large_cycle_days: i64,
    pub month_table: [i64; 13],
    pub year_lengths: Vec<i64>,
    pub reference_year: i64,
    pub epoch_offset: i64,
}

/// Immutable leap-cycle configuration.
///
/// Invariants (enforced on construction):
/// - `year_lengths` has one entry per year of the small cycle; all are the
///   common length except the last, which is one day longer;
/// - `small_cycle_days` is the sum of `year_lengths`;
/// - the large cycle is a whole number of small cycles minus exactly one
///   leap day (`46751 = 32 * 1461 - 1`);
/// - `month_table` is cumulative from 0, ends at the leap-year length, and
///   only its last month can absorb the leap day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCycleConstants", into = "RawCycleConstants")]
pub struct CycleConstants {
    small_cycle_years: i64,
    small_cycle_days: i64,
    large_cycle_years: i64,
    large_cycle_days: i64,
    month_table: [i64; 13],
    year_lengths: Vec<i64>,
    reference_year: i64,
    epoch_offset: i64,
}

impl CycleConstants {
    /// The Gonghe calendar: 4-year/1461-day and 128-year/46751-day cycles,
    /// alternating 30/31-day months, day count 0 on `(-2192, 1, 3)`.
    pub fn gonghe() -> Self {
        Self {
            small_cycle_years: 4,
            small_cycle_days: 1461,
            large_cycle_years: 128,
            large_cycle_days: 46_751,
            month_table: GONGHE_MONTH_TABLE,
            year_lengths: vec![365, 365, 365, 366],
            reference_year: 1,
            epoch_offset: GONGHE_EPOCH_OFFSET,
        }
    }

    /// Validate a raw constant set.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidConstants` naming the first violated invariant.
    pub fn new(raw: RawCycleConstants) -> Result<Self> {
        let invalid = |msg: String| -> Result<Self> { Err(CalendarError::InvalidConstants(msg)) };

        if raw.small_cycle_years <= 0 || raw.large_cycle_years <= 0 {
            return invalid("cycle lengths in years must be positive".to_string());
        }
        if raw.year_lengths.len() as i64 != raw.small_cycle_years {
            return invalid(format!(
                "expected {} year lengths, got {}",
                raw.small_cycle_years,
                raw.year_lengths.len()
            ));
        }

        let common = raw.year_lengths[0];
        let (leap, commons) = match raw.year_lengths.split_last() {
            Some(split) => split,
            None => return invalid("year_lengths is empty".to_string()),
        };
        if common <= 0 || commons.iter().any(|&len| len != common) || *leap != common + 1 {
            return invalid(format!(
                "year_lengths must be common years followed by one leap year, got {:?}",
                raw.year_lengths
            ));
        }

        let sum: i64 = raw.year_lengths.iter().sum();
        if raw.small_cycle_days != sum {
            return invalid(format!(
                "small_cycle_days {} != sum of year lengths {}",
                raw.small_cycle_days, sum
            ));
        }

        if raw.large_cycle_years % raw.small_cycle_years != 0 {
            return invalid(format!(
                "large cycle ({} years) is not a multiple of the small cycle ({} years)",
                raw.large_cycle_years, raw.small_cycle_years
            ));
        }
        let expected_large =
            raw.large_cycle_years / raw.small_cycle_years * raw.small_cycle_days - 1;
        if raw.large_cycle_days != expected_large {
            return invalid(format!(
                "large_cycle_days {} != {} (one leap day suppressed per large cycle)",
                raw.large_cycle_days, expected_large
            ));
        }

        let table = &raw.month_table;
        if table[0] != 0 || table.windows(2).any(|w| w[1] <= w[0]) {
            return invalid("month_table must start at 0 and strictly increase".to_string());
        }
        if table[12] != *leap {
            return invalid(format!(
                "month_table ends at {} but a leap year has {} days",
                table[12], leap
            ));
        }
        if table[11] >= common {
            return invalid(
                "the last month must start before the end of a common year".to_string(),
            );
        }
        if let Some(w) = table.windows(2).find(|w| w[1] - w[0] > i64::from(u8::MAX)) {
            return invalid(format!(
                "month of {} days exceeds the {}-day limit",
                w[1] - w[0],
                u8::MAX
            ));
        }

        Ok(Self {
            small_cycle_years: raw.small_cycle_years,
            small_cycle_days: raw.small_cycle_days,
            large_cycle_years: raw.large_cycle_years,
            large_cycle_days: raw.large_cycle_days,
            month_table: raw.month_table,
            year_lengths: raw.year_lengths,
            reference_year: raw.reference_year,
            epoch_offset: raw.epoch_offset,
        })
    }

    pub fn small_cycle_years(&self) -> i64 {
        self.small_cycle_years
    }

    pub fn small_cycle_days(&self) -> i64 {
        self.small_cycle_days
    }

    pub fn large_cycle_years(&self) -> i64 {
        self.large_cycle_years
    }

    pub fn large_cycle_days(&self) -> i64 {
        self.large_cycle_days
    }

    /// Cumulative day offsets of each month; entry `m - 1` is the offset of month `m`.
    pub fn month_table(&self) -> &[i64; 13] {
        &self.month_table
    }

    /// Year lengths by position within the small cycle.
    pub fn year_lengths(&self) -> &[i64] {
        &self.year_lengths
    }

    pub fn common_year_length(&self) -> i64 {
        self.year_lengths[0]
    }

    /// The year counted from when computing elapsed years.
    pub fn reference_year(&self) -> i64 {
        self.reference_year
    }

    /// Day count of the day before `(reference_year, 1, 1)`.
    pub fn epoch_offset(&self) -> i64 {
        self.epoch_offset
    }

    /// Days from `(reference_year, 1, 1)` to `(year, 1, 1)`; negative before it.
    pub(crate) fn elapsed_days(&self, year: i64) -> i128 {
        let elapsed = year as i128 - self.reference_year as i128;
        let small = self.small_cycle_years as i128;
        let large = self.large_cycle_years as i128;
        let leap_days = elapsed.div_euclid(small) - elapsed.div_euclid(large);
        elapsed * self.common_year_length() as i128 + leap_days
    }

    /// Number of days in `year`.
    pub fn year_length(&self, year: i64) -> i64 {
        (self.elapsed_days(year.saturating_add(1)) - self.elapsed_days(year)) as i64
    }

    pub fn is_leap_year(&self, year: i64) -> bool {
        self.year_length(year) > self.common_year_length()
    }

    /// Number of days in `month` of `year`; the last month absorbs the leap day.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if `month` is not in `1..=12`.
    pub fn month_length(&self, year: i64, month: u8) -> Result<u8> {
        let index = month_index(month)?;
        let end = if month == MONTHS_PER_YEAR {
            self.year_length(year)
        } else {
            self.month_table[index + 1]
        };
        Ok((end - self.month_table[index]) as u8)
    }
}

impl Default for CycleConstants {
    fn default() -> Self {
        Self::gonghe()
    }
}

impl TryFrom<RawCycleConstants> for CycleConstants {
    type Error = CalendarError;

    fn try_from(raw: RawCycleConstants) -> Result<Self> {
        Self::new(raw)
    }
}

impl From<CycleConstants> for RawCycleConstants {
    fn from(c: CycleConstants) -> Self {
        Self {
            small_cycle_years: c.small_cycle_years,
            small_cycle_days: c.small_cycle_days,
            large_cycle_years: c.large_cycle_years,
            large_cycle_days: c.large_cycle_days,
            month_table: c.month_table,
            year_lengths: c.year_lengths,
            reference_year: c.reference_year,
            epoch_offset: c.epoch_offset,
        }
    }
}

/// Zero-based table index of a 1-based month.
pub(crate) fn month_index(month: u8) -> Result<usize> {
    if (1..=MONTHS_PER_YEAR).contains(&month) {
        Ok(month as usize - 1)
    } else {
        Err(CalendarError::InvalidMonth { month })
    }
}
