//! Forward conversion: calendar date → day count, in closed form.

use crate::constants::{month_index, CycleConstants};
use crate::day_count::DayCount;
use crate::error::{CalendarError, Result};

/// Convert `(year, month, day, time)` to a day count.
///
/// ```text
/// elapsed   = year - reference_year
/// leap_days = floor(elapsed / small_cycle_years) - floor(elapsed / large_cycle_years)
/// count     = elapsed * 365 + leap_days + month_table[month - 1] + day + time + epoch_offset
/// ```
///
/// Floor division keeps negative (proleptic) years on the same rule.
///
/// `day` is **not** checked against the month's length; that is the caller's
/// precondition. An out-of-range day simply counts on past the month end, and
/// a `time` outside `[0, 1)` carries into the day.
///
/// # Errors
/// - `CalendarError::InvalidMonth` if `month` is not in `1..=12`
/// - `CalendarError::InvalidInput` if `time` is NaN or infinite
/// - `CalendarError::OutOfRange` if the result does not fit in an `i64` day
pub fn to_day_count(
    constants: &CycleConstants,
    year: i64,
    month: u8,
    day: u32,
    time: f64,
) -> Result<DayCount> {
    if !time.is_finite() {
        return Err(CalendarError::InvalidInput(format!(
            "time of day must be finite, got {time}"
        )));
    }
    let index = month_index(month)?;

    let total = constants.elapsed_days(year)
        + i128::from(constants.month_table()[index])
        + i128::from(day)
        + i128::from(constants.epoch_offset());
    let whole = i64::try_from(total).map_err(|_| {
        CalendarError::OutOfRange(format!("year {year} is beyond the 64-bit day count"))
    })?;

    DayCount::from_parts(whole, time)
}
