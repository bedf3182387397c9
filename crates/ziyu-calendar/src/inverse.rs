//! Inverse conversion: day count → calendar date.
//!
//! Two independently derived formulations live here:
//!
//! - [`to_date`] peels the count apart cycle by cycle (large cycle, small
//!   cycles, years, months). This is the canonical converter.
//! - [`to_date_closed_form`] takes floor-division quotients on every level
//!   and finds the month by binary search. It exists as a cross-check and
//!   must agree with [`to_date`] on every input.
//!
//! Day counts are offset so that `ed = 1` is `(reference_year, 1, 1)`. Each
//! level maps its remainder into `1..=length`, so an exact multiple of a
//! cycle length closes the *previous* cycle: `ed = 0` is the last day of
//! year `reference_year - 1`, not the first day of a new cycle.

use tracing::trace;

use crate::constants::CycleConstants;
use crate::date::CalendarDate;
use crate::day_count::DayCount;

/// Convert a day count to a calendar date by cycle peeling.
///
/// Total over all day counts, including large negative ones: the large-cycle
/// step is a floor-division decomposition, so pre-epoch counts need no
/// padding loop.
pub fn to_date(constants: &CycleConstants, day_count: DayCount) -> CalendarDate {
    let small_days = i128::from(constants.small_cycle_days());
    let ed = i128::from(day_count.day()) - i128::from(constants.epoch_offset());

    // Remainder in 1..=large_cycle_days.
    let large_days = i128::from(constants.large_cycle_days());
    let cycles = (ed - 1).div_euclid(large_days);
    let mut rest = (ed - 1).rem_euclid(large_days) + 1;
    trace!(day = day_count.day(), cycles, rest, "large-cycle decomposition");

    let mut years = cycles * i128::from(constants.large_cycle_years());

    while rest > small_days {
        rest -= small_days;
        years += i128::from(constants.small_cycle_years());
    }

    for &length in constants.year_lengths() {
        let length = i128::from(length);
        if rest <= length {
            break;
        }
        rest -= length;
        years += 1;
    }

    let table = constants.month_table();
    let mut month = 1usize;
    while month < 12 && rest > i128::from(table[month]) {
        month += 1;
    }
    let day = rest - i128::from(table[month - 1]);

    build_date(constants, years, month, day, day_count.fraction())
}

/// Convert a day count to a calendar date without loops.
///
/// Equivalent to [`to_date`]; used to validate it.
pub fn to_date_closed_form(constants: &CycleConstants, day_count: DayCount) -> CalendarDate {
    let ed = i128::from(day_count.day()) - i128::from(constants.epoch_offset());

    let (q_large, r_large) = quotient_closing_previous(ed, constants.large_cycle_days());
    let (q_small, r_small) = quotient_closing_previous(r_large, constants.small_cycle_days());

    let common = i128::from(constants.common_year_length());
    let last_position = i128::from(constants.small_cycle_years()) - 1;
    let position = ((r_small - 1) / common).min(last_position);
    let day_of_year = r_small - position * common;

    let table = constants.month_table();
    let month = table.partition_point(|&start| i128::from(start) < day_of_year);
    let day = day_of_year - i128::from(table[month - 1]);

    let years = q_large * i128::from(constants.large_cycle_years())
        + q_small * i128::from(constants.small_cycle_years())
        + position;
    build_date(constants, years, month, day, day_count.fraction())
}

/// `(q, r)` with `value = q * length + r` and `r` in `1..=length`.
fn quotient_closing_previous(value: i128, length: i64) -> (i128, i128) {
    let length = i128::from(length);
    let (q, r) = (value.div_euclid(length), value.rem_euclid(length));
    if r == 0 {
        (q - 1, length)
    } else {
        (q, r)
    }
}

fn build_date(
    constants: &CycleConstants,
    years_since_reference: i128,
    month: usize,
    day: i128,
    time: f64,
) -> CalendarDate {
    // |years| < |day count| / 365, so the year always fits an i64.
    let year = (i128::from(constants.reference_year()) + years_since_reference) as i64;
    CalendarDate {
        year,
        month: month as u8,
        day: day as u8,
        time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i64, month: u8, day: u8) -> CalendarDate {
        CalendarDate {
            year,
            month,
            day,
            time: 0.0,
        }
    }

    #[test]
    fn exact_zero_residue_closes_previous_year() {
        let c = CycleConstants::gonghe();
        let dc = DayCount::new(c.epoch_offset());
        assert_eq!(to_date(&c, dc), date(0, 12, 30));
        assert_eq!(to_date_closed_form(&c, dc), date(0, 12, 30));
    }

    #[test]
    fn quotient_closing_previous_maps_multiples_to_length() {
        assert_eq!(quotient_closing_previous(0, 1461), (-1, 1461));
        assert_eq!(quotient_closing_previous(1461, 1461), (0, 1461));
        assert_eq!(quotient_closing_previous(1462, 1461), (1, 1));
        assert_eq!(quotient_closing_previous(-1, 1461), (-1, 1460));
    }

    #[test]
    fn extreme_day_counts_do_not_panic() {
        let c = CycleConstants::gonghe();
        for day in [i64::MIN, i64::MAX] {
            let a = to_date(&c, DayCount::new(day));
            let b = to_date_closed_form(&c, DayCount::new(day));
            assert_eq!(a, b);
        }
    }
}
