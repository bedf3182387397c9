//! Sexagenary (干支) and weekday names.
//!
//! Both cycles are calibrated on Julian-day input: `sexagenary_index` of
//! JD 2458810.5 (2019-11-23) is 0 (甲子), and `weekday_index` 0 is Sunday.
//! [`DayCount`](crate::DayCount) exposes the same indices through its JDN.

use crate::error::{CalendarError, Result};

pub const HEAVENLY_STEMS: [&str; 10] = [
    "甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸",
];

pub const EARTHLY_BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// `(floor(day_count + 0.5) - 11) mod 60`, always in `0..60`.
///
/// # Errors
/// Returns `CalendarError::InvalidInput` for NaN or infinity.
pub fn sexagenary_index(day_count: f64) -> Result<u8> {
    let day = civil_day(day_count)?;
    Ok((day - 11.0).rem_euclid(60.0) as u8)
}

/// `(floor(day_count + 0.5) + 1) mod 7`, `0` = Sunday.
///
/// # Errors
/// Returns `CalendarError::InvalidInput` for NaN or infinity.
pub fn weekday_index(day_count: f64) -> Result<u8> {
    let day = civil_day(day_count)?;
    Ok((day + 1.0).rem_euclid(7.0) as u8)
}

pub fn sexagenary_index_of_jdn(jdn: i64) -> u8 {
    (jdn as i128 - 11).rem_euclid(60) as u8
}

pub fn weekday_index_of_jdn(jdn: i64) -> u8 {
    (jdn as i128 + 1).rem_euclid(7) as u8
}

/// Stem and branch advancing in lockstep: `0` → 甲子, `59` → 癸亥.
pub fn sexagenary_name(index: u8) -> String {
    let index = index as usize % 60;
    format!(
        "{}{}",
        HEAVENLY_STEMS[index % 10],
        EARTHLY_BRANCHES[index % 12]
    )
}

pub fn weekday_name(index: u8) -> &'static str {
    WEEKDAY_NAMES[index as usize % 7]
}

fn civil_day(day_count: f64) -> Result<f64> {
    if day_count.is_finite() {
        Ok((day_count + 0.5).floor())
    } else {
        Err(CalendarError::InvalidInput(format!(
            "day count must be finite, got {day_count}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_names_wrap() {
        assert_eq!(sexagenary_name(0), "甲子");
        assert_eq!(sexagenary_name(1), "乙丑");
        assert_eq!(sexagenary_name(10), "甲戌");
        assert_eq!(sexagenary_name(59), "癸亥");
        assert_eq!(sexagenary_name(60), "甲子");
    }

    #[test]
    fn known_julian_days() {
        // 2019-11-23, a 甲子 Saturday.
        assert_eq!(sexagenary_index(2_458_810.5), Ok(0));
        assert_eq!(weekday_index(2_458_810.5), Ok(6));
        // 1912-02-18 was 甲子, 1910-10-10 was 戊申.
        assert_eq!(sexagenary_index(2_419_450.5), Ok(0));
        assert_eq!(sexagenary_name(sexagenary_index(2_418_954.5).unwrap()), "戊申");
    }

    #[test]
    fn negative_input_stays_in_range() {
        let index = sexagenary_index(-1_000_000.3).unwrap();
        assert!(index < 60);
        let weekday = weekday_index(-1_000_000.3).unwrap();
        assert!(weekday < 7);
        assert!(sexagenary_index_of_jdn(i64::MIN) < 60);
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(sexagenary_index(f64::NAN).is_err());
        assert!(weekday_index(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn weekday_names() {
        assert_eq!(weekday_name(0), "Sun");
        assert_eq!(weekday_name(6), "Sat");
    }
}
