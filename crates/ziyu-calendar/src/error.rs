//! Error types for ziyu-calendar operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalendarError {
    /// Non-finite (NaN or infinite) numeric input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: u8 },

    #[error("Invalid day: {day} for month {month} of year {year} (max {max_day})")]
    InvalidDay {
        year: i64,
        month: u8,
        day: u8,
        max_day: u8,
    },

    #[error("Invalid cycle constants: {0}")]
    InvalidConstants(String),

    /// The result does not fit the 64-bit day count.
    #[error("Out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, CalendarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_month_message() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "Invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn invalid_day_message() {
        let err = CalendarError::InvalidDay {
            year: 0,
            month: 12,
            day: 31,
            max_day: 30,
        };
        assert_eq!(
            err.to_string(),
            "Invalid day: 31 for month 12 of year 0 (max 30)"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
    }
}
