//! # ziyu-calendar
//!
//! Exact arithmetic for the Ziyu day count and the proleptic Gonghe calendar.
//!
//! The calendar uses a compound leap rule: one leap day every 4 years, except
//! that the last 4-year leap of every 128 years is dropped (31 leap days per
//! 128 years, a mean year of 365.2421875 days). Months alternate 30 and 31
//! days; the 12th month has 31 days only in leap years. Day count 0 is
//! `(-2192, 1, 3)`, a winter-solstice new-moon 甲子 day.
//!
//! ## Quick start
//!
//! ```rust
//! use ziyu_calendar::{forward, inverse, CycleConstants, DayCount};
//!
//! let c = CycleConstants::gonghe();
//! let date = inverse::to_date(&c, DayCount::new(800_609));
//! assert_eq!(date.ymd(), (0, 1, 1));
//!
//! let back = forward::to_day_count(&c, 0, 1, 1, 0.0).unwrap();
//! assert_eq!(back, DayCount::new(800_609));
//! ```
//!
//! ## Modules
//!
//! - [`constants`]: `CycleConstants`, the leap-cycle and month tables
//! - [`day_count`]: `DayCount`, a fixed-point linear day count, Julian/Gregorian bridges
//! - [`date`]: `CalendarDate`
//! - [`forward`]: date → day count (closed form)
//! - [`inverse`]: day count → date (cycle peeling, plus a closed-form cross-check)
//! - [`period`]: 4418-year periods
//! - [`naming`]: sexagenary and weekday names
//! - [`error`]: Error types

pub mod constants;
pub mod date;
pub mod day_count;
pub mod error;
pub mod forward;
pub mod inverse;
pub mod naming;
pub mod period;

pub use constants::{CycleConstants, RawCycleConstants};
pub use date::CalendarDate;
pub use day_count::DayCount;
pub use error::CalendarError;
pub use forward::to_day_count;
pub use inverse::to_date;
pub use period::PeriodDay;
