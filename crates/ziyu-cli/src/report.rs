//! Text and JSON rendering of command results.

use std::fmt::Write as _;

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use ziyu_calendar::naming::{sexagenary_name, weekday_name};
use ziyu_calendar::{to_date, CalendarDate, CycleConstants, DayCount, PeriodDay};
use ziyu_discovery::fraction::MixedApproximation;
use ziyu_discovery::{Approximation, CycleCandidate, LeapRule};

use crate::cli::Format;

/// Everything known about one day.
#[derive(Debug, Serialize)]
pub struct DayReport {
    pub day_count: DayCount,
    pub date: CalendarDate,
    pub julian_day: f64,
    pub gregorian: Option<NaiveDate>,
    pub sexagenary: String,
    pub weekday: &'static str,
    pub period: PeriodDay,
}

impl DayReport {
    pub fn new(constants: &CycleConstants, day_count: DayCount) -> Self {
        Self {
            day_count,
            date: to_date(constants, day_count),
            julian_day: day_count.julian_day(),
            gregorian: day_count.to_gregorian(),
            sexagenary: sexagenary_name(day_count.sexagenary_index()),
            weekday: weekday_name(day_count.weekday_index()),
            period: PeriodDay::split(day_count),
        }
    }

    fn to_text(&self) -> String {
        let gregorian = self
            .gregorian
            .map(|d| d.to_string())
            .unwrap_or_else(|| "out of range".to_string());
        let mut out = String::new();
        let _ = writeln!(out, "date:        {}", self.date);
        let _ = writeln!(out, "day count:   {}", self.day_count);
        let _ = writeln!(out, "julian day:  {}", self.julian_day);
        let _ = writeln!(out, "gregorian:   {gregorian}");
        let _ = writeln!(out, "sexagenary:  {}", self.sexagenary);
        let _ = writeln!(out, "weekday:     {}", self.weekday);
        let _ = writeln!(
            out,
            "period:      {} day {}",
            self.period.period, self.period.day
        );
        out
    }
}

pub fn day(format: Format, report: &DayReport) -> Result<String> {
    render(format, report, DayReport::to_text)
}

pub fn fractions(format: Format, report: &[Approximation]) -> Result<String> {
    render(format, report, |rows| {
        let mut out = String::from("      fraction               value  error\n");
        for a in rows {
            let _ = writeln!(
                out,
                "{:>14} {:>19.12}  {} {:.3e}{}",
                format!("{}/{}", a.numerator, a.denominator),
                a.value,
                a.comparison,
                a.abs_error(),
                if a.special { "  *" } else { "" }
            );
        }
        out
    })
}

pub fn mixed_fractions(format: Format, report: &[MixedApproximation]) -> Result<String> {
    render(format, report, |rows| {
        let mut out = String::from("      fraction               value  error\n");
        for m in rows {
            let a = &m.fraction;
            let _ = writeln!(
                out,
                "{:>14} {:>19.12}  {} {:.3e}{}",
                format!("{} + {}/{}", m.whole, a.numerator, a.denominator),
                m.whole as f64 + a.value,
                a.comparison,
                a.abs_error(),
                if a.special { "  *" } else { "" }
            );
        }
        out
    })
}

pub fn cycles(format: Format, report: &[CycleCandidate]) -> Result<String> {
    render(format, report, |rows| {
        let mut out =
            String::from("years  months  leap      days  time left  residual  same  60  7\n");
        for c in rows {
            let _ = writeln!(
                out,
                "{:>5} {:>7} {:>5} {:>9} {:>10.6} {:>9.6}  {:<4} {:<3} {:<1}{}",
                c.years,
                c.months,
                c.leap_months,
                c.days,
                c.time_left(),
                c.residual_time_error,
                mark(c.same_day),
                mark(c.aligns_with_60day_cycle),
                mark(c.aligns_with_7day_cycle),
                if c.notable { "  *" } else { "" }
            );
        }
        out
    })
}

pub fn leap_rules(format: Format, report: &[LeapRule]) -> Result<String> {
    render(format, report, |rows| {
        let mut out = String::from("years  leap days      mean year      error  drift (years)\n");
        for r in rows {
            let drift = r
                .drift_years
                .map(|d| format!("{d:.0}"))
                .unwrap_or_else(|| "never".to_string());
            let _ = writeln!(
                out,
                "{:>5} {:>10} {:>14.8} {:>10.3e}  {}{}",
                r.years,
                r.leap_days,
                r.mean_year,
                r.error,
                drift,
                if r.special { "  *" } else { "" }
            );
        }
        out
    })
}

fn render<T: Serialize + ?Sized>(
    format: Format,
    value: &T,
    text: impl Fn(&T) -> String,
) -> Result<String> {
    match format {
        Format::Text => Ok(text(value)),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(value)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn mark(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
