//! Rational approximations of the year, the month and their ratio.

use ziyu_discovery::fraction::{
    find_fraction, find_fraction_upto, find_mixed_fraction, Approximation, Comparison,
};
use ziyu_discovery::{SYNODIC_MONTH, TROPICAL_YEAR};

fn pairs(report: &[Approximation]) -> Vec<(i64, u64)> {
    report.iter().map(|a| (a.numerator, a.denominator)).collect()
}

// ---------------------------------------------------------------------------
// Tropical year
// ---------------------------------------------------------------------------

#[test]
fn year_approximations_start_with_small_cycles() {
    let report = find_fraction(365.24219, 1..10_000, &[2209]);
    assert_eq!(
        pairs(&report[..6]),
        vec![(365, 1), (1096, 3), (1461, 4), (6209, 17), (7670, 21), (9131, 25)]
    );
}

#[test]
fn year_approximations_include_large_cycle() {
    let report = find_fraction(365.24219, 1..10_000, &[2209]);
    let large = report
        .iter()
        .find(|a| a.denominator == 128)
        .expect("128 improves on 95");
    assert_eq!(large.numerator, 46_751);
    assert!(!large.special);
    assert!(large.abs_error() < 3e-6);
    assert_eq!(large.comparison, Comparison::Above);
}

#[test]
fn special_denominator_is_flagged() {
    let report = find_fraction(365.24219, 1..10_000, &[2209]);
    let specials: Vec<_> = report.iter().filter(|a| a.special).collect();
    assert_eq!(specials.len(), 1);
    assert_eq!(specials[0].denominator, 2209);
    assert_eq!(specials[0].numerator, 806_820);
}

#[test]
fn year_approximations_end_at_3105() {
    let report = find_fraction(365.24219, 1..10_000, &[2209]);
    assert_eq!(report.len(), 23);
    let last = report.last().unwrap();
    assert_eq!((last.numerator, last.denominator), (1_134_077, 3105));
}

#[test]
fn non_special_entries_strictly_improve() {
    let report = find_fraction(TROPICAL_YEAR, 1..10_000, &[]);
    for pair in report.windows(2) {
        assert!(
            pair[1].abs_error() < pair[0].abs_error(),
            "{}/{} does not improve on {}/{}",
            pair[1].numerator,
            pair[1].denominator,
            pair[0].numerator,
            pair[0].denominator
        );
    }
}

#[test]
fn upto_matches_range_without_specials() {
    assert_eq!(
        find_fraction_upto(TROPICAL_YEAR, 500),
        find_fraction(TROPICAL_YEAR, 1..500, &[])
    );
}

// ---------------------------------------------------------------------------
// Fractional part only
// ---------------------------------------------------------------------------

#[test]
fn mixed_fraction_of_year() {
    let report = find_mixed_fraction(365.24219, 10_000, &[2209]);
    assert!(report.iter().all(|m| m.whole == 365));

    // 0/1 and 0/2 are skipped; 1/3 is the first entry.
    assert_eq!(
        (report[0].fraction.numerator, report[0].fraction.denominator),
        (1, 3)
    );
    assert!(report
        .iter()
        .any(|m| (m.fraction.numerator, m.fraction.denominator) == (31, 128)));

    let special = report.iter().find(|m| m.fraction.special).unwrap();
    assert_eq!(special.fraction.denominator, 2209);
    assert_eq!(special.fraction.numerator, 535);
    assert_eq!(special.improper_numerator(), 806_820);

    let last = report.last().unwrap();
    assert_eq!((last.fraction.numerator, last.fraction.denominator), (752, 3105));
}

// ---------------------------------------------------------------------------
// Synodic month and the year/month ratio
// ---------------------------------------------------------------------------

#[test]
fn month_specials_reported_without_improving() {
    let report = find_fraction(SYNODIC_MONTH, 1..10_000, &[81, 940]);
    let specials: Vec<(i64, u64)> = report
        .iter()
        .filter(|a| a.special)
        .map(|a| (a.numerator, a.denominator))
        .collect();
    assert_eq!(specials, vec![(2392, 81), (27_759, 940)]);

    let last = report.last().unwrap();
    assert_eq!((last.numerator, last.denominator), (181_495, 6146));
}

#[test]
fn metonic_ratio() {
    let report = find_fraction(TROPICAL_YEAR / SYNODIC_MONTH, 1..1000, &[19]);
    let metonic = report.iter().find(|a| a.denominator == 19).unwrap();
    assert_eq!(metonic.numerator, 235);
    assert!(metonic.special);
}

// ---------------------------------------------------------------------------
// Edge cases
// ---------------------------------------------------------------------------

#[test]
fn non_finite_target_is_empty() {
    assert!(find_fraction(f64::NAN, 1..100, &[]).is_empty());
    assert!(find_fraction(f64::INFINITY, 1..100, &[]).is_empty());
    assert!(find_mixed_fraction(f64::NEG_INFINITY, 100, &[]).is_empty());
}

#[test]
fn special_denominator_with_zero_numerator_is_reported() {
    let report = find_fraction(0.1, 1..10, &[2]);
    assert_eq!(report[0].numerator, 0);
    assert_eq!(report[0].denominator, 2);
    assert!(report[0].special);
    // 0/2 does not count as an improvement, so 1/5 is still reported.
    assert_eq!(
        pairs(&report),
        vec![(0, 2), (1, 5), (1, 6), (1, 7), (1, 8), (1, 9)]
    );
}

#[test]
fn zero_numerator_is_skipped_when_not_special() {
    let report = find_fraction(0.1, 1..10, &[]);
    assert!(report.iter().all(|a| a.numerator != 0));
    assert_eq!(report[0].denominator, 5);
}

#[test]
fn zero_denominator_is_skipped() {
    let report = find_fraction(2.0, 0..4, &[]);
    assert_eq!(pairs(&report), vec![(2, 1)]);
}

#[test]
fn empty_range_is_empty() {
    assert!(find_fraction(TROPICAL_YEAR, 10..10, &[10]).is_empty());
}

#[test]
fn negative_target() {
    let report = find_fraction(-1.5, 1..4, &[]);
    assert_eq!(pairs(&report), vec![(-1, 1), (-3, 2)]);
    assert_eq!(report[0].comparison, Comparison::Above);
}

#[test]
fn serializes_comparison_as_symbol() {
    let report = find_fraction(365.24219, 1..5, &[]);
    let json = serde_json::to_value(&report[0]).unwrap();
    assert_eq!(json["comparison"], "<");
    assert_eq!(json["numerator"], 365);
}
