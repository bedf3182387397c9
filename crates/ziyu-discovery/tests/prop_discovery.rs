//! Property-based tests for the discovery searches using proptest.

use proptest::prelude::*;
use ziyu_discovery::fraction::find_fraction;
use ziyu_discovery::leap::find_leap_rule;

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn non_special_fractions_strictly_improve(x in -1000.0f64..1000.0, max in 2u64..2000) {
        let report = find_fraction(x, 1..max, &[]);
        for pair in report.windows(2) {
            prop_assert!(pair[1].abs_error() < pair[0].abs_error());
            prop_assert!(pair[1].denominator > pair[0].denominator);
        }
    }

    #[test]
    fn specials_do_not_disturb_the_improvement_filter(
        x in -100.0f64..100.0,
        special in prop::collection::vec(1u64..1000, 1..8),
    ) {
        let report = find_fraction(x, 1..1000, &special);
        let mut best = f64::INFINITY;
        for a in &report {
            if !a.special {
                prop_assert!(
                    a.abs_error() < best,
                    "{}/{} does not improve on {}", a.numerator, a.denominator, best
                );
            }
            if a.numerator != 0 && a.abs_error() < best {
                best = a.abs_error();
            }
        }
        // Same non-special entries as a search without specials, up to the
        // first special that improves.
        let plain = find_fraction(x, 1..1000, &[]);
        let first_improving_special = report
            .iter()
            .scan(f64::INFINITY, |best, a| {
                let improves = a.numerator != 0 && a.abs_error() < *best;
                if improves {
                    *best = a.abs_error();
                }
                Some((a, improves))
            })
            .find(|(a, improves)| a.special && *improves)
            .map(|(a, _)| a.denominator)
            .unwrap_or(u64::MAX);
        let before: Vec<_> = report
            .iter()
            .filter(|a| !a.special && a.denominator < first_improving_special)
            .collect();
        let plain_before: Vec<_> = plain
            .iter()
            .filter(|a| {
                a.denominator < first_improving_special && !special.contains(&a.denominator)
            })
            .collect();
        prop_assert_eq!(before, plain_before);
    }

    #[test]
    fn only_specials_have_zero_numerators(
        x in -10.0f64..10.0,
        special in prop::collection::vec(1u64..500, 0..5),
    ) {
        let report = find_fraction(x, 1..500, &special);
        for a in &report {
            prop_assert!(a.numerator != 0 || a.special);
            prop_assert_eq!(a.special, special.contains(&a.denominator));
            prop_assert!((a.value - x - a.error).abs() < 1e-9);
        }
    }

    #[test]
    fn specials_always_reported(x in 1.0f64..400.0, q in 1u64..300) {
        let report = find_fraction(x, 1..300, &[q]);
        prop_assert!(report.iter().any(|a| a.denominator == q && a.special));
    }

    #[test]
    fn leap_rules_never_worsen(year in 365.0f64..366.0) {
        let rules = find_leap_rule(year, 500, &[]);
        for pair in rules.windows(2) {
            prop_assert!(pair[1].error <= pair[0].error);
        }
    }
}
