//! Property-based tests for the minimization engines.
//!
//! The oracle family used here is superset-monotone: FAIL iff the
//! candidate contains every index of a hidden target set. For that family
//! the unique 1-minimal failing configuration is the target itself, which
//! makes the classical properties (1-minimality, idempotence, cache
//! transparency) directly checkable with proptest.

use deltamin::{Configuration, MinimizeConfig, Minimizer, Verdict};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn quick() -> MinimizeConfig {
    MinimizeConfig {
        oracle_timeout: None,
        ..MinimizeConfig::default()
    }
}

fn universe_of(n: usize) -> Configuration<u8> {
    Configuration::universe(vec![b'x'; n])
}

/// FAIL iff every target index survives in the candidate.
fn monotone_oracle(target: BTreeSet<u32>) -> impl Fn(&Configuration<u8>) -> Verdict + Sync {
    move |c: &Configuration<u8>| {
        if target.iter().all(|&i| c.contains(i)) {
            Verdict::Fail
        } else {
            Verdict::Pass
        }
    }
}

fn arb_case() -> impl Strategy<Value = (usize, BTreeSet<u32>)> {
    (2usize..24).prop_flat_map(|n| {
        let max_target = n.min(5);
        (
            Just(n),
            proptest::collection::btree_set(0..u32::try_from(n).unwrap(), 1..=max_target),
        )
    })
}

proptest! {
    /// For a monotone oracle the unique 1-minimal configuration is the
    /// target set itself, in ascending index order.
    #[test]
    fn ddmin_recovers_the_exact_target((n, target) in arb_case()) {
        let minimizer = Minimizer::with_config(monotone_oracle(target.clone()), quick());
        let result = minimizer.ddmin(universe_of(n)).unwrap();
        let found: BTreeSet<u32> = result.minimal.indices().collect();
        prop_assert_eq!(found, target);
    }

    /// 1-minimality, checked against the oracle directly: the result
    /// FAILs and removing any single delta stops it failing.
    #[test]
    fn ddmin_result_is_one_minimal((n, target) in arb_case()) {
        let oracle = monotone_oracle(target);
        let minimizer = Minimizer::with_config(&oracle, quick());
        let result = minimizer.ddmin(universe_of(n)).unwrap();

        prop_assert_eq!(oracle(&result.minimal), Verdict::Fail);
        for index in result.minimal.indices().collect::<Vec<_>>() {
            prop_assert_ne!(oracle(&result.minimal.without(index)), Verdict::Fail);
        }
    }

    /// An already-minimal input is a fixed point.
    #[test]
    fn ddmin_is_idempotent((n, target) in arb_case()) {
        let oracle = monotone_oracle(target);
        let minimizer = Minimizer::with_config(&oracle, quick());
        let first = minimizer.ddmin(universe_of(n)).unwrap();
        let second = minimizer.ddmin(first.minimal.clone()).unwrap();
        prop_assert_eq!(second.minimal, first.minimal);
    }

    /// The result never grows, and is a subset of the universe.
    #[test]
    fn ddmin_never_grows((n, target) in arb_case()) {
        let minimizer = Minimizer::with_config(monotone_oracle(target), quick());
        let universe = universe_of(n);
        let result = minimizer.ddmin(universe.clone()).unwrap();
        prop_assert!(result.minimal.len() <= universe.len());
        prop_assert!(result.minimal.is_subset_of(&universe));
    }

    /// Enabling or disabling the outcome cache changes only the call
    /// counts, never the minimized configuration.
    #[test]
    fn cache_toggle_is_transparent((n, target) in arb_case()) {
        let oracle = monotone_oracle(target);
        let with_cache = Minimizer::with_config(&oracle, quick());
        let without_cache = Minimizer::with_config(&oracle, MinimizeConfig {
            cache_outcomes: false,
            oracle_timeout: None,
            ..MinimizeConfig::default()
        });

        let cached = with_cache.ddmin(universe_of(n)).unwrap();
        let uncached = without_cache.ddmin(universe_of(n)).unwrap();
        prop_assert_eq!(cached.minimal, uncached.minimal);
        prop_assert!(cached.stats.oracle_calls <= uncached.stats.oracle_calls);
    }

    /// Oracle calls stay polynomial in the universe size.
    #[test]
    fn ddmin_call_count_is_polynomial((n, target) in arb_case()) {
        let minimizer = Minimizer::with_config(monotone_oracle(target), quick());
        let result = minimizer.ddmin(universe_of(n)).unwrap();
        let bound = (4 * n * n + 16) as u64;
        prop_assert!(result.stats.oracle_calls <= bound,
            "oracle_calls {} exceeds bound {} for n={}",
            result.stats.oracle_calls, bound, n);
    }

    /// `dd` always returns a well-formed bracket: the passing side PASSes,
    /// the failing side FAILs, and they differ by exactly the isolated
    /// difference.
    #[test]
    fn dd_bracket_invariants((n, target) in arb_case()) {
        let oracle = monotone_oracle(target);
        let minimizer = Minimizer::with_config(&oracle, quick());
        let result = minimizer.dd(Configuration::empty(), universe_of(n)).unwrap();

        prop_assert_eq!(oracle(&result.passing), Verdict::Pass);
        prop_assert_eq!(oracle(&result.failing), Verdict::Fail);
        prop_assert!(result.passing.is_subset_of(&result.failing));
        prop_assert_eq!(result.delta.clone(), result.failing.subtract(&result.passing));
        prop_assert!(!result.delta.is_empty());
        let rebuilt = result.passing.union(&result.delta);
        prop_assert_eq!(rebuilt, result.failing);
    }

    /// Bands of UNRESOLVED verdicts neither break termination nor stop the
    /// result from failing.
    #[test]
    fn ddmin_tolerates_unresolved_bands(
        (n, target) in arb_case(),
        band in 0usize..4,
    ) {
        // UNRESOLVED for candidates whose size falls in a band, except the
        // full universe (the precondition must still hold).
        let oracle = move |c: &Configuration<u8>| {
            let in_band = c.len() % 4 == band && c.len() != n;
            if target.iter().all(|&i| c.contains(i)) {
                if in_band { Verdict::Unresolved } else { Verdict::Fail }
            } else if in_band {
                Verdict::Unresolved
            } else {
                Verdict::Pass
            }
        };

        let minimizer = Minimizer::with_config(&oracle, quick());
        let result = minimizer.ddmin(universe_of(n)).unwrap();
        // The engine only ever moves to configurations it saw FAIL.
        prop_assert_eq!(oracle(&result.minimal), Verdict::Fail);
    }
}
