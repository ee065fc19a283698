//! Minimization entry points.
//!
//! A [`Minimizer`] binds a test oracle to a [`MinimizeConfig`] and exposes
//! the two searches: [`ddmin`](Minimizer::ddmin) (1-minimization of a
//! failing configuration) and [`dd`](Minimizer::dd) (minimal-difference
//! isolation between a passing and a failing configuration).
//!
//! Every call is an independent run: it gets a fresh outcome cache and
//! fresh statistics, and no state survives into the next call. Both entry
//! points verify the oracle contract up front and fail fast with an
//! [`EngineError`] instead of searching from a configuration whose
//! invariant does not hold.

use crate::config::MinimizeConfig;
use crate::dd;
use crate::ddmin;
use crate::delta::Configuration;
use crate::error::EngineError;
use crate::oracle::Oracle;
use crate::run::Run;
use crate::stats::RunStats;
use crate::verdict::Verdict;
use core::fmt;

/// Delta-debugging engine bound to one oracle and one configuration.
#[derive(Debug, Clone)]
pub struct Minimizer<O> {
    oracle: O,
    config: MinimizeConfig,
}

impl<O> Minimizer<O> {
    /// Creates a minimizer with default options.
    pub fn new(oracle: O) -> Self {
        Self::with_config(oracle, MinimizeConfig::default())
    }

    /// Creates a minimizer with explicit options.
    pub fn with_config(oracle: O, config: MinimizeConfig) -> Self {
        Self { oracle, config }
    }

    /// The options this minimizer runs with.
    #[must_use]
    pub fn config(&self) -> &MinimizeConfig {
        &self.config
    }

    /// Shrinks a failing `universe` to a 1-minimal configuration: one that
    /// still FAILs and from which removing any single delta no longer
    /// FAILs.
    ///
    /// # Errors
    ///
    /// - [`EngineError::EmptyConfiguration`] if `universe` is empty;
    /// - [`EngineError::InitialDoesNotFail`] if the oracle does not return
    ///   FAIL for `universe` (the precondition of the whole search).
    pub fn ddmin<T>(&self, universe: Configuration<T>) -> Result<MinimizeResult<T>, EngineError>
    where
        O: Oracle<T>,
        T: Clone + Sync,
    {
        if universe.is_empty() {
            return Err(EngineError::EmptyConfiguration);
        }

        let mut run = Run::new(&self.oracle, &self.config);
        let verdict = run.test(&universe);
        if !verdict.is_fail() {
            return Err(EngineError::InitialDoesNotFail(verdict));
        }

        let original_len = universe.len();
        let minimal = ddmin::minimize(&mut run, universe);
        if self.config.verbose {
            tracing::debug!(
                original = original_len,
                minimal = minimal.len(),
                oracle_calls = run.stats.oracle_calls,
                "ddmin complete"
            );
        }
        Ok(MinimizeResult {
            minimal,
            original_len,
            stats: run.stats,
        })
    }

    /// Isolates a minimal difference between a passing baseline and a
    /// failing configuration.
    ///
    /// Returns the isolated difference together with the two bracketing
    /// configurations actually tested, which differ by exactly that
    /// difference.
    ///
    /// # Errors
    ///
    /// - [`EngineError::EmptyConfiguration`] if `full` is empty;
    /// - [`EngineError::BaseNotStrictSubset`] if `base` is not a strict
    ///   subset of `full`;
    /// - [`EngineError::BaseDoesNotPass`] if the oracle does not return
    ///   PASS for `base`;
    /// - [`EngineError::InitialDoesNotFail`] if the oracle does not return
    ///   FAIL for `full`.
    pub fn dd<T>(
        &self,
        base: Configuration<T>,
        full: Configuration<T>,
    ) -> Result<IsolateResult<T>, EngineError>
    where
        O: Oracle<T>,
        T: Clone + Sync,
    {
        if full.is_empty() {
            return Err(EngineError::EmptyConfiguration);
        }
        if !base.is_subset_of(&full) || base == full {
            return Err(EngineError::BaseNotStrictSubset);
        }

        let mut run = Run::new(&self.oracle, &self.config);
        let verdict = run.test(&base);
        if verdict != Verdict::Pass {
            return Err(EngineError::BaseDoesNotPass(verdict));
        }
        let verdict = run.test(&full);
        if !verdict.is_fail() {
            return Err(EngineError::InitialDoesNotFail(verdict));
        }

        let bracket = dd::isolate(&mut run, base, full);
        if self.config.verbose {
            tracing::debug!(
                isolated = bracket.delta.len(),
                oracle_calls = run.stats.oracle_calls,
                "dd complete"
            );
        }
        Ok(IsolateResult {
            delta: bracket.delta,
            passing: bracket.passing,
            failing: bracket.failing,
            stats: run.stats,
        })
    }
}

/// Result of a [`Minimizer::ddmin`] run.
#[derive(Debug, Clone)]
pub struct MinimizeResult<T> {
    /// The 1-minimal failing configuration.
    pub minimal: Configuration<T>,
    /// Size of the universe the run started from.
    pub original_len: usize,
    /// Counters for this run.
    pub stats: RunStats,
}

impl<T> fmt::Display for MinimizeResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ddmin: {} -> {} deltas ({} oracle calls, {} cache hits)",
            self.original_len,
            self.minimal.len(),
            self.stats.oracle_calls,
            self.stats.cache_hits,
        )
    }
}

/// Result of a [`Minimizer::dd`] run.
#[derive(Debug, Clone)]
pub struct IsolateResult<T> {
    /// The isolated minimal difference.
    pub delta: Configuration<T>,
    /// The bracketing configuration that PASSed.
    pub passing: Configuration<T>,
    /// The bracketing configuration that FAILed; equals
    /// `passing ∪ delta`.
    pub failing: Configuration<T>,
    /// Counters for this run.
    pub stats: RunStats,
}

impl<T> fmt::Display for IsolateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dd: isolated {} delta(s) {} between {} and {} ({} oracle calls)",
            self.delta.len(),
            self.delta,
            self.passing,
            self.failing,
            self.stats.oracle_calls,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick() -> MinimizeConfig {
        MinimizeConfig {
            oracle_timeout: None,
            ..MinimizeConfig::default()
        }
    }

    fn bytes(s: &str) -> Configuration<u8> {
        Configuration::universe(s.bytes())
    }

    fn trigger_oracle(trigger: u8) -> impl Fn(&Configuration<u8>) -> Verdict + Sync {
        move |c: &Configuration<u8>| {
            if c.payloads().any(|&b| b == trigger) {
                Verdict::Fail
            } else {
                Verdict::Pass
            }
        }
    }

    #[test]
    fn ddmin_rejects_empty_universe() {
        let minimizer = Minimizer::with_config(trigger_oracle(b'x'), quick());
        let err = minimizer.ddmin(Configuration::<u8>::empty()).unwrap_err();
        assert_eq!(err, EngineError::EmptyConfiguration);
    }

    #[test]
    fn ddmin_rejects_passing_universe() {
        let minimizer = Minimizer::with_config(trigger_oracle(b'x'), quick());
        let err = minimizer.ddmin(bytes("abc")).unwrap_err();
        assert_eq!(err, EngineError::InitialDoesNotFail(Verdict::Pass));
    }

    #[test]
    fn ddmin_rejects_unresolved_universe() {
        let oracle = |_: &Configuration<u8>| Verdict::Unresolved;
        let minimizer = Minimizer::with_config(oracle, quick());
        let err = minimizer.ddmin(bytes("abc")).unwrap_err();
        assert_eq!(err, EngineError::InitialDoesNotFail(Verdict::Unresolved));
    }

    #[test]
    fn dd_rejects_failing_base() {
        let oracle = |_: &Configuration<u8>| Verdict::Fail;
        let minimizer = Minimizer::with_config(oracle, quick());
        let full = bytes("abcd");
        let base = full.partition(2)[0].clone();
        let err = minimizer.dd(base, full).unwrap_err();
        assert_eq!(err, EngineError::BaseDoesNotPass(Verdict::Fail));
    }

    #[test]
    fn dd_rejects_base_equal_to_full() {
        let minimizer = Minimizer::with_config(trigger_oracle(b'a'), quick());
        let full = bytes("abcd");
        let err = minimizer.dd(full.clone(), full).unwrap_err();
        assert_eq!(err, EngineError::BaseNotStrictSubset);
    }

    #[test]
    fn dd_rejects_disjoint_base() {
        let minimizer = Minimizer::with_config(trigger_oracle(b'a'), quick());
        let universe = bytes("abcdef");
        let parts = universe.partition(2);
        let err = minimizer.dd(parts[1].clone(), parts[0].clone()).unwrap_err();
        assert_eq!(err, EngineError::BaseNotStrictSubset);
    }

    #[test]
    fn minimize_result_display() {
        let minimizer = Minimizer::with_config(trigger_oracle(b'z'), quick());
        let result = minimizer.ddmin(bytes("azbc")).unwrap();
        let line = result.to_string();
        assert!(line.contains("ddmin: 4 -> 1"));
        assert!(line.contains("oracle calls"));
    }

    #[test]
    fn isolate_result_display() {
        let minimizer = Minimizer::with_config(trigger_oracle(b'z'), quick());
        let full = bytes("azbc");
        let result = minimizer.dd(Configuration::empty(), full).unwrap();
        let line = result.to_string();
        assert!(line.contains("dd: isolated 1 delta"));
        assert_eq!(result.failing, result.passing.union(&result.delta));
    }

    #[test]
    fn runs_are_independent() {
        let minimizer = Minimizer::with_config(trigger_oracle(b'z'), quick());
        let first = minimizer.ddmin(bytes("azbc")).unwrap();
        let second = minimizer.ddmin(bytes("azbc")).unwrap();
        // Fresh cache per run: identical work, identical counters.
        assert_eq!(first.stats, second.stats);
        assert_eq!(first.minimal, second.minimal);
    }
}
