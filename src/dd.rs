//! The `dd` engine: minimal-difference isolation.
//!
//! Given a configuration known to PASS and a superset known to FAIL, finds
//! a minimal difference responsible for the behavioral change. The engine
//! maintains a bracket `(passing, failing)` with `passing ⊂ failing` and
//! narrows the difference `Δ = failing − passing` from both sides:
//! candidate subsets of `Δ` are tested both added to `passing` and removed
//! from `failing`.
//!
//! Narrowing moves, in classical preference order, each scanned
//! left-to-right:
//!
//! 1. *reduce to subset*: `passing ∪ Δi` FAILs, so the failing frontier
//!    collapses onto it and granularity resets to 2;
//! 2. *increase to complement*: `failing − Δi` PASSes, so the passing
//!    frontier jumps up to it and granularity resets to 2;
//! 3. *frontier moves*: `passing ∪ Δi` PASSes or `failing − Δi` FAILs,
//!    so one side advances by a part and granularity relaxes by one.
//!
//! When no move applies, granularity doubles; the search stops when the
//! difference is a single delta or granularity has reached the difference
//! size. Both brackets returned were actually tested, and they differ by
//! exactly the isolated `Δ`.

use crate::delta::Configuration;
use crate::oracle::Oracle;
use crate::run::Run;
use crate::verdict::Verdict;

/// The isolated difference together with its two bracketing configurations.
pub(crate) struct Bracket<T> {
    pub delta: Configuration<T>,
    pub passing: Configuration<T>,
    pub failing: Configuration<T>,
}

/// Narrows `(passing, failing)` to a minimal difference.
///
/// The caller (see [`Minimizer::dd`](crate::Minimizer::dd)) has already
/// verified `passing` PASSes, `failing` FAILs, and `passing ⊂ failing`.
pub(crate) fn isolate<T, O>(
    run: &mut Run<'_, O>,
    mut passing: Configuration<T>,
    mut failing: Configuration<T>,
) -> Bracket<T>
where
    T: Clone + Sync,
    O: Oracle<T> + ?Sized,
{
    let mut granularity = 2usize;

    'search: loop {
        let delta = failing.subtract(&passing);
        let width = delta.len();
        if width <= 1 {
            return Bracket {
                delta,
                passing,
                failing,
            };
        }

        let n = granularity.min(width);
        run.stats.rounds += 1;
        if run.debug() {
            tracing::trace!(
                round = run.stats.rounds,
                width,
                granularity = n,
                passing = %passing,
                failing = %failing,
                "partitioning difference"
            );
        }
        let parts = delta.partition(n);

        // Reduce to subset.
        for part in &parts {
            let candidate = passing.union(part);
            if run.test(&candidate).is_fail() {
                if run.verbose() {
                    tracing::debug!(part = %part, "difference subset fails; reducing failing frontier");
                }
                failing = candidate;
                granularity = 2;
                continue 'search;
            }
        }

        // Increase to complement.
        for part in &parts {
            let candidate = failing.subtract(part);
            if run.test(&candidate) == Verdict::Pass {
                if run.verbose() {
                    tracing::debug!(part = %part, "complement passes; raising passing frontier");
                }
                passing = candidate;
                granularity = 2;
                continue 'search;
            }
        }

        // Frontier moves at relaxed granularity.
        for part in &parts {
            let candidate = passing.union(part);
            if run.test(&candidate) == Verdict::Pass {
                passing = candidate;
                granularity = (n - 1).max(2);
                continue 'search;
            }
        }
        for part in &parts {
            let candidate = failing.subtract(part);
            if run.test(&candidate).is_fail() {
                failing = candidate;
                granularity = (n - 1).max(2);
                continue 'search;
            }
        }

        if n >= width {
            return Bracket {
                delta,
                passing,
                failing,
            };
        }
        granularity = (n * 2).min(width);
        if run.debug() {
            tracing::trace!(granularity, "no progress; doubling granularity");
        }
    }
}
