//! The `ddmin` engine: granularity-adaptive 1-minimization.
//!
//! Given a configuration known to FAIL, finds a 1-minimal sub-configuration:
//! one that still FAILs and from which no single delta can be removed
//! without losing the failure.
//!
//! The search is an explicit state machine over `(configuration,
//! granularity)`. Each round partitions the current configuration into `n`
//! contiguous near-equal subsequences and scans candidates left-to-right,
//! subsets before complements; the first FAIL wins immediately and the
//! state advances. When no candidate fails, granularity doubles, and the
//! search terminates once granularity has reached the configuration size.
//!
//! UNRESOLVED verdicts are "not FAIL" here: they neither shrink the
//! configuration nor block termination. That trades completeness for a
//! termination guarantee under a flaky oracle.
//!
//! Termination: each transition either strictly shrinks the configuration
//! (resetting granularity) or strictly grows granularity, and granularity
//! is bounded by the current configuration size, so the round count is
//! finite, classically O(|C|) rounds of O(|C|) oracle calls each.

use crate::delta::Configuration;
use crate::oracle::Oracle;
use crate::run::Run;

/// Shrinks a failing configuration to a 1-minimal one.
///
/// The caller (see [`Minimizer::ddmin`](crate::Minimizer::ddmin)) has
/// already verified that `current` FAILs.
pub(crate) fn minimize<T, O>(run: &mut Run<'_, O>, mut current: Configuration<T>) -> Configuration<T>
where
    T: Clone + Sync,
    O: Oracle<T> + ?Sized,
{
    let mut granularity = 2usize;

    'search: while current.len() >= 2 {
        debug_assert!(
            granularity >= 2 && granularity <= current.len(),
            "granularity {granularity} out of bounds for size {}",
            current.len()
        );
        run.stats.rounds += 1;
        if run.debug() {
            tracing::trace!(
                round = run.stats.rounds,
                size = current.len(),
                granularity,
                configuration = %current,
                "partitioning"
            );
        }

        let parts = current.partition(granularity);

        // Subsets first, left-to-right; first FAIL wins and restarts the
        // search at coarse granularity since the problem shrank.
        for part in &parts {
            if run.test(part).is_fail() {
                if run.verbose() {
                    tracing::debug!(subset = %part, "failing subset found");
                }
                current = part.clone();
                granularity = 2;
                continue 'search;
            }
        }

        // Complements next: the removed part is irrelevant, and one fewer
        // partition is needed going forward.
        for part in &parts {
            let complement = current.subtract(part);
            if run.test(&complement).is_fail() {
                if run.verbose() {
                    tracing::debug!(removed = %part, "failing complement found");
                }
                granularity = (granularity - 1).max(2);
                current = complement;
                continue 'search;
            }
        }

        // No candidate failed at this granularity.
        if granularity >= current.len() {
            break;
        }
        granularity = (granularity * 2).min(current.len());
        if run.debug() {
            tracing::trace!(granularity, "no progress; doubling granularity");
        }
    }

    current
}
