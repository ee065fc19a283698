//! Per-run statistics.

use serde::Serialize;

/// Counters for one minimization run.
///
/// A fresh `RunStats` is created per entry-point call and returned with
/// the result; nothing accumulates across independent runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Oracle invocations actually dispatched (cache misses plus the
    /// precondition checks).
    pub oracle_calls: u64,
    /// Candidate evaluations answered from the outcome cache.
    pub cache_hits: u64,
    /// Invocations that came back UNRESOLVED (including timeouts and
    /// oracle failures).
    pub unresolved: u64,
    /// Search rounds executed (one round = one partition of the current
    /// configuration at one granularity).
    pub rounds: u64,
}
