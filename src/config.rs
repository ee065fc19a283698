//! Engine configuration.
//!
//! All tunables are explicit instance state passed into the engine, never
//! ambient globals, so independent runs can execute with different
//! settings concurrently without interference.

use std::time::Duration;

/// Default deadline for one oracle invocation.
pub const DEFAULT_ORACLE_TIMEOUT: Duration = Duration::from_secs(60);

/// Options for one [`Minimizer`](crate::Minimizer).
#[derive(Debug, Clone)]
pub struct MinimizeConfig {
    /// Memoize oracle verdicts by configuration identity.
    ///
    /// Enabled by default. Disable for stateful or resource-heavy oracles
    /// where memoization is harmful: unbounded memory growth on long
    /// runs, or stale verdicts when the oracle has side effects. Enabling
    /// or disabling the cache never changes the minimized result, only
    /// the number of oracle calls.
    pub cache_outcomes: bool,

    /// Emit a per-round diagnostic record of candidates and verdicts
    /// (at `tracing` debug level).
    pub verbose: bool,

    /// Emit finer-grained step tracing, such as partitions and granularity
    /// transitions, at `tracing` trace level.
    pub debug: bool,

    /// Deadline applied to every oracle invocation; on expiry the call is
    /// cancelled via [`Oracle::cancel`](crate::Oracle::cancel) and
    /// treated as UNRESOLVED.
    ///
    /// `None` opts out of the watchdog for oracles that enforce their own
    /// deadline internally (an in-memory predicate, a process runner that
    /// already uses `wait_timeout`).
    pub oracle_timeout: Option<Duration>,
}

impl Default for MinimizeConfig {
    fn default() -> Self {
        Self {
            cache_outcomes: true,
            verbose: false,
            debug: false,
            oracle_timeout: Some(DEFAULT_ORACLE_TIMEOUT),
        }
    }
}
