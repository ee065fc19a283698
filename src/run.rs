//! Per-run session state and the oracle invocation harness.
//!
//! A [`Run`] owns everything whose lifetime is one minimization run: the
//! outcome cache and the statistics counters. Both engines route every
//! candidate through [`Run::test`], which performs cache lookup, dispatches
//! a cache miss to the oracle under a watchdog deadline, and records the
//! verdict.
//!
//! # Timeouts and teardown
//!
//! An oracle invocation may block indefinitely on a hung external process
//! or a wedged debugger session. When a deadline is configured, the invocation
//! runs on a scoped worker thread while the engine waits on a channel with
//! a timeout. On expiry the harness calls [`Oracle::cancel`], which obliges
//! the oracle to make the in-flight call return and tear down its backing
//! resource, then joins the worker and reports UNRESOLVED. A panicking
//! oracle is likewise contained and reported as UNRESOLVED; the search is
//! never aborted by one bad candidate.

use crate::cache::OutcomeCache;
use crate::config::MinimizeConfig;
use crate::delta::Configuration;
use crate::oracle::Oracle;
use crate::stats::RunStats;
use crate::verdict::Verdict;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// State owned by one minimization run.
pub(crate) struct Run<'a, O: ?Sized> {
    oracle: &'a O,
    config: &'a MinimizeConfig,
    pub(crate) cache: OutcomeCache,
    pub(crate) stats: RunStats,
}

impl<'a, O: ?Sized> Run<'a, O> {
    pub(crate) fn new(oracle: &'a O, config: &'a MinimizeConfig) -> Self {
        Self {
            oracle,
            config,
            cache: OutcomeCache::new(config.cache_outcomes),
            stats: RunStats::default(),
        }
    }

    pub(crate) fn verbose(&self) -> bool {
        self.config.verbose
    }

    pub(crate) fn debug(&self) -> bool {
        self.config.debug
    }

    /// Evaluates one candidate: cache lookup, then oracle dispatch on miss.
    pub(crate) fn test<T>(&mut self, configuration: &Configuration<T>) -> Verdict
    where
        O: Oracle<T>,
        T: Sync,
    {
        if let Some(verdict) = self.cache.lookup(configuration) {
            self.stats.cache_hits += 1;
            if self.config.debug {
                tracing::trace!(candidate = %configuration, %verdict, "cache hit");
            }
            return verdict;
        }

        self.stats.oracle_calls += 1;
        let verdict = invoke(self.oracle, configuration, self.config.oracle_timeout);
        if verdict.is_unresolved() {
            self.stats.unresolved += 1;
        }
        if self.config.verbose {
            tracing::debug!(candidate = %configuration, %verdict, "oracle verdict");
        }
        self.cache.record(configuration, verdict);
        verdict
    }
}

/// Dispatches one oracle invocation, bounded by `timeout` if present.
fn invoke<T, O>(oracle: &O, configuration: &Configuration<T>, timeout: Option<Duration>) -> Verdict
where
    O: Oracle<T> + ?Sized,
    T: Sync,
{
    let Some(deadline) = timeout else {
        return oracle.test(configuration);
    };

    thread::scope(|scope| {
        let (tx, rx) = mpsc::channel();
        let worker = scope.spawn(move || {
            let _ = tx.send(oracle.test(configuration));
        });

        match rx.recv_timeout(deadline) {
            Ok(verdict) => {
                let _ = worker.join();
                verdict
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                tracing::warn!(
                    candidate = %configuration,
                    timeout = ?deadline,
                    "oracle invocation timed out; cancelling"
                );
                oracle.cancel();
                // The cancel contract obliges the in-flight call to return;
                // its late verdict, if any, is discarded.
                let _ = worker.join();
                Verdict::Unresolved
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                let _ = worker.join();
                tracing::warn!(
                    candidate = %configuration,
                    "oracle invocation panicked; treating as UNRESOLVED"
                );
                Verdict::Unresolved
            }
        }
    })
}
