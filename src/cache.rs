//! Outcome memoization.
//!
//! The search derives the same sub-configuration along many recursive
//! paths; re-invoking an expensive (or non-idempotent) oracle on a subset
//! it has already judged is both wasteful and potentially harmful. The
//! cache maps configuration identity (the ascending index vector) to the
//! recorded verdict.
//!
//! The cache is a correctness aid, not a bounded LRU: it is append-only
//! within a run, never evicts, and is discarded with the run that owns it.
//! For stateful or resource-heavy oracles caching can itself be harmful
//! (unbounded memory growth on long runs, stale verdicts from an oracle
//! with side effects), so it can be disabled entirely via
//! [`MinimizeConfig::cache_outcomes`](crate::MinimizeConfig).

use crate::delta::Configuration;
use crate::verdict::Verdict;
use std::collections::HashMap;

/// Verdict memo table for one minimization run.
#[derive(Debug)]
pub struct OutcomeCache {
    enabled: bool,
    entries: HashMap<Vec<u32>, Verdict>,
    hits: u64,
    misses: u64,
}

impl OutcomeCache {
    /// Creates a cache; a disabled cache always misses and records nothing.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Looks up the verdict recorded for a configuration with the same
    /// index set, however it was constructed.
    pub fn lookup<T>(&mut self, configuration: &Configuration<T>) -> Option<Verdict> {
        if !self.enabled {
            return None;
        }
        let found = self.entries.get(&configuration.cache_key()).copied();
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    /// Records a verdict. No-op when the cache is disabled.
    pub fn record<T>(&mut self, configuration: &Configuration<T>, verdict: Verdict) {
        if self.enabled {
            self.entries.insert(configuration.cache_key(), verdict);
        }
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookup hits so far.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookup misses so far.
    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
