//! Delta debugging: automatic minimization of failure-inducing inputs.
//!
//! Given an input that makes some system misbehave (a file that crashes a
//! parser, a byte stream that wedges a service), `deltamin` shrinks it to
//! a minimal subset that still reproduces the failure, by repeatedly
//! invoking an external test oracle against candidate subsets. The input
//! is modeled as a universe of indexed [`Delta`]s; candidates are
//! [`Configuration`]s (ordered subsets of that universe); the oracle maps
//! each candidate to a [`Verdict`].
//!
//! Two searches are provided, after Zeller's classical algorithms:
//!
//! - [`Minimizer::ddmin`] shrinks a failing configuration to a
//!   *1-minimal* one: removing any single delta no longer fails.
//! - [`Minimizer::dd`] isolates a minimal *difference* between a passing
//!   and a failing configuration.
//!
//! The oracle may be expensive, non-deterministic, or indeterminate
//! ([`Verdict::Unresolved`]); verdicts are memoized per run (optional, see
//! [`MinimizeConfig::cache_outcomes`]) and every invocation is bounded by
//! a watchdog deadline with guaranteed teardown (see [`Oracle::cancel`]).
//!
//! Serializing a minimized configuration back into a concrete input
//! artifact, such as writing bytes to a file, is the caller's business,
//! as is the construction of the oracle itself.
//!
//! # Example
//!
//! ```
//! use deltamin::{Configuration, Minimizer, Verdict};
//!
//! // The "failure" needs '1', '7' and '8' to survive in the input.
//! let oracle = |candidate: &Configuration<char>| {
//!     let needed = ['1', '7', '8'];
//!     if needed.iter().all(|c| candidate.payloads().any(|p| p == c)) {
//!         Verdict::Fail
//!     } else {
//!         Verdict::Pass
//!     }
//! };
//!
//! let universe = Configuration::universe("12345678".chars());
//! let result = Minimizer::new(oracle).ddmin(universe).unwrap();
//! assert_eq!(result.minimal.payloads().collect::<String>(), "178");
//! ```

pub mod cache;
pub mod config;
pub mod delta;
pub mod error;
pub mod minimizer;
pub mod oracle;
pub mod stats;
pub mod verdict;

mod dd;
mod ddmin;
mod run;

pub use cache::OutcomeCache;
pub use config::{MinimizeConfig, DEFAULT_ORACLE_TIMEOUT};
pub use delta::{Configuration, Delta};
pub use error::EngineError;
pub use minimizer::{IsolateResult, MinimizeResult, Minimizer};
pub use oracle::Oracle;
pub use stats::RunStats;
pub use verdict::Verdict;
