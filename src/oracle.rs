//! The test-oracle boundary.
//!
//! The search depends on exactly one external capability: a predicate
//! mapping a candidate [`Configuration`] to a [`Verdict`]. How the oracle
//! obtains its verdict, whether by spawning a process and checking its exit
//! status or by driving an interactive debugger session to detect a crash
//! signature, is entirely its own business.
//!
//! # Contract
//!
//! Documented, not enforced by the trait (the engine's fail-fast
//! precondition checks catch violations at run start):
//!
//! - the full universe configuration must evaluate FAIL;
//! - the empty configuration (or, for `dd`, the supplied passing
//!   baseline) must evaluate PASS;
//! - verdicts must depend only on the configuration's index set, never on
//!   the identity of the `Configuration` value handed in.
//!
//! The oracle may be slow, non-deterministic under retry, or produce
//! [`Verdict::Unresolved`] for reasons outside the engine's control; the
//! engine never assumes determinism.

use crate::delta::Configuration;
use crate::verdict::Verdict;

/// A test oracle: maps one candidate configuration to a verdict.
///
/// The `&self` receiver plus the `Sync` bound allow an invocation to be
/// supervised from a watchdog thread (see
/// [`MinimizeConfig::oracle_timeout`](crate::MinimizeConfig)); oracles
/// with mutable state use interior mutability.
pub trait Oracle<T>: Sync {
    /// Evaluates one candidate. Errors inside the oracle (spawn failure,
    /// transport error) should surface as [`Verdict::Unresolved`], not
    /// panic; the search keeps making progress around indeterminate
    /// results.
    fn test(&self, configuration: &Configuration<T>) -> Verdict;

    /// Teardown hook invoked when an in-flight [`test`](Self::test) call
    /// exceeds its deadline.
    ///
    /// A conforming implementation must make the in-flight call return
    /// promptly and must tear down whatever resource backs it (kill the
    /// subprocess, close the debugger session) so that nothing leaks on
    /// the timeout path. The verdict the interrupted call eventually
    /// returns is discarded.
    ///
    /// The default is a no-op, suitable for in-memory oracles that cannot
    /// block.
    fn cancel(&self) {}
}

/// Plain functions and closures are oracles.
impl<T, F> Oracle<T> for F
where
    F: Fn(&Configuration<T>) -> Verdict + Sync,
{
    fn test(&self, configuration: &Configuration<T>) -> Verdict {
        self(configuration)
    }
}
