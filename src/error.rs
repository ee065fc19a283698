//! Engine errors.
//!
//! The engine distinguishes three failure classes:
//!
//! - **Caller errors** (this module): the supplied configurations violate
//!   the documented oracle contract. The engine fails fast with a
//!   descriptive error instead of looping on a search whose invariant
//!   does not hold.
//! - **Indeterminate oracle outcomes**: timeouts, spawn failures, flaky
//!   verdicts. These are [`Verdict::Unresolved`](crate::Verdict), never
//!   errors; the search makes progress around them.
//! - **Programming errors**: duplicate indices, granularity exceeding the
//!   configuration size. Fatal assertions, never silently tolerated.

use crate::verdict::Verdict;

/// A precondition violation detected at the start of a run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The initial failing configuration did not evaluate FAIL.
    #[error("initial configuration does not reproduce the failure (oracle said {0})")]
    InitialDoesNotFail(Verdict),

    /// `dd`'s passing baseline did not evaluate PASS.
    #[error("passing baseline does not pass (oracle said {0})")]
    BaseDoesNotPass(Verdict),

    /// `dd`'s passing baseline is not a strict subset of the failing
    /// configuration.
    #[error("passing baseline is not a strict subset of the failing configuration")]
    BaseNotStrictSubset,

    /// There is nothing to minimize.
    #[error("cannot minimize an empty configuration")]
    EmptyConfiguration,
}
