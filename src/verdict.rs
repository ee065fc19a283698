//! Oracle verdicts.

use core::fmt;

/// Outcome of one test-oracle invocation.
///
/// Verdicts form a closed three-valued set. Because the oracle boundary is
/// typed with this enum, no other outcome can propagate into the search;
/// an oracle that cannot produce a determinate answer reports
/// [`Verdict::Unresolved`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The behavior of interest is absent.
    Pass,
    /// The behavior of interest is present (the failure reproduced).
    Fail,
    /// The oracle could not determine either (timeout, unrelated crash,
    /// resource exhaustion). Treated as "not FAIL" by the search.
    Unresolved,
}

impl Verdict {
    /// Returns true if this verdict reproduces the failure.
    #[must_use]
    pub const fn is_fail(&self) -> bool {
        matches!(self, Self::Fail)
    }

    /// Returns true if this verdict is indeterminate.
    #[must_use]
    pub const fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Unresolved => "UNRESOLVED",
        };
        f.write_str(name)
    }
}
