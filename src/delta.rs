//! The delta/configuration data model.
//!
//! A [`Delta`] is one atomic, indivisible unit of change (a byte, a line, a
//! token) tagged with its position in the original input. A
//! [`Configuration`] is an ordered subset of the deltas from a fixed
//! universe, used as one candidate test input.
//!
//! Indices are assigned once, at ingestion (see [`Configuration::universe`]),
//! and never change. They provide stable ordering and identity; two
//! configurations drawn from the same universe are equal iff they contain
//! the same index set, regardless of how each was constructed.
//!
//! Configurations are immutable: every operation (`partition`, `subtract`,
//! `union`, `without`) returns a new value.

use core::fmt;

/// An atomic indexed unit of change.
///
/// The payload is opaque to the search; the engine only ever looks at the
/// index. Payloads matter again when the caller serializes a minimized
/// configuration back into a concrete input artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delta<T> {
    /// Stable position in the original input, assigned at ingestion.
    pub index: u32,
    /// The change content: a byte, a line, a token.
    pub payload: T,
}

/// An ordered subset of deltas from a fixed universe.
///
/// Invariants (fatal if violated; these are programming errors, not
/// recoverable conditions):
///
/// - deltas are in strictly ascending index order;
/// - no index appears twice.
#[derive(Debug, Clone)]
pub struct Configuration<T> {
    deltas: Vec<Delta<T>>,
}

impl<T> Configuration<T> {
    /// Ingests an input as the full universe, assigning indices `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if the input has more than `u32::MAX` elements.
    pub fn universe<I>(payloads: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let deltas: Vec<Delta<T>> = payloads
            .into_iter()
            .enumerate()
            .map(|(i, payload)| Delta {
                index: u32::try_from(i).expect("universe exceeds u32::MAX deltas"),
                payload,
            })
            .collect();
        Self { deltas }
    }

    /// Builds a configuration from pre-indexed deltas.
    ///
    /// # Panics
    ///
    /// Panics if the deltas are not in strictly ascending index order
    /// (which also rules out duplicates).
    #[must_use]
    pub fn from_deltas(deltas: Vec<Delta<T>>) -> Self {
        assert!(
            deltas.windows(2).all(|w| w[0].index < w[1].index),
            "configuration deltas must be in strictly ascending index order"
        );
        Self { deltas }
    }

    /// The empty configuration.
    #[must_use]
    pub fn empty() -> Self {
        Self { deltas: Vec::new() }
    }

    /// Number of deltas in this configuration.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    /// Returns true if this configuration contains no deltas.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Returns true if the given index is present.
    #[must_use]
    pub fn contains(&self, index: u32) -> bool {
        self.deltas.binary_search_by_key(&index, |d| d.index).is_ok()
    }

    /// Iterates over the deltas in ascending index order.
    pub fn iter(&self) -> core::slice::Iter<'_, Delta<T>> {
        self.deltas.iter()
    }

    /// Iterates over the indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.deltas.iter().map(|d| d.index)
    }

    /// Iterates over the payloads in ascending index order.
    pub fn payloads(&self) -> impl Iterator<Item = &T> {
        self.deltas.iter().map(|d| &d.payload)
    }

    /// The ascending index vector, used as cache identity.
    #[must_use]
    pub fn cache_key(&self) -> Vec<u32> {
        self.indices().collect()
    }

    /// Returns true if every index of `self` is present in `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        let mut theirs = other.deltas.iter();
        'mine: for delta in &self.deltas {
            for candidate in theirs.by_ref() {
                match candidate.index.cmp(&delta.index) {
                    core::cmp::Ordering::Less => {}
                    core::cmp::Ordering::Equal => continue 'mine,
                    core::cmp::Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }
}

impl<T: Clone> Configuration<T> {
    /// Splits into `n` contiguous, near-equal, non-overlapping subsequences
    /// preserving index order. The first `len % n` parts carry one extra
    /// delta; every part is non-empty.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `n` is zero or exceeds `len`; granularity beyond
    /// the configuration size is a programming error in the engine.
    #[must_use]
    pub fn partition(&self, n: usize) -> Vec<Self> {
        debug_assert!(n >= 1, "partition granularity must be at least 1");
        debug_assert!(
            n <= self.len(),
            "partition granularity {n} exceeds configuration size {}",
            self.len()
        );

        let base = self.len() / n;
        let extra = self.len() % n;
        let mut parts = Vec::with_capacity(n);
        let mut start = 0;
        for i in 0..n {
            let size = base + usize::from(i < extra);
            parts.push(Self {
                deltas: self.deltas[start..start + size].to_vec(),
            });
            start += size;
        }
        parts
    }

    /// Returns `self − other`: the deltas of `self` whose indices are not
    /// in `other`.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        let deltas = self
            .deltas
            .iter()
            .filter(|d| !other.contains(d.index))
            .cloned()
            .collect();
        Self { deltas }
    }

    /// Returns `self ∪ other`, merged in ascending index order.
    ///
    /// Both operands must come from the same universe, so a shared index
    /// implies an identical payload; the left operand's delta is kept.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut deltas = Vec::with_capacity(self.len() + other.len());
        let mut left = self.deltas.iter().peekable();
        let mut right = other.deltas.iter().peekable();
        loop {
            match (left.peek(), right.peek()) {
                (Some(l), Some(r)) => match l.index.cmp(&r.index) {
                    core::cmp::Ordering::Less => {
                        deltas.push((*l).clone());
                        left.next();
                    }
                    core::cmp::Ordering::Greater => {
                        deltas.push((*r).clone());
                        right.next();
                    }
                    core::cmp::Ordering::Equal => {
                        deltas.push((*l).clone());
                        left.next();
                        right.next();
                    }
                },
                (Some(l), None) => {
                    deltas.push((*l).clone());
                    left.next();
                }
                (None, Some(r)) => {
                    deltas.push((*r).clone());
                    right.next();
                }
                (None, None) => break,
            }
        }
        Self { deltas }
    }

    /// Returns `self − {index}`.
    #[must_use]
    pub fn without(&self, index: u32) -> Self {
        let deltas = self
            .deltas
            .iter()
            .filter(|d| d.index != index)
            .cloned()
            .collect();
        Self { deltas }
    }
}

/// Identity is the index set; payloads are implied by the fixed universe.
impl<T> PartialEq for Configuration<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.indices().eq(other.indices())
    }
}

impl<T> Eq for Configuration<T> {}

/// Compact index-range rendering, e.g. `{0-3,7}` or `{}`.
impl<T> fmt::Display for Configuration<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let mut indices = self.indices().peekable();
        let mut first = true;
        while let Some(start) = indices.next() {
            let mut end = start;
            while indices.peek().copied() == end.checked_add(1) {
                end = indices.next().unwrap_or(end);
            }
            if !first {
                f.write_str(",")?;
            }
            first = false;
            if end > start {
                write!(f, "{start}-{end}")?;
            } else {
                write!(f, "{start}")?;
            }
        }
        f.write_str("}")
    }
}
