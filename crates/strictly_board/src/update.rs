//! Result of an incremental snapshot update.

/// Outcome of applying a move to an immutable snapshot.
///
/// Separates "the update was applied" from "the caller's view was stale"
/// and "the indices were out of range", so callers can decide whether
/// staleness is expected or a desynchronisation bug.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum UpdateOutcome<S> {
    /// The new snapshot. The original is untouched.
    Applied(S),
    /// The recorded source tile did not match the expected one.
    Stale,
    /// A piece or tile index was outside the layout.
    OutOfRange,
}

impl<S: Clone> UpdateOutcome<S> {
    /// Returns the applied snapshot, or a copy of `original` otherwise.
    pub fn or_unchanged(self, original: &S) -> S {
        match self {
            UpdateOutcome::Applied(snapshot) => snapshot,
            UpdateOutcome::Stale | UpdateOutcome::OutOfRange => original.clone(),
        }
    }
}

impl<S> UpdateOutcome<S> {
    /// True when the update was applied.
    pub fn is_applied(&self) -> bool {
        matches!(self, UpdateOutcome::Applied(_))
    }

    /// The applied snapshot, if any.
    pub fn applied(self) -> Option<S> {
        match self {
            UpdateOutcome::Applied(snapshot) => Some(snapshot),
            UpdateOutcome::Stale | UpdateOutcome::OutOfRange => None,
        }
    }
}
