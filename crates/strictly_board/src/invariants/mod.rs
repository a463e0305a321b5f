//! First-class invariants for occupancy snapshots.
//!
//! Invariants are logical properties that must hold for every snapshot.
//! They are testable independently and serve as documentation of the
//! guarantees the incremental updates maintain.

mod masks;
mod piece_counts;

pub use masks::{MasksMatchPieceMap, PlayerMasksCoverGlobal};
pub use piece_counts::PlayerCountsConsistent;

use crate::{OccupancyMask, OccupancySnapshot, PieceMapLayout, PieceMapSnapshot};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Piece map and occupancy masks of the same game state, viewed together.
#[derive(Debug, Clone, Copy)]
pub struct OccupancyView<'a, M> {
    /// Index assignment both snapshots were built with.
    pub layout: &'a PieceMapLayout,
    /// Authoritative per-piece tile record.
    pub piece_map: &'a PieceMapSnapshot,
    /// Masks derived from the same state.
    pub occupancy: &'a OccupancySnapshot<M>,
}

impl<'a, M: OccupancyMask> OccupancyView<'a, M> {
    /// Bundles the three parts.
    pub fn new(
        layout: &'a PieceMapLayout,
        piece_map: &'a PieceMapSnapshot,
        occupancy: &'a OccupancySnapshot<M>,
    ) -> Self {
        Self {
            layout,
            piece_map,
            occupancy,
        }
    }
}

/// Every invariant relating masks to the piece map.
pub type OccupancyInvariants = (MasksMatchPieceMap, PlayerMasksCoverGlobal);
