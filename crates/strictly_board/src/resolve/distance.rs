//! Resolution under an exact travel-distance requirement (dice games).

use super::walk::{Step, shortest_of, walk_direction, walk_fixed};
use crate::{Board, BoardError, Pattern, Tile, TilePath};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Required travel distance for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DistanceConstraint {
    /// Exact distance the move must cover.
    distance: u64,
    /// Whether a walk may pass the destination and keep going until the
    /// distance is used up.
    allow_overshoot: bool,
}

impl DistanceConstraint {
    /// Creates a constraint.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NonPositiveTarget`] when `distance` is zero.
    pub fn new(distance: u64, allow_overshoot: bool) -> Result<Self, BoardError> {
        if distance == 0 {
            return Err(BoardError::NonPositiveTarget);
        }
        Ok(Self {
            distance,
            allow_overshoot,
        })
    }

    /// Judges a partial walk against the constraint.
    ///
    /// Hitting the exact distance accepts the path wherever it ends.
    /// Reaching the destination early only survives with overshoot allowed.
    fn judge(&self, path: &TilePath, to: &Tile) -> Step {
        let travelled = path.distance();
        if travelled > self.distance {
            trace!(travelled, target = self.distance, "Distance exceeded");
            return Step::Reject;
        }
        if travelled == self.distance {
            return Step::Accept;
        }
        if path.to() == to && !self.allow_overshoot {
            trace!(travelled, target = self.distance, "Destination reached short of target");
            return Step::Reject;
        }
        Step::Continue
    }
}

/// Resolves `pattern` so that the resulting path covers exactly the
/// constrained distance.
///
/// `Fixed` patterns must end on `to` with the exact total distance.
/// Direction walks stop as soon as the distance is used up.
///
/// # Errors
///
/// [`Pattern::Any`] is not supported under a distance constraint and
/// yields [`BoardError::UnsupportedPattern`].
#[instrument(level = "debug", skip_all, fields(kind = pattern.kind(), from = %from, to = %to, target = constraint.distance))]
pub fn resolve_tile_path_with_distance(
    board: &Board,
    pattern: &Pattern,
    from: &Tile,
    to: &Tile,
    constraint: DistanceConstraint,
) -> Result<Option<TilePath>, BoardError> {
    let resolved = match pattern {
        Pattern::Null => None,
        Pattern::Direction {
            direction,
            repeatable,
        } => walk_direction(board, from, direction, *repeatable, |path| {
            constraint.judge(path, to)
        }),
        Pattern::MultiDirection {
            directions,
            repeatable,
        } => shortest_of(directions.iter().filter_map(|direction| {
            walk_direction(board, from, direction, *repeatable, |path| {
                constraint.judge(path, to)
            })
        })),
        Pattern::Fixed(directions) => walk_fixed(board, from, directions)
            .filter(|path| path.to() == to && path.distance() == constraint.distance),
        Pattern::Any => {
            return Err(BoardError::UnsupportedPattern {
                pattern: pattern.kind(),
                resolver: "distance-constrained resolution",
            });
        }
    };
    debug!(found = resolved.is_some(), "Distance pattern resolved");
    Ok(resolved)
}
