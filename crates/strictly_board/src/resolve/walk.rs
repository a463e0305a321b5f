//! Direction and fixed-sequence walks over a [`Board`].

use crate::{Board, Direction, Tile, TilePath};
use std::collections::HashSet;
use tracing::trace;

/// Verdict on a partially walked path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Stop and return the path.
    Accept,
    /// Stop without a match.
    Reject,
    /// Keep walking if the pattern allows it.
    Continue,
}

/// Follows `direction` from `from`, asking `judge` after every step.
///
/// Gives up when no relation leaves the current tile in `direction`, when
/// the walk would re-enter the start tile or any tile it already crossed,
/// or after the first step of a non-repeatable walk.
pub(crate) fn walk_direction<F>(
    board: &Board,
    from: &Tile,
    direction: &Direction,
    repeatable: bool,
    mut judge: F,
) -> Option<TilePath>
where
    F: FnMut(&TilePath) -> Step,
{
    let mut visited: HashSet<&Tile> = HashSet::from([from]);
    let mut current = from;
    let mut path: Option<TilePath> = None;

    loop {
        let Some(relation) = board.relation(current, direction) else {
            trace!(tile = %current, %direction, "No relation in direction");
            return None;
        };
        let next = relation.to();
        if next == from {
            trace!(tile = %next, "Walk returned to start");
            return None;
        }
        if visited.contains(next) {
            trace!(tile = %next, "Walk revisited tile");
            return None;
        }

        let extended = TilePath::create(path.as_ref(), relation.clone()).ok()?;
        match judge(&extended) {
            Step::Accept => return Some(extended),
            Step::Reject => return None,
            Step::Continue => {}
        }
        if !repeatable {
            return None;
        }

        visited.insert(next);
        current = next;
        path = Some(extended);
    }
}

/// Walks each direction exactly once, in order.
///
/// Returns the full path whatever tile it ends on; callers check the end.
/// A missing relation anywhere aborts the walk.
pub(crate) fn walk_fixed(board: &Board, from: &Tile, directions: &[Direction]) -> Option<TilePath> {
    let mut current = from;
    let mut path: Option<TilePath> = None;
    for direction in directions {
        let relation = board.relation(current, direction)?;
        path = Some(TilePath::create(path.as_ref(), relation.clone()).ok()?);
        current = relation.to();
    }
    path
}

/// Keeps the shortest candidate, first one on ties.
pub(crate) fn shortest_of(candidates: impl Iterator<Item = TilePath>) -> Option<TilePath> {
    candidates.fold(None, |best: Option<TilePath>, path| match best {
        Some(b) if b.distance() <= path.distance() => Some(b),
        _ => Some(path),
    })
}
