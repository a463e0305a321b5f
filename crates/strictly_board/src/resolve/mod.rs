//! Pattern resolution: turning a [`Pattern`] into a concrete [`TilePath`].
//!
//! A `None` result means the pattern does not connect the two tiles. That
//! is an ordinary outcome evaluated on every move attempt, not an error.

mod distance;
mod fast;
mod shortest;
mod walk;

pub use distance::{DistanceConstraint, resolve_tile_path_with_distance};
pub use fast::ShapeResolver;
pub use shortest::ShortestPaths;

use crate::{Board, Pattern, Tile, TilePath};
use tracing::{debug, instrument};
use walk::{Step, shortest_of, walk_direction, walk_fixed};

/// Something that can resolve a movement pattern between two tiles.
pub trait ResolveTilePath {
    /// Resolves `pattern` from `from` to `to`.
    fn resolve(&self, pattern: &Pattern, from: &Tile, to: &Tile) -> Option<TilePath>;

    /// Resolves a piece's ordered pattern list, returning the index of the
    /// first pattern that connects the tiles and its path.
    fn resolve_first(&self, patterns: &[Pattern], from: &Tile, to: &Tile) -> Option<(usize, TilePath)> {
        patterns
            .iter()
            .enumerate()
            .find_map(|(i, pattern)| self.resolve(pattern, from, to).map(|path| (i, path)))
    }
}

/// Reference resolver that works directly on a [`Board`]'s relation list.
#[derive(Debug, Clone, Copy)]
pub struct BoardResolver<'a> {
    board: &'a Board,
}

impl<'a> BoardResolver<'a> {
    /// Wraps a board.
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }
}

impl ResolveTilePath for BoardResolver<'_> {
    fn resolve(&self, pattern: &Pattern, from: &Tile, to: &Tile) -> Option<TilePath> {
        resolve_tile_path(self.board, pattern, from, to)
    }
}

/// Resolves `pattern` from `from` to `to` on `board`.
///
/// - `Direction` follows one direction until it lands on `to`.
/// - `MultiDirection` walks every candidate separately and keeps the
///   shortest success; directions are never mixed within one path.
/// - `Fixed` consumes the whole sequence and must end on `to`.
/// - `Any` takes a shortest route computed over the whole board.
#[instrument(level = "debug", skip_all, fields(kind = pattern.kind(), from = %from, to = %to))]
pub fn resolve_tile_path(board: &Board, pattern: &Pattern, from: &Tile, to: &Tile) -> Option<TilePath> {
    let resolved = match pattern {
        Pattern::Null => None,
        Pattern::Direction {
            direction,
            repeatable,
        } => walk_direction(board, from, direction, *repeatable, |path| reach(path, to)),
        Pattern::MultiDirection {
            directions,
            repeatable,
        } => shortest_of(directions.iter().filter_map(|direction| {
            walk_direction(board, from, direction, *repeatable, |path| reach(path, to))
        })),
        Pattern::Fixed(directions) => {
            walk_fixed(board, from, directions).filter(|path| path.to() == to)
        }
        Pattern::Any => ShortestPaths::compute(board).path(board, from, to),
    };
    debug!(found = resolved.is_some(), "Pattern resolved");
    resolved
}

fn reach(path: &TilePath, to: &Tile) -> Step {
    if path.to() == to {
        Step::Accept
    } else {
        Step::Continue
    }
}
