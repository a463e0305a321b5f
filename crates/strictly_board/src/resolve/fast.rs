//! Index-based resolution over a precomputed [`BoardShape`].
//!
//! Must agree exactly with [`super::resolve_tile_path`] on every pattern.

use super::walk::shortest_of;
use super::{ResolveTilePath, ShortestPaths, resolve_tile_path};
use crate::{Board, BoardShape, Direction, Pattern, Tile, TilePath, TileRelation};
use std::sync::{Arc, OnceLock};
use tracing::{instrument, trace};

/// Resolver that walks the dense neighbour table instead of scanning
/// relations.
///
/// Patterns using the wildcard direction have no table column and are
/// handed to the board resolver. `Any` patterns share one lazily computed
/// [`ShortestPaths`].
#[derive(Debug)]
pub struct ShapeResolver {
    board: Arc<Board>,
    shape: Arc<BoardShape>,
    shortest: OnceLock<ShortestPaths>,
}

impl ShapeResolver {
    /// Creates a resolver over a board and its shape.
    pub fn new(board: Arc<Board>, shape: Arc<BoardShape>) -> Self {
        Self {
            board,
            shape,
            shortest: OnceLock::new(),
        }
    }

    /// The shape this resolver indexes into.
    pub fn shape(&self) -> &BoardShape {
        &self.shape
    }

    /// Shortest paths for the board, computed on first use.
    pub fn shortest_paths(&self) -> &ShortestPaths {
        self.shortest
            .get_or_init(|| ShortestPaths::compute(&self.board))
    }

    fn walk(&self, from: usize, to: usize, direction: &Direction, repeatable: bool) -> Option<TilePath> {
        let d = self.shape.direction_index(direction)?;
        let mut visited = vec![false; self.shape.tile_count()];
        visited[from] = true;
        let mut current = from;
        let mut relations: Vec<&TileRelation> = Vec::new();

        loop {
            let next = self.shape.neighbor_index(current, d)?;
            if next == from || visited[next] {
                trace!(tile = next, "Indexed walk revisited tile");
                return None;
            }
            relations.push(self.shape.relation_at(current, d)?);
            if next == to {
                return TilePath::new(relations.into_iter().cloned().collect()).ok();
            }
            if !repeatable {
                return None;
            }
            visited[next] = true;
            current = next;
        }
    }

    fn walk_fixed(&self, from: usize, to: usize, directions: &[Direction]) -> Option<TilePath> {
        let mut current = from;
        let mut relations = Vec::with_capacity(directions.len());
        for direction in directions {
            let d = self.shape.direction_index(direction)?;
            relations.push(self.shape.relation_at(current, d)?.clone());
            current = self.shape.neighbor_index(current, d)?;
        }
        if current != to {
            return None;
        }
        TilePath::new(relations).ok()
    }
}

impl ResolveTilePath for ShapeResolver {
    #[instrument(level = "debug", skip_all, fields(kind = pattern.kind(), from = %from, to = %to))]
    fn resolve(&self, pattern: &Pattern, from: &Tile, to: &Tile) -> Option<TilePath> {
        if pattern.uses_wildcard() {
            return resolve_tile_path(&self.board, pattern, from, to);
        }
        let f = self.shape.tile_index(from)?;
        let t = self.shape.tile_index(to)?;

        match pattern {
            Pattern::Null => None,
            Pattern::Direction {
                direction,
                repeatable,
            } => self.walk(f, t, direction, *repeatable),
            Pattern::MultiDirection {
                directions,
                repeatable,
            } => shortest_of(
                directions
                    .iter()
                    .filter_map(|direction| self.walk(f, t, direction, *repeatable)),
            ),
            Pattern::Fixed(directions) => self.walk_fixed(f, t, directions),
            Pattern::Any => self.shortest_paths().path(&self.board, from, to),
        }
    }
}
