//! Dense adjacency index derived once from a [`Board`].

use crate::{Board, BoardError, Direction, Tile, TileRelation};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Sentinel stored in the dense neighbour table for "no relation".
pub const NO_NEIGHBOR: i32 = -1;

/// Advisory classification of a board's direction set.
///
/// Inferred from direction ids, so it is a hint for picking optimisations
/// and never a guarantee about the geometry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum TopologyKind {
    /// Only north/south/east/west style directions.
    Orthogonal,
    /// Orthogonal directions plus diagonals.
    OrthogonalAndDiagonal,
    /// Anything else.
    Arbitrary,
}

/// Precomputed `tile x direction -> neighbour` table.
///
/// Tiles and directions are sorted ordinally by id, so indices are
/// reproducible across runs for the same board. When several relations
/// leave a tile in the same direction, the first in board order wins,
/// matching [`Board::relation`].
#[derive(Debug, Clone)]
pub struct BoardShape {
    tiles: Vec<Tile>,
    directions: Vec<Direction>,
    tile_index: HashMap<Tile, usize>,
    direction_index: HashMap<Direction, usize>,
    neighbors: Vec<i32>,
    relation_slots: Vec<i32>,
    relations: Vec<TileRelation>,
    topology: TopologyKind,
}

impl BoardShape {
    /// Builds the table for `board`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TooManyTiles`] when tile or relation indices
    /// would not fit the `i32` table.
    #[instrument(skip(board), fields(tiles = board.tiles().len(), relations = board.relations().len()))]
    pub fn build(board: &Board) -> Result<Self, BoardError> {
        let limit = i32::MAX as usize;
        if board.tiles().len() > limit || board.relations().len() > limit {
            return Err(BoardError::TooManyTiles {
                tiles: board.tiles().len(),
                limit,
            });
        }

        let mut tiles = board.tiles().to_vec();
        tiles.sort();
        let mut directions: Vec<Direction> = board.directions().into_iter().cloned().collect();
        directions.sort();
        directions.dedup();

        let tile_index: HashMap<Tile, usize> =
            tiles.iter().enumerate().map(|(i, t)| (t.clone(), i)).collect();
        let direction_index: HashMap<Direction, usize> = directions
            .iter()
            .enumerate()
            .map(|(i, d)| (d.clone(), i))
            .collect();

        let width = directions.len();
        let mut neighbors = vec![NO_NEIGHBOR; tiles.len() * width];
        let mut relation_slots = vec![NO_NEIGHBOR; tiles.len() * width];
        for (r, relation) in board.relations().iter().enumerate() {
            let slot = tile_index[relation.from()] * width + direction_index[relation.direction()];
            if neighbors[slot] == NO_NEIGHBOR {
                neighbors[slot] = tile_index[relation.to()] as i32;
                relation_slots[slot] = r as i32;
            }
        }

        let topology = classify(&directions);
        debug!(
            tiles = tiles.len(),
            directions = width,
            %topology,
            "Board shape built"
        );

        Ok(Self {
            tiles,
            directions,
            tile_index,
            direction_index,
            neighbors,
            relation_slots,
            relations: board.relations().to_vec(),
            topology,
        })
    }

    /// Number of tiles.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Number of distinct directions.
    pub fn direction_count(&self) -> usize {
        self.directions.len()
    }

    /// Tiles in index order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Directions in index order.
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Advisory topology tag.
    pub fn topology(&self) -> TopologyKind {
        self.topology
    }

    /// Index of `tile`, if it is on the board.
    pub fn tile_index(&self, tile: &Tile) -> Option<usize> {
        self.tile_index.get(tile).copied()
    }

    /// Tile at `index`.
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Index of a named direction. The wildcard has no column.
    pub fn direction_index(&self, direction: &Direction) -> Option<usize> {
        self.direction_index.get(direction).copied()
    }

    /// Neighbour index by direct table lookup.
    pub fn neighbor_index(&self, tile: usize, direction: usize) -> Option<usize> {
        let slot = self.slot(tile, direction)?;
        usize::try_from(self.neighbors[slot]).ok()
    }

    /// Relation stored for the `(tile, direction)` cell.
    pub fn relation_at(&self, tile: usize, direction: usize) -> Option<&TileRelation> {
        let slot = self.slot(tile, direction)?;
        let r = usize::try_from(self.relation_slots[slot]).ok()?;
        self.relations.get(r)
    }

    /// Neighbour of `tile` in `direction`, by tile value.
    pub fn try_get_neighbor(&self, tile: &Tile, direction: &Direction) -> Option<&Tile> {
        let t = self.tile_index(tile)?;
        let d = self.direction_index(direction)?;
        self.neighbor_index(t, d).map(|n| &self.tiles[n])
    }

    fn slot(&self, tile: usize, direction: usize) -> Option<usize> {
        let width = self.directions.len();
        (tile < self.tiles.len() && direction < width).then(|| tile * width + direction)
    }
}

fn classify(directions: &[Direction]) -> TopologyKind {
    const VERTICAL: [&str; 4] = ["north", "south", "up", "down"];
    const HORIZONTAL: [&str; 4] = ["east", "west", "left", "right"];

    if directions.is_empty() {
        return TopologyKind::Arbitrary;
    }

    let mut saw_diagonal = false;
    for direction in directions {
        let id = direction.id().to_lowercase();
        let vertical = VERTICAL.iter().any(|v| id.contains(*v));
        let horizontal = HORIZONTAL.iter().any(|h| id.contains(*h));
        if (vertical && horizontal) || id.contains("diag") {
            saw_diagonal = true;
        } else if !vertical && !horizontal {
            return TopologyKind::Arbitrary;
        }
    }

    if saw_diagonal {
        TopologyKind::OrthogonalAndDiagonal
    } else {
        TopologyKind::Orthogonal
    }
}
