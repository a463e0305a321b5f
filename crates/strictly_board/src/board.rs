//! Immutable board topology.

use crate::{BoardError, Direction, Tile, TileRelation};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Immutable set of tiles and the relations between them.
///
/// The relation list is the sole source of truth for adjacency. Tiles are
/// derived from it in order of first appearance. Lookups here are linear
/// scans; [`crate::BoardShape`] provides the indexed equivalent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
    relations: Vec<TileRelation>,
}

impl Board {
    /// Builds a board from its relations.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyBoard`] when `relations` is empty.
    #[instrument(skip(relations))]
    pub fn new(relations: Vec<TileRelation>) -> Result<Self, BoardError> {
        if relations.is_empty() {
            return Err(BoardError::EmptyBoard);
        }

        let mut seen = HashSet::new();
        let mut tiles = Vec::new();
        for relation in &relations {
            for tile in [relation.from(), relation.to()] {
                if seen.insert(tile.clone()) {
                    tiles.push(tile.clone());
                }
            }
        }

        debug!(
            tiles = tiles.len(),
            relations = relations.len(),
            "Board built"
        );
        Ok(Self { tiles, relations })
    }

    /// Returns the tiles in order of first appearance.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Returns all relations in board order.
    pub fn relations(&self) -> &[TileRelation] {
        &self.relations
    }

    /// Returns true if the tile takes part in any relation.
    pub fn contains_tile(&self, tile: &Tile) -> bool {
        self.tiles.contains(tile)
    }

    /// Returns the distinct directions used by relations, in board order.
    pub fn directions(&self) -> Vec<&Direction> {
        let mut out: Vec<&Direction> = Vec::new();
        for relation in &self.relations {
            if !out.contains(&relation.direction()) {
                out.push(relation.direction());
            }
        }
        out
    }

    /// Returns every relation leaving `tile`.
    pub fn relations_from<'a>(&'a self, tile: &Tile) -> impl Iterator<Item = &'a TileRelation> {
        self.relations.iter().filter(move |r| r.from() == tile)
    }

    /// Returns the first relation leaving `tile` in `direction`.
    ///
    /// The wildcard direction matches the first relation leaving the tile.
    pub fn relation(&self, tile: &Tile, direction: &Direction) -> Option<&TileRelation> {
        self.relations_from(tile)
            .find(|r| direction.matches(r.direction()))
    }

    /// Returns the shortest relation from `from` to `to`, first in board
    /// order on ties.
    pub fn relation_between(&self, from: &Tile, to: &Tile) -> Option<&TileRelation> {
        self.relations_from(from)
            .filter(|r| r.to() == to)
            .fold(None, |best: Option<&TileRelation>, r| match best {
                Some(b) if b.distance() <= r.distance() => Some(b),
                _ => Some(r),
            })
    }
}
