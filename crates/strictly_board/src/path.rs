//! Validated chains of tile relations.

use crate::{BoardError, Direction, Tile, TileRelation};
use std::sync::Arc;
use tracing::instrument;

/// Immutable, non-empty, contiguous chain of relations.
///
/// For every `i > 0`, `relations[i].from() == relations[i - 1].to()`.
/// The tile list, direction list and total distance are computed once
/// at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePath {
    relations: Arc<[TileRelation]>,
    tiles: Arc<[Tile]>,
    directions: Arc<[Direction]>,
    distance: u64,
}

impl TilePath {
    /// Builds a path from a relation chain.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyPath`] for an empty chain and
    /// [`BoardError::Discontiguous`] at the first relation that does not
    /// start where the previous one ended.
    #[instrument(level = "trace", skip(relations), fields(len = relations.len()))]
    pub fn new(relations: Vec<TileRelation>) -> Result<Self, BoardError> {
        let Some(first) = relations.first() else {
            return Err(BoardError::EmptyPath);
        };

        let mut tiles = Vec::with_capacity(relations.len() + 1);
        tiles.push(first.from().clone());
        for (index, relation) in relations.iter().enumerate() {
            let end = &tiles[tiles.len() - 1];
            if relation.from() != end {
                return Err(BoardError::Discontiguous {
                    index,
                    expected: end.id().to_string(),
                    found: relation.from().id().to_string(),
                });
            }
            tiles.push(relation.to().clone());
        }

        let directions: Vec<Direction> = relations.iter().map(|r| r.direction().clone()).collect();
        let distance = relations.iter().map(|r| u64::from(r.distance())).sum();

        Ok(Self {
            relations: relations.into(),
            tiles: tiles.into(),
            directions: directions.into(),
            distance,
        })
    }

    /// Starts a one-relation path.
    pub fn single(relation: TileRelation) -> Self {
        Self {
            tiles: vec![relation.from().clone(), relation.to().clone()].into(),
            directions: vec![relation.direction().clone()].into(),
            distance: u64::from(relation.distance()),
            relations: vec![relation].into(),
        }
    }

    /// Returns a new path with `relation` appended.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Discontiguous`] if the relation does not start
    /// at this path's end tile.
    pub fn add(&self, relation: TileRelation) -> Result<Self, BoardError> {
        if relation.from() != self.to() {
            return Err(BoardError::Discontiguous {
                index: self.relations.len(),
                expected: self.to().id().to_string(),
                found: relation.from().id().to_string(),
            });
        }

        let mut tiles = self.tiles.to_vec();
        tiles.push(relation.to().clone());
        let mut directions = self.directions.to_vec();
        directions.push(relation.direction().clone());
        let distance = self.distance + u64::from(relation.distance());
        let mut relations = self.relations.to_vec();
        relations.push(relation);

        Ok(Self {
            relations: relations.into(),
            tiles: tiles.into(),
            directions: directions.into(),
            distance,
        })
    }

    /// Starts a new path when `path` is `None`, otherwise appends.
    ///
    /// # Errors
    ///
    /// Same as [`TilePath::add`].
    pub fn create(path: Option<&TilePath>, relation: TileRelation) -> Result<Self, BoardError> {
        match path {
            Some(path) => path.add(relation),
            None => Ok(Self::single(relation)),
        }
    }

    /// First tile of the path.
    pub fn from(&self) -> &Tile {
        &self.tiles[0]
    }

    /// Last tile of the path.
    pub fn to(&self) -> &Tile {
        &self.tiles[self.tiles.len() - 1]
    }

    /// Relations in walk order.
    pub fn relations(&self) -> &[TileRelation] {
        &self.relations
    }

    /// Every tile visited, start and end included (`relations().len() + 1`).
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Direction of each relation, in walk order.
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Sum of the relation distances.
    pub fn distance(&self) -> u64 {
        self.distance
    }

    /// Number of relations in the path.
    pub fn len(&self) -> usize {
        self.relations.len()
    }

    /// Always false; paths are never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Tiles strictly between the start and the end.
    pub fn intermediate_tiles(&self) -> &[Tile] {
        &self.tiles[1..self.tiles.len() - 1]
    }
}

impl std::fmt::Display for TilePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<&str> = self.tiles.iter().map(Tile::id).collect();
        write!(f, "{} ({})", ids.join(" -> "), self.distance)
    }
}
