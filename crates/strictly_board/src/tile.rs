//! Tiles and the directed relations between them.

use crate::{BoardError, Direction};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A board position.
///
/// Tiles are identified and ordered by id alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tile {
    id: String,
}

impl Tile {
    /// Creates a tile with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Returns the tile id.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Directed, weighted edge between two tiles.
///
/// Relations are one-way: a relation `a -> b` says nothing about `b -> a`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct TileRelation {
    /// Source tile.
    from: Tile,
    /// Target tile.
    to: Tile,
    /// Relation category.
    direction: Direction,
    /// Cost of crossing the relation, always positive.
    #[getter(skip)]
    distance: u32,
}

impl TileRelation {
    /// Creates a relation.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if `distance` is zero, if `from == to`, or if
    /// the direction is the wildcard.
    #[instrument(level = "trace", skip_all, fields(from = %from, to = %to, direction = %direction, distance = distance))]
    pub fn new(
        from: Tile,
        to: Tile,
        direction: Direction,
        distance: u32,
    ) -> Result<Self, BoardError> {
        if distance == 0 {
            return Err(BoardError::NonPositiveDistance {
                from: from.id().to_string(),
                to: to.id().to_string(),
            });
        }
        if from == to {
            return Err(BoardError::SelfRelation(from.id().to_string()));
        }
        if direction.is_any() {
            return Err(BoardError::WildcardRelation {
                from: from.id().to_string(),
                to: to.id().to_string(),
            });
        }
        Ok(Self {
            from,
            to,
            direction,
            distance,
        })
    }

    /// Returns the cost of crossing the relation.
    pub fn distance(&self) -> u32 {
        self.distance
    }
}

impl std::fmt::Display for TileRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -[{}:{}]-> {}",
            self.from, self.direction, self.distance, self.to
        )
    }
}
