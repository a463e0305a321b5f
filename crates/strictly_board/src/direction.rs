//! Relation categories between tiles.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::instrument;

/// Identifier for a category of tile relation ("north", "clockwise", ...).
///
/// Derived equality is nominal: `Any == Any` and `Named(a) == Named(b)`
/// only when the ids match. The wildcard behaviour of [`Direction::Any`]
/// is only visible through [`Direction::matches`] and [`DirectionMatcher`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Wildcard that matches every direction through the matcher.
    Any,
    /// A named direction.
    Named(String),
}

impl Direction {
    /// Creates a named direction.
    #[instrument(level = "trace", skip(id))]
    pub fn new(id: impl Into<String>) -> Self {
        Direction::Named(id.into())
    }

    /// Returns the direction id. The wildcard reports `"*"`.
    pub fn id(&self) -> &str {
        match self {
            Direction::Any => "*",
            Direction::Named(id) => id,
        }
    }

    /// Returns true for the wildcard.
    pub fn is_any(&self) -> bool {
        matches!(self, Direction::Any)
    }

    /// Wildcard-aware comparison: `Any` matches every direction.
    pub fn matches(&self, other: &Direction) -> bool {
        DirectionMatcher.eq(self, other)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl PartialOrd for Direction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Direction {
    /// Ordinal ordering by id; the wildcard sorts first.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Direction::Any, Direction::Any) => Ordering::Equal,
            (Direction::Any, Direction::Named(_)) => Ordering::Less,
            (Direction::Named(_), Direction::Any) => Ordering::Greater,
            (Direction::Named(a), Direction::Named(b)) => a.as_bytes().cmp(b.as_bytes()),
        }
    }
}

/// Equality comparer that treats [`Direction::Any`] as a wildcard.
///
/// Not transitive (`north ~ Any ~ south`), so it stays out of
/// `PartialEq`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionMatcher;

impl DirectionMatcher {
    /// Compares two directions, letting the wildcard match anything.
    pub fn eq(&self, a: &Direction, b: &Direction) -> bool {
        a.is_any() || b.is_any() || a == b
    }
}
