//! Abstract movement descriptors attached to pieces.

use crate::Direction;
use serde::{Deserialize, Serialize};

/// How a piece may travel between two tiles.
///
/// Resolvers match this exhaustively; adding a variant forces every
/// resolver to decide what it means.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    /// Never connects anything.
    Null,
    /// Each direction in order, exactly once.
    Fixed(Vec<Direction>),
    /// One direction, one step or as many as needed when repeatable.
    Direction {
        /// Direction to follow.
        direction: Direction,
        /// Whether the step may be taken more than once.
        repeatable: bool,
    },
    /// Several candidate directions, each walked on its own.
    MultiDirection {
        /// Candidate directions.
        directions: Vec<Direction>,
        /// Whether each candidate may be stepped more than once.
        repeatable: bool,
    },
    /// Any shortest route across the board.
    Any,
}

impl Pattern {
    /// Single step in `direction`.
    pub fn step(direction: Direction) -> Self {
        Pattern::Direction {
            direction,
            repeatable: false,
        }
    }

    /// Repeated steps in `direction` (a slider).
    pub fn slide(direction: Direction) -> Self {
        Pattern::Direction {
            direction,
            repeatable: true,
        }
    }

    /// Short name of the pattern kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Pattern::Null => "null",
            Pattern::Fixed(_) => "fixed",
            Pattern::Direction { .. } => "direction",
            Pattern::MultiDirection { .. } => "multi-direction",
            Pattern::Any => "any",
        }
    }

    /// Returns true if any direction in the pattern is the wildcard.
    pub fn uses_wildcard(&self) -> bool {
        match self {
            Pattern::Null | Pattern::Any => false,
            Pattern::Fixed(directions) | Pattern::MultiDirection { directions, .. } => {
                directions.iter().any(Direction::is_any)
            }
            Pattern::Direction { direction, .. } => direction.is_any(),
        }
    }
}
