//! Error types for board construction and configuration.
//!
//! Structural violations are programming errors by the caller and surface
//! as [`BoardError`]. A pattern that simply does not connect two tiles is
//! not an error; resolvers report it as `None`.

use derive_more::{Display, Error};
use tracing::instrument;

/// Structural violation detected while building boards, paths, layouts
/// or snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardError {
    /// A board needs at least one relation.
    #[display("Board has no relations")]
    EmptyBoard,

    /// Relation distances must be strictly positive.
    #[display("Relation {} -> {} has non-positive distance", from, to)]
    NonPositiveDistance {
        /// Source tile id.
        from: String,
        /// Target tile id.
        to: String,
    },

    /// A relation may not lead from a tile back to itself.
    #[display("Relation from {} to itself is not allowed", _0)]
    SelfRelation(String),

    /// Relations must carry a named direction, never the wildcard.
    #[display("Relation {} -> {} uses the wildcard direction", from, to)]
    WildcardRelation {
        /// Source tile id.
        from: String,
        /// Target tile id.
        to: String,
    },

    /// A tile path needs at least one relation.
    #[display("Tile path has no relations")]
    EmptyPath,

    /// Consecutive relations in a path do not share a tile.
    #[display(
        "Relation {} starts at {} but the path ends at {}",
        index,
        found,
        expected
    )]
    Discontiguous {
        /// Index of the offending relation.
        index: usize,
        /// Tile the path currently ends on.
        expected: String,
        /// Tile the offending relation starts from.
        found: String,
    },

    /// The tile is not part of the board.
    #[display("Unknown tile {}", _0)]
    UnknownTile(String),

    /// The piece is not part of the game.
    #[display("Unknown piece {}", _0)]
    UnknownPiece(String),

    /// The player is not part of the game.
    #[display("Unknown player {}", _0)]
    UnknownPlayer(String),

    /// Two players or two pieces share an id.
    #[display("Duplicate id {}", _0)]
    DuplicateId(String),

    /// The board has more tiles than the chosen representation can hold.
    #[display("Board has {} tiles, limit is {}", tiles, limit)]
    TooManyTiles {
        /// Tiles on the board.
        tiles: usize,
        /// Largest supported tile count.
        limit: usize,
    },

    /// Distance-constrained resolution needs a positive target.
    #[display("Target distance must be positive")]
    NonPositiveTarget,

    /// The pattern kind is not supported by this resolver.
    #[display("Pattern {} is not supported by {}", pattern, resolver)]
    UnsupportedPattern {
        /// Pattern kind name.
        pattern: &'static str,
        /// Resolver name.
        resolver: &'static str,
    },
}

impl std::error::Error for BoardError {}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discontiguous_message_names_tiles() {
        let err = BoardError::Discontiguous {
            index: 2,
            expected: "b".to_string(),
            found: "c".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Relation 2 starts at c but the path ends at b"
        );
    }

    #[test]
    fn test_config_error_tracks_location() {
        let err = ConfigError::new("bad strategy");
        assert!(err.file.ends_with("error.rs"));
        assert!(err.to_string().starts_with("Config error: bad strategy"));
    }
}
