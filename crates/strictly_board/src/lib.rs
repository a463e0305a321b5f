//! Board topology, movement-pattern resolution and occupancy snapshots.
//!
//! A [`Board`] is a directed graph of [`Tile`]s joined by named
//! [`TileRelation`]s. [`Pattern`]s describe how a piece may move across it
//! and resolve into concrete [`TilePath`]s. [`BoardShape`] compiles the
//! graph into dense index tables for a faster resolver, and the piece-map
//! and bitboard snapshots record where pieces stand as immutable values.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bitboard;
mod board;
mod compiled;
mod config;
mod direction;
mod error;
mod game;
pub mod invariants;
mod path;
mod pattern;
pub(crate) mod piece_map;
mod resolve;
mod shape;
mod tile;
mod update;

// Board model
pub use board::Board;
pub use direction::{Direction, DirectionMatcher};
pub use path::TilePath;
pub use pattern::Pattern;
pub use tile::{Tile, TileRelation};

// Resolution
pub use compiled::CompiledBoard;
pub use config::{ResolutionStrategy, ResolverConfig};
pub use resolve::{
    BoardResolver, DistanceConstraint, ResolveTilePath, ShapeResolver, ShortestPaths,
    resolve_tile_path, resolve_tile_path_with_distance,
};
pub use shape::{BoardShape, NO_NEIGHBOR, TopologyKind};

// Occupancy
pub use bitboard::{
    BitboardLayout, BitboardSnapshot, OccupancyMask, OccupancySnapshot, SegmentedBitboard,
    SegmentedSnapshot,
};
pub use game::{Game, GameState, Piece, PieceState, Player};
pub use piece_map::{NOT_PLACED, PieceMapLayout, PieceMapSnapshot};
pub use update::UpdateOutcome;

// Errors
pub use error::{BoardError, ConfigError};
