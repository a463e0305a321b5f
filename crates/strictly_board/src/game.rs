//! Players, pieces and game state as seen by the occupancy layer.
//!
//! These are the inputs the rule layer hands over; this crate only reads
//! them.

use crate::{Board, BoardError, Tile};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument};

/// A participant in the game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Getters, Serialize, Deserialize, new)]
pub struct Player {
    /// Unique player id.
    #[new(into)]
    id: String,
}

/// A piece owned by a player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, new)]
pub struct Piece {
    /// Unique piece id.
    #[new(into)]
    id: String,
    /// Id of the owning player.
    #[new(into)]
    owner: String,
}

/// Where a piece currently is.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct PieceState {
    /// Piece id.
    #[new(into)]
    piece: String,
    /// Tile the piece stands on, `None` when off the board.
    tile: Option<Tile>,
}

/// Immutable snapshot of piece positions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize, new)]
pub struct GameState {
    /// Every tracked piece position.
    pieces: Vec<PieceState>,
}

impl GameState {
    /// Returns a new state with `piece` moved to `tile`.
    ///
    /// Pieces not yet tracked are appended.
    pub fn with_piece_at(&self, piece: &str, tile: Option<Tile>) -> Self {
        let mut pieces = self.pieces.clone();
        match pieces.iter_mut().find(|p| p.piece == piece) {
            Some(state) => state.tile = tile,
            None => pieces.push(PieceState::new(piece, tile)),
        }
        Self { pieces }
    }

    /// Tile currently recorded for `piece`.
    pub fn tile_of(&self, piece: &str) -> Option<&Tile> {
        self.pieces
            .iter()
            .find(|p| p.piece == piece)
            .and_then(|p| p.tile.as_ref())
    }
}

/// Compiled game definition: a board plus its players and pieces.
#[derive(Debug, Clone)]
pub struct Game {
    board: Arc<Board>,
    players: Vec<Player>,
    pieces: Vec<Piece>,
}

impl Game {
    /// Creates a game definition.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateId`] for repeated player or piece ids
    /// and [`BoardError::UnknownPlayer`] for a piece whose owner is missing.
    #[instrument(skip_all, fields(players = players.len(), pieces = pieces.len()))]
    pub fn new(board: Arc<Board>, players: Vec<Player>, pieces: Vec<Piece>) -> Result<Self, BoardError> {
        let mut ids = HashSet::new();
        for player in &players {
            if !ids.insert(player.id.as_str()) {
                return Err(BoardError::DuplicateId(player.id.clone()));
            }
        }
        let mut piece_ids = HashSet::new();
        for piece in &pieces {
            if !piece_ids.insert(piece.id.as_str()) {
                return Err(BoardError::DuplicateId(piece.id.clone()));
            }
            if !ids.contains(piece.owner.as_str()) {
                return Err(BoardError::UnknownPlayer(piece.owner.clone()));
            }
        }
        debug!("Game definition accepted");
        Ok(Self {
            board,
            players,
            pieces,
        })
    }

    /// The board.
    pub fn board(&self) -> &Arc<Board> {
        &self.board
    }

    /// Players in definition order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Pieces in definition order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
}
