//! Stable piece/player indices and per-piece tile snapshots.

use crate::invariants::{Invariant, PlayerCountsConsistent};
use crate::{BoardError, BoardShape, Game, GameState, Piece, Player, UpdateOutcome};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Tile index recorded for a piece that is not on the board.
pub const NOT_PLACED: i16 = -1;

/// Stable integer indices for the players and pieces of a game.
///
/// Players and pieces are sorted ordinally by id, so the same game always
/// produces the same indices. Built once per game and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceMapLayout {
    players: Vec<Player>,
    pieces: Vec<Piece>,
    player_index: HashMap<String, usize>,
    piece_index: HashMap<String, usize>,
    piece_owner: Arc<[usize]>,
}

impl PieceMapLayout {
    /// Assigns indices for every player and piece of `game`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownPlayer`] if a piece's owner is missing.
    #[instrument(skip_all, fields(players = game.players().len(), pieces = game.pieces().len()))]
    pub fn build(game: &Game) -> Result<Self, BoardError> {
        let mut players = game.players().to_vec();
        players.sort_by(|a, b| a.id().cmp(b.id()));
        let mut pieces = game.pieces().to_vec();
        pieces.sort_by(|a, b| a.id().cmp(b.id()));

        let player_index: HashMap<String, usize> = players
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id().clone(), i))
            .collect();
        let piece_index: HashMap<String, usize> = pieces
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id().clone(), i))
            .collect();
        let piece_owner = pieces
            .iter()
            .map(|p| {
                player_index
                    .get(p.owner())
                    .copied()
                    .ok_or_else(|| BoardError::UnknownPlayer(p.owner().clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Piece map layout built");
        Ok(Self {
            players,
            pieces,
            player_index,
            piece_index,
            piece_owner: piece_owner.into(),
        })
    }

    /// Players in index order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Pieces in index order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Number of players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Number of pieces.
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Index of the player with `id`.
    pub fn player_index(&self, id: &str) -> Option<usize> {
        self.player_index.get(id).copied()
    }

    /// Index of the piece with `id`.
    pub fn piece_index(&self, id: &str) -> Option<usize> {
        self.piece_index.get(id).copied()
    }

    /// Owning player index of the piece at `piece`.
    pub fn owner_of(&self, piece: usize) -> Option<usize> {
        self.piece_owner.get(piece).copied()
    }

    pub(crate) fn owners(&self) -> &Arc<[usize]> {
        &self.piece_owner
    }
}

/// Immutable record of which tile each piece stands on.
///
/// Updates return new snapshots; nothing here is ever mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceMapSnapshot {
    piece_tiles: Arc<[i16]>,
    player_counts: Arc<[u32]>,
    piece_owner: Arc<[usize]>,
    tile_count: usize,
}

impl PieceMapSnapshot {
    /// Folds every piece position in `state` into tile indices.
    ///
    /// Pieces the state does not mention stay [`NOT_PLACED`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TooManyTiles`] when tile indices would not fit
    /// an `i16`, [`BoardError::UnknownPiece`] or [`BoardError::UnknownTile`]
    /// for state entries outside the layout or board.
    #[instrument(skip_all, fields(pieces = layout.piece_count(), tiles = shape.tile_count()))]
    pub fn build(layout: &PieceMapLayout, state: &GameState, shape: &BoardShape) -> Result<Self, BoardError> {
        let limit = i16::MAX as usize;
        if shape.tile_count() > limit {
            return Err(BoardError::TooManyTiles {
                tiles: shape.tile_count(),
                limit,
            });
        }

        let mut piece_tiles = vec![NOT_PLACED; layout.piece_count()];
        for entry in state.pieces() {
            let piece = layout
                .piece_index(entry.piece())
                .ok_or_else(|| BoardError::UnknownPiece(entry.piece().clone()))?;
            piece_tiles[piece] = match entry.tile() {
                Some(tile) => shape
                    .tile_index(tile)
                    .ok_or_else(|| BoardError::UnknownTile(tile.id().to_string()))?
                    as i16,
                None => NOT_PLACED,
            };
        }

        let mut player_counts = vec![0u32; layout.player_count()];
        for (piece, &tile) in piece_tiles.iter().enumerate() {
            if tile != NOT_PLACED {
                player_counts[layout.piece_owner[piece]] += 1;
            }
        }

        debug!(
            placed = player_counts.iter().sum::<u32>(),
            "Piece map snapshot built"
        );
        Ok(Self {
            piece_tiles: piece_tiles.into(),
            player_counts: player_counts.into(),
            piece_owner: Arc::clone(layout.owners()),
            tile_count: shape.tile_count(),
        })
    }

    /// Tile index per piece, [`NOT_PLACED`] for pieces off the board.
    pub fn piece_tile_indices(&self) -> &[i16] {
        &self.piece_tiles
    }

    /// Pieces on the board per player.
    pub fn player_piece_counts(&self) -> &[u32] {
        &self.player_counts
    }

    /// Number of tiles on the board this snapshot was built for.
    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Recorded tile index of `piece`, `None` when unplaced or unknown.
    pub fn tile_of(&self, piece: usize) -> Option<usize> {
        self.piece_tiles
            .get(piece)
            .and_then(|&t| usize::try_from(t).ok())
    }

    /// Owning player index of the piece at `piece`.
    pub fn owner_of(&self, piece: usize) -> Option<usize> {
        self.piece_owner.get(piece).copied()
    }

    /// Indices of the pieces standing on `tile`.
    pub fn pieces_on(&self, tile: usize) -> impl Iterator<Item = usize> + '_ {
        self.piece_tiles
            .iter()
            .enumerate()
            .filter(move |(_, t)| usize::try_from(**t).ok() == Some(tile))
            .map(|(piece, _)| piece)
    }

    /// Moves `piece` to `to` (or off the board with [`NOT_PLACED`]).
    ///
    /// Returns [`UpdateOutcome::OutOfRange`] for an unknown piece or tile
    /// index. Moving a piece onto the tile it already occupies is applied
    /// as an identical snapshot.
    #[instrument(level = "trace", skip(self))]
    pub fn update_for_move(&self, piece: usize, to: i16) -> UpdateOutcome<Self> {
        if piece >= self.piece_tiles.len() || !self.tile_in_range(to) {
            warn!(piece, to, "Piece map update out of range");
            return UpdateOutcome::OutOfRange;
        }

        let from = self.piece_tiles[piece];
        if from == to {
            return UpdateOutcome::Applied(self.clone());
        }

        let mut piece_tiles = self.piece_tiles.to_vec();
        piece_tiles[piece] = to;
        let mut player_counts = self.player_counts.to_vec();
        let owner = self.piece_owner[piece];
        if from == NOT_PLACED {
            player_counts[owner] += 1;
        } else if to == NOT_PLACED {
            player_counts[owner] -= 1;
        }

        let next = Self {
            piece_tiles: piece_tiles.into(),
            player_counts: player_counts.into(),
            piece_owner: Arc::clone(&self.piece_owner),
            tile_count: self.tile_count,
        };
        debug_assert!(
            PlayerCountsConsistent::holds(&next),
            "{}",
            PlayerCountsConsistent::description()
        );
        UpdateOutcome::Applied(next)
    }

    /// Moves `piece` only if it is still recorded on `expected_from`.
    ///
    /// A mismatch yields [`UpdateOutcome::Stale`] and leaves this snapshot
    /// as the current truth.
    #[instrument(level = "trace", skip(self))]
    pub fn update_for_move_checked(&self, piece: usize, expected_from: i16, to: i16) -> UpdateOutcome<Self> {
        let Some(&recorded) = self.piece_tiles.get(piece) else {
            warn!(piece, "Piece map update for unknown piece");
            return UpdateOutcome::OutOfRange;
        };
        if recorded != expected_from {
            warn!(piece, recorded, expected_from, "Stale piece map update");
            return UpdateOutcome::Stale;
        }
        self.update_for_move(piece, to)
    }

    fn tile_in_range(&self, tile: i16) -> bool {
        tile == NOT_PLACED || usize::try_from(tile).is_ok_and(|t| t < self.tile_count)
    }
}
