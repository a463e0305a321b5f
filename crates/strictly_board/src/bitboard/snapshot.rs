//! Global and per-player occupancy snapshots.

use super::{OccupancyMask, SegmentedBitboard};
use crate::{
    BoardError, BoardShape, Game, GameState, PieceMapLayout, PieceMapSnapshot, TilePath,
    UpdateOutcome, piece_map::NOT_PLACED,
};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Index assignment for occupancy snapshots.
///
/// Uses exactly the player and piece indices of [`PieceMapLayout`], so
/// piece-map and bitboard snapshots of the same state line up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitboardLayout {
    pieces: PieceMapLayout,
}

impl BitboardLayout {
    /// Assigns indices for `game`.
    ///
    /// # Errors
    ///
    /// Same as [`PieceMapLayout::build`].
    pub fn build(game: &Game) -> Result<Self, BoardError> {
        Ok(Self {
            pieces: PieceMapLayout::build(game)?,
        })
    }

    /// Reuses an existing piece-map layout.
    pub fn from_piece_map(layout: &PieceMapLayout) -> Self {
        Self {
            pieces: layout.clone(),
        }
    }

    /// The underlying index assignment.
    pub fn piece_map(&self) -> &PieceMapLayout {
        &self.pieces
    }
}

/// Immutable occupancy masks: one for the whole board, one per player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancySnapshot<M> {
    global: M,
    players: Arc<[M]>,
    piece_owner: Arc<[usize]>,
    tile_count: usize,
}

/// Single-word snapshot for boards of at most 64 tiles.
pub type BitboardSnapshot = OccupancySnapshot<u64>;

/// Snapshot for boards of any size.
pub type SegmentedSnapshot = OccupancySnapshot<SegmentedBitboard>;

impl<M: OccupancyMask> OccupancySnapshot<M> {
    /// Folds every placed piece in `state` into the masks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TooManyTiles`] when the board exceeds
    /// `M::MAX_TILES`, and [`BoardError::UnknownPiece`] or
    /// [`BoardError::UnknownTile`] for entries outside the layout or board.
    #[instrument(skip_all, fields(tiles = shape.tile_count()))]
    pub fn build(layout: &BitboardLayout, state: &GameState, shape: &BoardShape) -> Result<Self, BoardError> {
        let layout = layout.piece_map();
        Self::check_capacity(shape.tile_count())?;

        let mut global = M::empty(shape.tile_count());
        let mut players = vec![M::empty(shape.tile_count()); layout.player_count()];
        for entry in state.pieces() {
            let piece = layout
                .piece_index(entry.piece())
                .ok_or_else(|| BoardError::UnknownPiece(entry.piece().clone()))?;
            let Some(tile) = entry.tile() else { continue };
            let tile = shape
                .tile_index(tile)
                .ok_or_else(|| BoardError::UnknownTile(tile.id().to_string()))?;
            let owner = layout.owners()[piece];
            global = global.with_set(tile);
            players[owner] = players[owner].with_set(tile);
        }

        debug!(occupied = global.count(), "Occupancy snapshot built");
        Ok(Self {
            global,
            players: players.into(),
            piece_owner: Arc::clone(layout.owners()),
            tile_count: shape.tile_count(),
        })
    }

    /// Derives the masks from an existing piece-map snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TooManyTiles`] when the board exceeds
    /// `M::MAX_TILES`.
    pub fn from_piece_map(layout: &BitboardLayout, piece_map: &PieceMapSnapshot) -> Result<Self, BoardError> {
        let layout = layout.piece_map();
        let tile_count = piece_map.tile_count();
        Self::check_capacity(tile_count)?;

        let mut global = M::empty(tile_count);
        let mut players = vec![M::empty(tile_count); layout.player_count()];
        for piece in 0..layout.piece_count() {
            if let Some(tile) = piece_map.tile_of(piece) {
                let owner = layout.owners()[piece];
                global = global.with_set(tile);
                players[owner] = players[owner].with_set(tile);
            }
        }
        Ok(Self {
            global,
            players: players.into(),
            piece_owner: Arc::clone(layout.owners()),
            tile_count,
        })
    }

    fn check_capacity(tile_count: usize) -> Result<(), BoardError> {
        match M::MAX_TILES {
            Some(limit) if tile_count > limit => Err(BoardError::TooManyTiles {
                tiles: tile_count,
                limit,
            }),
            _ => Ok(()),
        }
    }

    /// Mask of every occupied tile.
    pub fn global(&self) -> &M {
        &self.global
    }

    /// Mask of the tiles occupied by `player`.
    pub fn player_mask(&self, player: usize) -> Option<&M> {
        self.players.get(player)
    }

    /// Per-player masks in player index order.
    pub fn player_masks(&self) -> &[M] {
        &self.players
    }

    /// Number of tiles on the board this snapshot was built for.
    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Whether any piece stands on `tile`.
    pub fn is_occupied(&self, tile: usize) -> bool {
        self.global.test(tile)
    }

    /// Whether a piece of `player` stands on `tile`.
    pub fn is_occupied_by(&self, player: usize, tile: usize) -> bool {
        self.players.get(player).is_some_and(|mask| mask.test(tile))
    }

    /// First occupied tile strictly between the path's ends.
    pub fn first_blocker(&self, path: &TilePath, shape: &BoardShape) -> Option<usize> {
        path.intermediate_tiles()
            .iter()
            .filter_map(|tile| shape.tile_index(tile))
            .find(|&tile| self.is_occupied(tile))
    }

    /// True when no piece stands between the path's ends.
    pub fn is_path_clear(&self, path: &TilePath, shape: &BoardShape) -> bool {
        self.first_blocker(path, shape).is_none()
    }

    /// True when the path ends on a tile held by a player other than
    /// `mover`.
    pub fn is_capture(&self, path: &TilePath, shape: &BoardShape, mover: usize) -> bool {
        let Some(tile) = shape.tile_index(path.to()) else {
            return false;
        };
        self.players
            .iter()
            .enumerate()
            .any(|(player, mask)| player != mover && mask.test(tile))
    }

    /// Moves `piece` from `from` to `to`, either of which may be
    /// [`NOT_PLACED`].
    ///
    /// The move is checked against `piece_map`, the authoritative record of
    /// where each piece stands before the move. A mismatch yields
    /// [`UpdateOutcome::Stale`]; bad indices yield
    /// [`UpdateOutcome::OutOfRange`]. Bits on the source tile survive when
    /// another piece (of the same player, for the player mask) remains there.
    #[instrument(level = "trace", skip(self, piece_map, shape))]
    pub fn update_for_move(
        &self,
        piece: usize,
        from: i16,
        to: i16,
        piece_map: &PieceMapSnapshot,
        shape: &BoardShape,
    ) -> UpdateOutcome<Self> {
        let in_range =
            |t: i16| t == NOT_PLACED || usize::try_from(t).is_ok_and(|t| t < shape.tile_count());
        if piece >= self.piece_owner.len() || !in_range(from) || !in_range(to) {
            warn!(piece, from, to, "Occupancy update out of range");
            return UpdateOutcome::OutOfRange;
        }
        let Some(&recorded) = piece_map.piece_tile_indices().get(piece) else {
            warn!(piece, "Piece missing from piece map");
            return UpdateOutcome::OutOfRange;
        };
        if recorded != from {
            warn!(piece, recorded, from, "Stale occupancy update");
            return UpdateOutcome::Stale;
        }
        if from == to {
            return UpdateOutcome::Applied(self.clone());
        }

        let owner = self.piece_owner[piece];
        let mut global = self.global.clone();
        let mut players = self.players.to_vec();

        if let Ok(source) = usize::try_from(from) {
            let others: Vec<usize> = piece_map.pieces_on(source).filter(|&p| p != piece).collect();
            if others.is_empty() {
                global = global.with_cleared(source);
            }
            if !others.iter().any(|&p| self.piece_owner.get(p) == Some(&owner)) {
                players[owner] = players[owner].with_cleared(source);
            }
        }
        if let Ok(target) = usize::try_from(to) {
            global = global.with_set(target);
            players[owner] = players[owner].with_set(target);
        }

        UpdateOutcome::Applied(Self {
            global,
            players: players.into(),
            piece_owner: Arc::clone(&self.piece_owner),
            tile_count: self.tile_count,
        })
    }
}
