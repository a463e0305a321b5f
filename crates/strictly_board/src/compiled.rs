//! A board compiled together with its shape and resolver settings.

use crate::resolve::{
    DistanceConstraint, ResolveTilePath, ShapeResolver, resolve_tile_path,
    resolve_tile_path_with_distance,
};
use crate::{
    Board, BoardError, BoardShape, Pattern, ResolutionStrategy, ResolverConfig, Tile, TilePath,
};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Board, shape and resolver strategy fixed at compile time.
///
/// Resolution behaviour belongs to this instance, not to the process, so
/// two boards in one process can use different strategies. Shared
/// read-only across threads.
#[derive(Debug)]
pub struct CompiledBoard {
    board: Arc<Board>,
    shape: Arc<BoardShape>,
    fast: ShapeResolver,
    config: ResolverConfig,
}

impl CompiledBoard {
    /// Builds the shape for `board` and fixes the resolver settings.
    ///
    /// # Errors
    ///
    /// Propagates [`BoardShape::build`] failures.
    #[instrument(skip(board), fields(tiles = board.tiles().len()))]
    pub fn compile(board: Arc<Board>, config: ResolverConfig) -> Result<Self, BoardError> {
        let shape = Arc::new(BoardShape::build(&board)?);
        let fast = ShapeResolver::new(Arc::clone(&board), Arc::clone(&shape));
        debug!(strategy = %config.strategy(), topology = %shape.topology(), "Board compiled");
        Ok(Self {
            board,
            shape,
            fast,
            config,
        })
    }

    /// The board.
    pub fn board(&self) -> &Arc<Board> {
        &self.board
    }

    /// The dense adjacency table.
    pub fn shape(&self) -> &Arc<BoardShape> {
        &self.shape
    }

    /// Resolver settings.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Distance-constrained resolution; see
    /// [`resolve_tile_path_with_distance`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnsupportedPattern`] for [`Pattern::Any`].
    pub fn resolve_with_distance(
        &self,
        pattern: &Pattern,
        from: &Tile,
        to: &Tile,
        constraint: DistanceConstraint,
    ) -> Result<Option<TilePath>, BoardError> {
        resolve_tile_path_with_distance(&self.board, pattern, from, to, constraint)
    }

    fn any_pattern_refused(&self) -> bool {
        match self.config.any_pattern_tile_limit() {
            Some(limit) if self.shape.tile_count() > *limit => {
                warn!(
                    tiles = self.shape.tile_count(),
                    limit, "Any pattern refused on large board"
                );
                true
            }
            _ => false,
        }
    }
}

impl ResolveTilePath for CompiledBoard {
    fn resolve(&self, pattern: &Pattern, from: &Tile, to: &Tile) -> Option<TilePath> {
        if matches!(pattern, Pattern::Any) && self.any_pattern_refused() {
            return None;
        }
        match self.config.strategy() {
            ResolutionStrategy::Legacy => resolve_tile_path(&self.board, pattern, from, to),
            ResolutionStrategy::FastPath => self.fast.resolve(pattern, from, to),
            ResolutionStrategy::Verified => {
                let legacy = resolve_tile_path(&self.board, pattern, from, to);
                let fast = self.fast.resolve(pattern, from, to);
                if legacy != fast {
                    warn!(
                        kind = pattern.kind(),
                        %from,
                        %to,
                        legacy = ?legacy.as_ref().map(ToString::to_string),
                        fast = ?fast.as_ref().map(ToString::to_string),
                        "Fast path disagrees with legacy resolution"
                    );
                }
                legacy
            }
        }
    }
}
