//! Occupancy mask abstraction shared by single-word and segmented bitboards.

use super::SegmentedBitboard;

/// Immutable one-bit-per-tile mask.
pub trait OccupancyMask: Clone + PartialEq + std::fmt::Debug {
    /// Largest tile count the mask can represent, `None` when unbounded.
    const MAX_TILES: Option<usize>;

    /// Empty mask for a board of `tile_count` tiles.
    fn empty(tile_count: usize) -> Self;

    /// Whether the bit for `tile` is set. Out-of-range tiles read as unset.
    fn test(&self, tile: usize) -> bool;

    /// Copy with the bit for `tile` set.
    fn with_set(&self, tile: usize) -> Self;

    /// Copy with the bit for `tile` cleared.
    fn with_cleared(&self, tile: usize) -> Self;

    /// Number of set bits.
    fn count(&self) -> u32;

    /// Bitwise OR.
    fn union(&self, other: &Self) -> Self;
}

impl OccupancyMask for u64 {
    const MAX_TILES: Option<usize> = Some(64);

    fn empty(_tile_count: usize) -> Self {
        0
    }

    fn test(&self, tile: usize) -> bool {
        tile < 64 && (*self >> tile) & 1 == 1
    }

    fn with_set(&self, tile: usize) -> Self {
        if tile < 64 { *self | (1u64 << tile) } else { *self }
    }

    fn with_cleared(&self, tile: usize) -> Self {
        if tile < 64 { *self & !(1u64 << tile) } else { *self }
    }

    fn count(&self) -> u32 {
        self.count_ones()
    }

    fn union(&self, other: &Self) -> Self {
        *self | *other
    }
}

impl OccupancyMask for SegmentedBitboard {
    const MAX_TILES: Option<usize> = None;

    fn empty(tile_count: usize) -> Self {
        SegmentedBitboard::new(tile_count)
    }

    fn test(&self, tile: usize) -> bool {
        SegmentedBitboard::test(self, tile)
    }

    fn with_set(&self, tile: usize) -> Self {
        SegmentedBitboard::with_set(self, tile)
    }

    fn with_cleared(&self, tile: usize) -> Self {
        SegmentedBitboard::with_cleared(self, tile)
    }

    fn count(&self) -> u32 {
        self.pop_count()
    }

    fn union(&self, other: &Self) -> Self {
        SegmentedBitboard::union(self, other)
    }
}
