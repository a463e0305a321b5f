//! Bitboard occupancy: one bit per tile, globally and per player.

mod mask;
mod segmented;
mod snapshot;

pub use mask::OccupancyMask;
pub use segmented::SegmentedBitboard;
pub use snapshot::{BitboardLayout, BitboardSnapshot, OccupancySnapshot, SegmentedSnapshot};
