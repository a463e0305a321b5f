//! Bitboards for arbitrary tile counts.

use std::sync::Arc;

const INLINE_SEGMENTS: usize = 4;
const SEGMENT_BITS: usize = 64;

/// Immutable bitboard split into 64-bit segments.
///
/// The first four segments (256 tiles) live inline and cost nothing to
/// copy. Larger boards keep the rest in a shared spill array that is only
/// cloned when one of its segments changes. Every `with_*` method returns
/// a new value and leaves the receiver untouched. Bit and segment indices
/// past the end are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SegmentedBitboard {
    segment_count: usize,
    inline: [u64; INLINE_SEGMENTS],
    spill: Option<Arc<[u64]>>,
}

impl SegmentedBitboard {
    /// Empty bitboard with room for `tile_count` bits (at least one segment).
    pub fn new(tile_count: usize) -> Self {
        let segment_count = tile_count.div_ceil(SEGMENT_BITS).max(1);
        let spill = (segment_count > INLINE_SEGMENTS)
            .then(|| vec![0u64; segment_count - INLINE_SEGMENTS].into());
        Self {
            segment_count,
            inline: [0; INLINE_SEGMENTS],
            spill,
        }
    }

    /// Number of 64-bit segments.
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Number of addressable bits.
    pub fn capacity(&self) -> usize {
        self.segment_count * SEGMENT_BITS
    }

    /// True when segments beyond the inline four are in use.
    pub fn is_spilled(&self) -> bool {
        self.spill.is_some()
    }

    /// Raw segment `index`, zero when out of range.
    pub fn segment(&self, index: usize) -> u64 {
        if index >= self.segment_count {
            return 0;
        }
        if index < INLINE_SEGMENTS {
            return self.inline[index];
        }
        self.spill
            .as_ref()
            .and_then(|s| s.get(index - INLINE_SEGMENTS).copied())
            .unwrap_or(0)
    }

    /// Copy with segment `index` replaced by `value`.
    pub fn with_segment(&self, index: usize, value: u64) -> Self {
        if index >= self.segment_count || self.segment(index) == value {
            return self.clone();
        }
        let mut next = self.clone();
        if index < INLINE_SEGMENTS {
            next.inline[index] = value;
        } else if let Some(spill) = &self.spill {
            let mut copy = spill.to_vec();
            copy[index - INLINE_SEGMENTS] = value;
            next.spill = Some(copy.into());
        }
        next
    }

    /// Whether bit `bit` is set.
    pub fn test(&self, bit: usize) -> bool {
        (self.segment(bit / SEGMENT_BITS) >> (bit % SEGMENT_BITS)) & 1 == 1
    }

    /// Copy with bit `bit` set.
    pub fn with_set(&self, bit: usize) -> Self {
        let index = bit / SEGMENT_BITS;
        self.with_segment(index, self.segment(index) | (1u64 << (bit % SEGMENT_BITS)))
    }

    /// Copy with bit `bit` cleared.
    pub fn with_cleared(&self, bit: usize) -> Self {
        let index = bit / SEGMENT_BITS;
        self.with_segment(index, self.segment(index) & !(1u64 << (bit % SEGMENT_BITS)))
    }

    /// Number of set bits.
    pub fn pop_count(&self) -> u32 {
        self.segments().map(u64::count_ones).sum()
    }

    /// True if any bit is set.
    pub fn any(&self) -> bool {
        self.segments().any(|s| s != 0)
    }

    /// True if no bit is set.
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Lowest set bit.
    pub fn lowest_set(&self) -> Option<usize> {
        self.segments()
            .enumerate()
            .find(|(_, s)| *s != 0)
            .map(|(i, s)| i * SEGMENT_BITS + s.trailing_zeros() as usize)
    }

    /// Indices of all set bits, ascending.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.segments().enumerate().flat_map(|(i, segment)| {
            let mut bits = segment;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let bit = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(i * SEGMENT_BITS + bit)
            })
        })
    }

    /// Bitwise OR, sized like `self`.
    pub fn union(&self, other: &Self) -> Self {
        self.combine(other, |a, b| a | b)
    }

    /// Bitwise AND, sized like `self`.
    pub fn intersection(&self, other: &Self) -> Self {
        self.combine(other, |a, b| a & b)
    }

    fn combine(&self, other: &Self, op: impl Fn(u64, u64) -> u64) -> Self {
        let mut inline = [0u64; INLINE_SEGMENTS];
        for (i, slot) in inline.iter_mut().enumerate().take(self.segment_count) {
            *slot = op(self.inline[i], other.segment(i));
        }
        let spill = self.spill.as_ref().map(|spill| {
            spill
                .iter()
                .enumerate()
                .map(|(j, &s)| op(s, other.segment(j + INLINE_SEGMENTS)))
                .collect::<Vec<_>>()
                .into()
        });
        Self {
            segment_count: self.segment_count,
            inline,
            spill,
        }
    }

    fn segments(&self) -> impl Iterator<Item = u64> + '_ {
        let inline_len = self.segment_count.min(INLINE_SEGMENTS);
        self.inline[..inline_len]
            .iter()
            .copied()
            .chain(self.spill.iter().flat_map(|s| s.iter().copied()))
    }
}
