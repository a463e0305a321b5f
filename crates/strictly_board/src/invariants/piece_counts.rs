//! Player counts invariant: counts equal the placed pieces per owner.

use super::Invariant;
use crate::PieceMapSnapshot;
use crate::piece_map::NOT_PLACED;

/// Invariant: each player's piece count equals the number of that
/// player's pieces recorded on a tile.
pub struct PlayerCountsConsistent;

impl Invariant<PieceMapSnapshot> for PlayerCountsConsistent {
    fn holds(snapshot: &PieceMapSnapshot) -> bool {
        let mut counts = vec![0u32; snapshot.player_piece_counts().len()];
        for (piece, &tile) in snapshot.piece_tile_indices().iter().enumerate() {
            if tile == NOT_PLACED {
                continue;
            }
            match snapshot.owner_of(piece).and_then(|o| counts.get_mut(o)) {
                Some(count) => *count += 1,
                None => return false,
            }
        }
        counts == snapshot.player_piece_counts()
    }

    fn description() -> &'static str {
        "Player piece counts match placed pieces"
    }
}
