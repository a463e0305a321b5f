//! Mask invariants: occupancy bits agree with the piece map.

use super::{Invariant, OccupancyView};
use crate::OccupancyMask;

/// Invariant: a tile bit is set in the global mask exactly when some piece
/// stands there, and in a player's mask exactly when one of that player's
/// pieces does.
pub struct MasksMatchPieceMap;

impl<M: OccupancyMask> Invariant<OccupancyView<'_, M>> for MasksMatchPieceMap {
    fn holds(view: &OccupancyView<'_, M>) -> bool {
        let occupancy = view.occupancy;
        if occupancy.player_masks().len() != view.layout.player_count() {
            return false;
        }
        (0..view.piece_map.tile_count()).all(|tile| {
            let mut owners = vec![false; view.layout.player_count()];
            let mut any = false;
            for piece in view.piece_map.pieces_on(tile) {
                any = true;
                if let Some(flag) = view.layout.owner_of(piece).and_then(|o| owners.get_mut(o)) {
                    *flag = true;
                }
            }
            occupancy.is_occupied(tile) == any
                && owners
                    .iter()
                    .enumerate()
                    .all(|(player, &held)| occupancy.is_occupied_by(player, tile) == held)
        })
    }

    fn description() -> &'static str {
        "Occupancy masks match the piece map"
    }
}

/// Invariant: the union of the player masks is the global mask.
pub struct PlayerMasksCoverGlobal;

impl<M: OccupancyMask> Invariant<OccupancyView<'_, M>> for PlayerMasksCoverGlobal {
    fn holds(view: &OccupancyView<'_, M>) -> bool {
        let occupancy = view.occupancy;
        let union = occupancy
            .player_masks()
            .iter()
            .fold(M::empty(occupancy.tile_count()), |acc, mask| acc.union(mask));
        union == *occupancy.global()
    }

    fn description() -> &'static str {
        "Player masks cover exactly the global mask"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::{InvariantSet, OccupancyInvariants};
    use crate::{
        BitboardLayout, BitboardSnapshot, Board, BoardShape, Direction, Game, GameState, Piece,
        PieceMapLayout, PieceMapSnapshot, Player, Tile, TileRelation,
    };
    use std::sync::Arc;

    fn fixture() -> (PieceMapLayout, PieceMapSnapshot, BitboardSnapshot) {
        let relations = (0..3)
            .map(|i| {
                TileRelation::new(
                    Tile::new(format!("t{}", i)),
                    Tile::new(format!("t{}", i + 1)),
                    Direction::new("e"),
                    1,
                )
                .unwrap()
            })
            .collect();
        let board = Arc::new(Board::new(relations).unwrap());
        let shape = BoardShape::build(&board).unwrap();
        let game = Game::new(
            Arc::clone(&board),
            vec![Player::new("a"), Player::new("b")],
            vec![Piece::new("a1", "a"), Piece::new("b1", "b")],
        )
        .unwrap();
        let state = GameState::default()
            .with_piece_at("a1", Some(Tile::new("t0")))
            .with_piece_at("b1", Some(Tile::new("t2")));
        let layout = PieceMapLayout::build(&game).unwrap();
        let piece_map = PieceMapSnapshot::build(&layout, &state, &shape).unwrap();
        let occupancy =
            BitboardSnapshot::build(&BitboardLayout::from_piece_map(&layout), &state, &shape)
                .unwrap();
        (layout, piece_map, occupancy)
    }

    #[test]
    fn test_built_snapshots_satisfy_invariants() {
        let (layout, piece_map, occupancy) = fixture();
        let view = OccupancyView::new(&layout, &piece_map, &occupancy);
        assert!(OccupancyInvariants::check_all(&view).is_ok());
    }

    #[test]
    fn test_mismatched_masks_detected() {
        let (layout, piece_map, _) = fixture();
        let moved = piece_map.update_for_move(0, 1).applied().unwrap();
        let (_, _, occupancy) = fixture();
        let view = OccupancyView::new(&layout, &moved, &occupancy);
        let violations = OccupancyInvariants::check_all(&view).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, "Occupancy masks match the piece map");
    }
}
