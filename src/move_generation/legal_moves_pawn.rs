use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{is_empty, is_enemy_of, DestinationSet};
use crate::moves::pawn_moves::{forward_direction, home_row, pawn_attacks};

/// Forward pushes onto empty squares plus diagonal captures onto enemies.
///
/// A pawn on its home row may also advance two squares when both squares
/// ahead are empty. En passant and promotion are not modelled; a pawn on the
/// far row simply has no forward move.
pub fn generate_pawn_moves(board: &Board, origin: Square, mover: Color, out: &mut DestinationSet) {
    let step = forward_direction(mover);

    if let Some(one_step) = origin.offset(step, 0) {
        if is_empty(board, one_step) {
            out.insert(one_step);

            if origin.row == home_row(mover) {
                if let Some(two_step) = one_step.offset(step, 0) {
                    if is_empty(board, two_step) {
                        out.insert(two_step);
                    }
                }
            }
        }
    }

    for target in pawn_attacks(mover, origin) {
        if is_enemy_of(board, target, mover) {
            out.insert(target);
        }
    }
}
