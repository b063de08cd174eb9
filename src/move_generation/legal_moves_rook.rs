use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_sliding_targets, DestinationSet};
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(board: &Board, origin: Square, mover: Color, out: &mut DestinationSet) {
    push_sliding_targets(board, origin, mover, &ROOK_DIRECTIONS, out);
}
