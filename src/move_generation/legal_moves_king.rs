use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_open_targets, DestinationSet};
use crate::moves::king_moves::king_targets;

/// Unit steps in all eight directions. No castling and no check filter.
pub fn generate_king_moves(board: &Board, origin: Square, mover: Color, out: &mut DestinationSet) {
    push_open_targets(board, mover, king_targets(origin), out);
}
