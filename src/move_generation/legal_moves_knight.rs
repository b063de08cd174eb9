use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_open_targets, DestinationSet};
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(board: &Board, origin: Square, mover: Color, out: &mut DestinationSet) {
    push_open_targets(board, mover, knight_targets(origin), out);
}
