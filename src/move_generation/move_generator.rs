use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, Square};
use crate::game_state::game_state::GameState;

/// One candidate move for the side to move, with what it would capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedMove {
    pub origin: Square,
    pub destination: Square,
    pub piece: Piece,
    pub captured_piece: Option<Piece>,
}

pub trait MoveGenerator: Send + Sync {
    /// Every candidate move for pieces of `side` on `board`.
    fn generate_moves(&self, board: &Board, side: Color) -> Vec<GeneratedMove>;

    fn generate_moves_for(&self, game_state: &GameState) -> Vec<GeneratedMove> {
        self.generate_moves(game_state.board(), game_state.current_player())
    }
}
