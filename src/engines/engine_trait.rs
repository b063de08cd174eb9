//! Engine abstraction used by the terminal front-end and match harness.
//!
//! An engine looks at a session and proposes one move for the side to move.
//! It never mutates the session; callers apply the proposal themselves.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// `(origin, destination)`, or `None` when the side to move has no candidates.
    pub best_move: Option<(Square, Square)>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput>;
}
