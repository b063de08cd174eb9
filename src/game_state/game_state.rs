//! Caller-owned game session.
//!
//! `GameState` bundles the board, the side to move and the move history so
//! one value carries a whole game. Sessions share nothing; run as many as you
//! like side by side. Operations either succeed and update all three fields
//! together or fail and leave the session untouched.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::FIRST_PLAYER;
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::{MoveHistory, MoveRecord};
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_generator::{all_candidate_moves, candidate_destinations};
use crate::move_generation::legal_move_shared::DestinationSet;
use crate::move_generation::move_generator::GeneratedMove;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Color,
    history: MoveHistory,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Starting position, light to move, empty history.
    pub fn new_game() -> Self {
        Self::from_board(Board::create_initial(), FIRST_PLAYER)
    }

    /// Arbitrary position with an empty history.
    pub fn from_board(board: Board, current_player: Color) -> Self {
        Self {
            board,
            current_player,
            history: MoveHistory::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> ChessResult<Option<Piece>> {
        self.board.piece_at(square)
    }

    pub fn candidate_destinations(&self, origin: Square) -> DestinationSet {
        candidate_destinations(&self.board, origin)
    }

    /// Candidates for the side to move.
    pub fn all_candidate_moves(&self) -> Vec<GeneratedMove> {
        all_candidate_moves(&self.board, self.current_player)
    }

    /// Apply a move for the side to move and append it to the history.
    pub fn apply_move(&mut self, origin: Square, destination: Square) -> ChessResult<MoveRecord> {
        let applied = apply_move(&self.board, self.current_player, origin, destination)?;
        self.board = applied.board;
        self.current_player = applied.current_player;
        self.history.push(applied.record);
        Ok(applied.record)
    }

    /// Take back the newest move, returning its record. `None` when there is
    /// nothing to undo.
    pub fn undo_move(&mut self) -> Option<MoveRecord> {
        let undone = self.history.last().copied()?;
        let (board, player) = undo_move(&self.board, self.current_player, &mut self.history);
        self.board = board;
        self.current_player = player;
        Some(undone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::ChessErrors;

    #[test]
    fn rejected_move_leaves_session_untouched() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let err = game.apply_move(Square::new(6, 4), Square::new(3, 4));
        assert!(matches!(err, Err(ChessErrors::IllegalDestination { .. })));
        assert_eq!(game, before);
    }

    #[test]
    fn players_alternate_with_each_move() -> ChessResult<()> {
        let mut game = GameState::new_game();
        let moves = [
            ((6, 4), (4, 4)),
            ((1, 4), (3, 4)),
            ((7, 6), (5, 5)),
            ((0, 1), (2, 2)),
            ((7, 5), (4, 2)),
        ];
        for (n, ((r0, c0), (r1, c1))) in moves.into_iter().enumerate() {
            game.apply_move(Square::new(r0, c0), Square::new(r1, c1))?;
            let expected = if (n + 1) % 2 == 0 { Color::Light } else { Color::Dark };
            assert_eq!(game.current_player(), expected);
        }
        assert_eq!(game.history().len(), moves.len());
        Ok(())
    }

    #[test]
    fn undo_after_apply_round_trips() -> ChessResult<()> {
        let mut game = GameState::new_game();
        game.apply_move(Square::new(6, 3), Square::new(4, 3))?;
        let before = game.clone();

        let record = game.apply_move(Square::new(1, 4), Square::new(3, 4))?;
        assert_eq!(game.last_move(), Some(&record));
        assert_eq!(game.undo_move(), Some(record));
        assert_eq!(game, before);
        Ok(())
    }

    #[test]
    fn undo_on_fresh_game_does_nothing() {
        let mut game = GameState::new_game();
        assert_eq!(game.undo_move(), None);
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn reset_clears_history() -> ChessResult<()> {
        let mut game = GameState::new_game();
        game.apply_move(Square::new(7, 1), Square::new(5, 2))?;
        game.reset();
        assert!(game.history().is_empty());
        assert_eq!(game.current_player(), Color::Light);
        Ok(())
    }

    #[test]
    fn sessions_are_independent() -> ChessResult<()> {
        let mut first = GameState::new_game();
        let second = GameState::new_game();
        first.apply_move(Square::new(6, 0), Square::new(5, 0))?;
        assert_ne!(first, second);
        assert_eq!(second.piece_at(Square::new(6, 0))?.map(|p| p.kind), Some(PieceKind::Pawn));
        Ok(())
    }
}
