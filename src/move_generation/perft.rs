//! Move-tree node counting.
//!
//! Walks every candidate move sequence to a fixed depth. Used as a
//! regression check on generation and as the workload for the benches.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<PerftCounts> {
    perft_board(generator, game_state.board(), game_state.current_player(), depth)
}

fn perft_board<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    side: Color,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let moves = generator.generate_moves(board, side);
    if depth == 1 {
        return Ok(PerftCounts {
            nodes: moves.len(),
            captures: moves.iter().filter(|mv| mv.captured_piece.is_some()).count(),
        });
    }

    let mut total = PerftCounts::default();
    for mv in moves {
        let applied = apply_move(board, side, mv.origin, mv.destination)?;
        total.merge(perft_board(
            generator,
            &applied.board,
            applied.current_player,
            depth - 1,
        )?);
    }
    Ok(total)
}
