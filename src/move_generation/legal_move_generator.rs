//! Candidate destination generation.
//!
//! Dispatches on the kind of the piece at the origin, then applies the same
//! post-filter to every kind: off-board squares and squares held by the
//! mover's own color are dropped. There is no check concept, so a move that
//! exposes the mover's king is still a candidate.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{is_friend_of, DestinationSet};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

/// Squares the piece on `origin` could move to. Empty when `origin` holds no
/// piece or lies off the board.
pub fn candidate_destinations(board: &Board, origin: Square) -> DestinationSet {
    let mut out = DestinationSet::new();
    let Some(piece) = board.occupant(origin) else {
        return out;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, origin, piece.color, &mut out),
        PieceKind::Knight => generate_knight_moves(board, origin, piece.color, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, origin, piece.color, &mut out),
        PieceKind::Rook => generate_rook_moves(board, origin, piece.color, &mut out),
        PieceKind::Queen => generate_queen_moves(board, origin, piece.color, &mut out),
        PieceKind::King => generate_king_moves(board, origin, piece.color, &mut out),
    }

    out.retain(|&target| target.is_on_board() && !is_friend_of(board, target, piece.color));
    out
}

/// Every `(origin, destination)` candidate for `side`, origins in row-major
/// order and destinations ascending.
pub fn all_candidate_moves(board: &Board, side: Color) -> Vec<GeneratedMove> {
    let mut moves = Vec::with_capacity(64);
    for (origin, piece) in board.pieces().filter(|(_, piece)| piece.color == side) {
        for destination in candidate_destinations(board, origin) {
            moves.push(GeneratedMove {
                origin,
                destination,
                piece,
                captured_piece: board.occupant(destination),
            });
        }
    }
    moves
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateMoveGenerator;

impl MoveGenerator for CandidateMoveGenerator {
    fn generate_moves(&self, board: &Board, side: Color) -> Vec<GeneratedMove> {
        all_candidate_moves(board, side)
    }
}
