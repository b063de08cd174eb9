//! Move application and undo as pure functions over board values.
//!
//! `apply_move` never touches its input board; it returns the successor
//! board, the next player and the record describing the move. `undo_move`
//! reverses the newest record in a history.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::{MoveHistory, MoveRecord};
use crate::move_generation::legal_move_generator::candidate_destinations;

/// Successful result of [`apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub board: Board,
    pub current_player: Color,
    pub record: MoveRecord,
}

/// Move the piece on `origin` to `destination` for `current_player`.
///
/// Both squares must be on the board, the origin must hold a piece of the
/// side to move, and the destination must be one of the origin's freshly
/// computed candidates. Whatever stands on the destination is captured.
pub fn apply_move(
    board: &Board,
    current_player: Color,
    origin: Square,
    destination: Square,
) -> ChessResult<AppliedMove> {
    origin.ensure_on_board()?;
    destination.ensure_on_board()?;

    let piece = board
        .piece_at(origin)?
        .ok_or(ChessErrors::NoPieceAtOrigin(origin))?;

    if piece.color != current_player {
        return Err(ChessErrors::WrongPlayer {
            origin,
            piece_color: piece.color,
            current_player,
        });
    }

    if !candidate_destinations(board, origin).contains(&destination) {
        return Err(ChessErrors::IllegalDestination {
            origin,
            destination,
        });
    }

    let captured_piece = board.piece_at(destination)?;

    let mut next = *board;
    next.set_cell(destination, Some(piece));
    next.set_cell(origin, None);

    Ok(AppliedMove {
        board: next,
        current_player: current_player.opposite(),
        record: MoveRecord {
            piece,
            origin,
            destination,
            captured_piece,
        },
    })
}

/// Pop the newest record from `history` and put the board back the way it
/// was before that move. With an empty history the inputs come back as-is.
pub fn undo_move(board: &Board, current_player: Color, history: &mut MoveHistory) -> (Board, Color) {
    let Some(record) = history.pop() else {
        return (*board, current_player);
    };

    let mut restored = *board;
    restored.set_cell(record.origin, Some(record.piece));
    restored.set_cell(record.destination, record.captured_piece);

    (restored, current_player.opposite())
}
