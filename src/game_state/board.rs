//! Board storage: an 8x8 grid of optional pieces.
//!
//! `Board` owns no rules. It stores cells, builds the starting layout and
//! guards every public accessor against off-board coordinates. Mutation from
//! outside the crate is limited to placing and removing pieces when setting
//! up positions; moves go through `move_generation::legal_move_apply`.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board with no pieces.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard starting layout: dark on rows 0-1, light on rows 6-7.
    pub fn create_initial() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK_ORDER.iter().enumerate() {
            board.cells[DARK_BACK_ROW as usize][col] = Some(Piece::new(*kind, Color::Dark));
            board.cells[DARK_PAWN_ROW as usize][col] = Some(Piece::new(PieceKind::Pawn, Color::Dark));
            board.cells[LIGHT_PAWN_ROW as usize][col] =
                Some(Piece::new(PieceKind::Pawn, Color::Light));
            board.cells[LIGHT_BACK_ROW as usize][col] = Some(Piece::new(*kind, Color::Light));
        }
        board
    }

    /// The piece on `square`, failing with `OutOfRange` off the board.
    #[inline]
    pub fn piece_at(&self, square: Square) -> ChessResult<Option<Piece>> {
        square.ensure_on_board()?;
        Ok(self.cells[square.row as usize][square.col as usize])
    }

    /// Place `piece` on an empty square.
    pub fn place(&mut self, square: Square, piece: Piece) -> ChessResult<()> {
        if self.piece_at(square)?.is_some() {
            return Err(ChessErrors::SquareOccupied(square));
        }
        self.set_cell(square, Some(piece));
        Ok(())
    }

    /// Clear `square`, returning whatever stood there.
    pub fn remove(&mut self, square: Square) -> ChessResult<Option<Piece>> {
        let previous = self.piece_at(square)?;
        self.set_cell(square, None);
        Ok(previous)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    pub fn piece_count_for(&self, color: Color) -> usize {
        self.pieces().filter(|(_, piece)| piece.color == color).count()
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.occupant(square).map(|piece| (square, piece)))
    }

    /// Cell lookup for generation code; off-board squares read as empty.
    #[inline]
    pub(crate) fn occupant(&self, square: Square) -> Option<Piece> {
        if square.is_on_board() {
            self.cells[square.row as usize][square.col as usize]
        } else {
            None
        }
    }

    /// Overwrite a cell. Off-board squares are ignored.
    #[inline]
    pub(crate) fn set_cell(&mut self, square: Square, piece: Option<Piece>) {
        if square.is_on_board() {
            self.cells[square.row as usize][square.col as usize] = piece;
        }
    }
}

/// Free-function form of [`Board::create_initial`].
#[inline]
pub fn create_initial() -> Board {
    Board::create_initial()
}

/// Free-function form of [`Board::piece_at`].
#[inline]
pub fn piece_at(board: &Board, square: Square) -> ChessResult<Option<Piece>> {
    board.piece_at(square)
}
