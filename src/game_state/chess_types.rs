//! Core value types: sides, piece kinds, pieces and board coordinates.
//!
//! Every type here is a small `Copy` value. A `Piece` never changes once
//! created; moves relocate it between squares.

use std::fmt;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::BOARD_SIZE;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

/// Piece kind (color is carried separately on `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// A piece standing on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

/// Board coordinate as `(row, col)`.
///
/// Row 0 is the dark back rank, row 7 the light back rank. Coordinates are
/// signed so that offset arithmetic during generation can step off the board
/// before being filtered; `is_on_board` tells the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    /// Build a square without range checking.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Build a square, failing with `OutOfRange` when it is off the board.
    pub fn try_new(row: i8, col: i8) -> ChessResult<Self> {
        let square = Self::new(row, col);
        square.ensure_on_board()?;
        Ok(square)
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        let size = BOARD_SIZE as i8;
        self.row >= 0 && self.row < size && self.col >= 0 && self.col < size
    }

    #[inline]
    pub fn ensure_on_board(self) -> ChessResult<()> {
        if self.is_on_board() {
            Ok(())
        } else {
            Err(ChessErrors::OutOfRange {
                row: self.row,
                col: self.col,
            })
        }
    }

    /// The square shifted by `(d_row, d_col)`, or `None` when that leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row.checked_add(d_row)?;
        let col = self.col.checked_add(d_col)?;
        let next = Square::new(row, col);
        next.is_on_board().then_some(next)
    }

    /// Every on-board square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        let size = BOARD_SIZE as i8;
        (0..size).flat_map(move |row| (0..size).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
