//! Canonical rule constants.
//!
//! Board dimensions, the starting layout and the side that opens the game.

use crate::game_state::chess_types::{Color, PieceKind};

/// Rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// Back-rank piece order by column, identical for both sides.
pub const BACK_RANK_ORDER: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const DARK_BACK_ROW: i8 = 0;
pub const DARK_PAWN_ROW: i8 = 1;
pub const LIGHT_PAWN_ROW: i8 = 6;
pub const LIGHT_BACK_ROW: i8 = 7;

/// Side that makes the first move of a game.
pub const FIRST_PLAYER: Color = Color::Light;

/// Pieces per side in the starting layout.
pub const STARTING_PIECES_PER_SIDE: usize = 16;
