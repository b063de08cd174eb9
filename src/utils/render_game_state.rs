//! Terminal-oriented board renderer.
//!
//! Row 0 (rank 8) is printed first so light sits at the bottom, as a player
//! on the light side would see it.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;

/// Render the board with Unicode glyphs, `·` for empty squares.
pub fn render_board(board: &Board) -> String {
    render_with(board, piece_to_unicode, '·')
}

/// Render the board with letters (uppercase light, lowercase dark), `.` for empty.
pub fn render_board_ascii(board: &Board) -> String {
    render_with(board, piece_to_ascii, '.')
}

fn render_with(board: &Board, glyph: fn(Piece) -> char, empty: char) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..BOARD_SIZE as i8 {
        let rank = char::from(b'0' + (BOARD_SIZE as u8 - row as u8));
        out.push(rank);
        out.push(' ');

        for col in 0..BOARD_SIZE as i8 {
            match board.occupant(Square::new(row, col)) {
                Some(piece) => out.push(glyph(piece)),
                None => out.push(empty),
            }

            if col < BOARD_SIZE as i8 - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

pub fn piece_to_ascii(piece: Piece) -> char {
    let letter = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::Light => letter.to_ascii_uppercase(),
        Color::Dark => letter,
    }
}
