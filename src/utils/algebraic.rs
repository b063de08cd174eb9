//! Square conversions for algebraic coordinates.
//!
//! Column 0 is file `a` and row 0 is rank `8`, so the light queen's rook
//! starts on `(7,0)` = `a1` and the dark king's rook on `(0,7)` = `h8`.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(text: &str) -> ChessResult<Square> {
    let bytes = text.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }

    let col = (file - b'a') as i8;
    let row = (BOARD_SIZE as u8 - (rank - b'0')) as i8;
    Ok(Square::new(row, col))
}

/// Convert a square to algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    square.ensure_on_board()?;

    let file_char = char::from(b'a' + square.col as u8);
    let rank_char = char::from(b'0' + (BOARD_SIZE as u8 - square.row as u8));
    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_squares_convert_both_ways() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), Square::new(7, 0));
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), Square::new(0, 7));
        assert_eq!(square_to_algebraic(Square::new(7, 0)).expect("a1 converts"), "a1");
        assert_eq!(square_to_algebraic(Square::new(0, 7)).expect("h8 converts"), "h8");
    }

    #[test]
    fn king_pawn_squares() {
        assert_eq!(algebraic_to_square("e2").expect("e2 should parse"), Square::new(6, 4));
        assert_eq!(algebraic_to_square("E4").expect("uppercase file is accepted"), Square::new(4, 4));
        assert_eq!(square_to_algebraic(Square::new(1, 4)).expect("e7 converts"), "e7");
    }

    #[test]
    fn bad_strings_are_rejected() {
        for text in ["", "e", "e9", "i1", "e22", "4e"] {
            assert_eq!(
                algebraic_to_square(text),
                Err(ChessErrors::InvalidAlgebraicString(text.to_owned()))
            );
        }
    }

    #[test]
    fn off_board_square_does_not_convert() {
        assert_eq!(
            square_to_algebraic(Square::new(8, 0)),
            Err(ChessErrors::OutOfRange { row: 8, col: 0 })
        );
    }
}
