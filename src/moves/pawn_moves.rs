//! Pawn geometry: push direction, home rows and capture columns.

use crate::game_state::chess_rules::{DARK_PAWN_ROW, LIGHT_PAWN_ROW};
use crate::game_state::chess_types::{Color, Square};

/// Column offsets of the two forward-diagonal capture squares.
pub const PAWN_CAPTURE_COL_OFFSETS: [i8; 2] = [-1, 1];

/// Row step toward the opponent: dark moves down the rows, light moves up.
#[inline]
pub const fn forward_direction(color: Color) -> i8 {
    match color {
        Color::Dark => 1,
        Color::Light => -1,
    }
}

/// Row a pawn of this color starts on and may double-step from.
#[inline]
pub const fn home_row(color: Color) -> i8 {
    match color {
        Color::Dark => DARK_PAWN_ROW,
        Color::Light => LIGHT_PAWN_ROW,
    }
}

/// Forward-diagonal squares a pawn attacks, ignoring occupancy.
pub fn pawn_attacks(color: Color, origin: Square) -> impl Iterator<Item = Square> {
    let d_row = forward_direction(color);
    PAWN_CAPTURE_COL_OFFSETS
        .into_iter()
        .filter_map(move |d_col| origin.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_pawn_attacks_from_e2() {
        let attacks: Vec<Square> = pawn_attacks(Color::Light, Square::new(6, 4)).collect();
        assert_eq!(attacks, vec![Square::new(5, 3), Square::new(5, 5)]);
    }

    #[test]
    fn dark_pawn_on_a_file_attacks_one_square() {
        let attacks: Vec<Square> = pawn_attacks(Color::Dark, Square::new(1, 0)).collect();
        assert_eq!(attacks, vec![Square::new(2, 1)]);
    }

    #[test]
    fn home_rows_mirror() {
        assert_eq!(home_row(Color::Dark) + home_row(Color::Light), 7);
        assert_eq!(forward_direction(Color::Dark), -forward_direction(Color::Light));
    }
}
