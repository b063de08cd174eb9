use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_sliding_targets, DestinationSet};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;

pub fn generate_bishop_moves(
    board: &Board,
    origin: Square,
    mover: Color,
    out: &mut DestinationSet,
) {
    push_sliding_targets(board, origin, mover, &BISHOP_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::ChessResult;

    #[test]
    fn bishops_start_blocked_by_own_pawns() {
        let board = Board::create_initial();
        let mut out = DestinationSet::new();
        generate_bishop_moves(&board, Square::new(7, 2), Color::Light, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn bishop_captures_first_enemy_on_diagonal() -> ChessResult<()> {
        let mut board = Board::empty();
        let origin = Square::new(7, 2);
        board.place(origin, Piece::new(PieceKind::Bishop, Color::Light))?;
        board.place(Square::new(4, 5), Piece::new(PieceKind::Knight, Color::Dark))?;

        let mut out = DestinationSet::new();
        generate_bishop_moves(&board, origin, Color::Light, &mut out);

        let expected: DestinationSet = [
            Square::new(6, 1),
            Square::new(5, 0),
            Square::new(6, 3),
            Square::new(5, 4),
            Square::new(4, 5),
        ]
        .into_iter()
        .collect();
        assert_eq!(out, expected);
        Ok(())
    }
}
