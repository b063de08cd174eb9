use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_sliding_targets, DestinationSet};
use crate::moves::queen_moves::QUEEN_DIRECTIONS;

/// Rook and bishop rays walked together from the same origin.
pub fn generate_queen_moves(board: &Board, origin: Square, mover: Color, out: &mut DestinationSet) {
    push_sliding_targets(board, origin, mover, &QUEEN_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::ChessResult;
    use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
    use crate::move_generation::legal_moves_rook::generate_rook_moves;

    #[test]
    fn queen_from_d4_on_empty_board_sees_twenty_seven_squares() -> ChessResult<()> {
        let mut board = Board::empty();
        let origin = Square::new(4, 3);
        board.place(origin, Piece::new(PieceKind::Queen, Color::Light))?;

        let mut out = DestinationSet::new();
        generate_queen_moves(&board, origin, Color::Light, &mut out);
        assert_eq!(out.len(), 27);
        Ok(())
    }

    #[test]
    fn queen_set_is_union_of_rook_and_bishop() -> ChessResult<()> {
        let mut board = Board::empty();
        let origin = Square::new(3, 3);
        board.place(origin, Piece::new(PieceKind::Queen, Color::Dark))?;
        board.place(Square::new(5, 5), Piece::new(PieceKind::Pawn, Color::Light))?;
        board.place(Square::new(3, 6), Piece::new(PieceKind::Pawn, Color::Dark))?;

        let mut queen = DestinationSet::new();
        generate_queen_moves(&board, origin, Color::Dark, &mut queen);

        let mut union = DestinationSet::new();
        generate_rook_moves(&board, origin, Color::Dark, &mut union);
        generate_bishop_moves(&board, origin, Color::Dark, &mut union);

        assert_eq!(queen, union);
        assert!(queen.contains(&Square::new(5, 5)));
        assert!(!queen.contains(&Square::new(6, 6)));
        assert!(!queen.contains(&Square::new(3, 6)));
        Ok(())
    }
}
