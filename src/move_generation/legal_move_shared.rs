use std::collections::BTreeSet;

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::rays::Ray;

/// Candidate destinations for a single origin, kept in `(row, col)` order.
pub type DestinationSet = BTreeSet<Square>;

#[inline]
pub fn is_enemy_of(board: &Board, square: Square, mover: Color) -> bool {
    matches!(board.occupant(square), Some(piece) if piece.color != mover)
}

#[inline]
pub fn is_friend_of(board: &Board, square: Square, mover: Color) -> bool {
    matches!(board.occupant(square), Some(piece) if piece.color == mover)
}

#[inline]
pub fn is_empty(board: &Board, square: Square) -> bool {
    board.occupant(square).is_none()
}

/// Add each target that is empty or holds an enemy piece.
pub fn push_open_targets(
    board: &Board,
    mover: Color,
    targets: impl Iterator<Item = Square>,
    out: &mut DestinationSet,
) {
    out.extend(targets.filter(|&target| !is_friend_of(board, target, mover)));
}

/// Walk each direction until blocked; an enemy blocker is included.
pub fn push_sliding_targets(
    board: &Board,
    origin: Square,
    mover: Color,
    directions: &[(i8, i8)],
    out: &mut DestinationSet,
) {
    for &direction in directions {
        for target in Ray::new(origin, direction) {
            match board.occupant(target) {
                None => {
                    out.insert(target);
                }
                Some(blocker) => {
                    if blocker.color != mover {
                        out.insert(target);
                    }
                    break;
                }
            }
        }
    }
}
