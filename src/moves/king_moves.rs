use crate::game_state::chess_types::Square;
use crate::moves::rays::step_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_targets(origin: Square) -> impl Iterator<Item = Square> {
    step_targets(origin, &KING_OFFSETS)
}
