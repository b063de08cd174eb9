use crate::game_state::chess_types::Square;
use crate::moves::rays::step_targets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[inline]
pub fn knight_targets(origin: Square) -> impl Iterator<Item = Square> {
    step_targets(origin, &KNIGHT_OFFSETS)
}
