//! Straight-line walks across an empty board.
//!
//! A `Ray` yields the squares stepped through from an origin, origin
//! excluded, until the board edge. Occupancy is the caller's concern.

use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    current: Square,
    d_row: i8,
    d_col: i8,
}

impl Ray {
    #[inline]
    pub fn new(origin: Square, (d_row, d_col): (i8, i8)) -> Self {
        Self {
            current: origin,
            d_row,
            d_col,
        }
    }
}

impl Iterator for Ray {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let next = self.current.offset(self.d_row, self.d_col)?;
        self.current = next;
        Some(next)
    }
}

/// Squares reachable by a fixed set of single-step offsets.
pub fn step_targets(origin: Square, offsets: &[(i8, i8)]) -> impl Iterator<Item = Square> + '_ {
    offsets
        .iter()
        .filter_map(move |&(d_row, d_col)| origin.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_stops_at_edge() {
        let squares: Vec<Square> = Ray::new(Square::new(5, 5), (1, 1)).collect();
        assert_eq!(squares, vec![Square::new(6, 6), Square::new(7, 7)]);
    }

    #[test]
    fn ray_from_edge_outward_is_empty() {
        assert_eq!(Ray::new(Square::new(0, 3), (-1, 0)).count(), 0);
    }
}
