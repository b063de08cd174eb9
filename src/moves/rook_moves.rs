/// Orthogonal directions as `(d_row, d_col)`.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_directions_are_unit_orthogonal_steps() {
        for (d_row, d_col) in ROOK_DIRECTIONS {
            assert_eq!(d_row.abs() + d_col.abs(), 1);
        }
    }
}
