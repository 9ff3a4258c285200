//! Knight jump table and in-bounds targets.

use crate::game_state::chess_types::Coordinate;

/// The eight L-shaped jumps as `(d_row, d_col)`.
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Jump targets that stay on the board, ignoring occupancy.
pub fn knight_targets(from: Coordinate) -> impl Iterator<Item = Coordinate> {
    KNIGHT_JUMPS
        .into_iter()
        .filter_map(move |(d_row, d_col)| from.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::knight_targets;
    use crate::game_state::chess_types::Coordinate;

    #[test]
    fn knight_targets_from_centre_has_eight() {
        assert_eq!(knight_targets(Coordinate::new(4, 3)).count(), 8);
    }

    #[test]
    fn knight_targets_from_corner_has_two() {
        assert_eq!(knight_targets(Coordinate::new(0, 0)).count(), 2);
    }
}
