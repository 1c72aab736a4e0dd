//! Board dimensions and neighborhoods.

use std::fmt::{self, Display};

use tinyvec::ArrayVec;

use crate::{ConfigError, Position};

/// The in-bounds Moore neighbors of a cell (at most 8).
pub type Neighbors = ArrayVec<[Position; 8]>;

/// Row/column offsets of the 8 Moore neighbors, in reading order.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Validated board dimensions.
///
/// Both dimensions are at least one, so every board has at least one cell.
/// Cells are laid out in row-major order: the index of `(row, col)` is
/// `row * width + col`.
///
/// # Examples
///
/// ```
/// use mines_core::{BoardSize, Position};
///
/// let size = BoardSize::new(2, 3)?;
/// assert_eq!(size.cell_count(), 6);
/// assert!(size.contains(Position::new(1, 2)));
/// assert!(!size.contains(Position::new(2, 0)));
///
/// // Corner cells only have three neighbors
/// assert_eq!(size.neighbors(Position::new(0, 0)).len(), 3);
/// # Ok::<(), mines_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSize {
    height: usize,
    width: usize,
}

impl BoardSize {
    /// Creates board dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyDimension`] if either dimension is zero.
    pub fn new(height: usize, width: usize) -> Result<Self, ConfigError> {
        if height == 0 || width == 0 {
            return Err(ConfigError::EmptyDimension { height, width });
        }
        Ok(Self { height, width })
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub const fn height(self) -> usize {
        self.height
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub const fn width(self) -> usize {
        self.width
    }

    /// Returns `height * width`.
    #[must_use]
    #[inline]
    pub const fn cell_count(self) -> usize {
        self.height * self.width
    }

    /// Returns `true` if `pos` lies on the board.
    #[must_use]
    #[inline]
    pub const fn contains(self, pos: Position) -> bool {
        pos.row() < self.height && pos.col() < self.width
    }

    /// Returns the row-major index of `pos`, or `None` if it is out of bounds.
    #[must_use]
    #[inline]
    pub const fn index_of(self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.row() * self.width + pos.col())
        } else {
            None
        }
    }

    /// Returns the position at the given row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.cell_count()`.
    #[must_use]
    pub fn position_of(self, index: usize) -> Position {
        assert!(
            index < self.cell_count(),
            "cell index {index} out of range for {self} board"
        );
        Position::new(index / self.width, index % self.width)
    }

    /// Returns an iterator over every position in row-major order.
    pub fn positions(self) -> impl DoubleEndedIterator<Item = Position> + Clone {
        let width = self.width;
        (0..self.cell_count()).map(move |i| Position::new(i / width, i % width))
    }

    /// Returns the in-bounds Moore neighbors of `pos`, in reading order.
    ///
    /// The position itself is never included. Positions outside the board have
    /// their neighbors clipped the same way, which yields an empty list once
    /// `pos` is more than one cell away from the board.
    #[must_use]
    pub fn neighbors(self, pos: Position) -> Neighbors {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| pos.offset(d_row, d_col))
            .filter(|&neighbor| self.contains(neighbor))
            .collect()
    }

    /// Returns the distinct corner cells of the board.
    ///
    /// A 1×1 board has one corner, a single row or column has two, anything
    /// else has four.
    #[must_use]
    pub fn corners(self) -> ArrayVec<[Position; 4]> {
        let last_row = self.height - 1;
        let last_col = self.width - 1;
        let mut corners = ArrayVec::new();
        for pos in [
            Position::new(0, 0),
            Position::new(0, last_col),
            Position::new(last_row, 0),
            Position::new(last_row, last_col),
        ] {
            if !corners.contains(&pos) {
                corners.push(pos);
            }
        }
        corners
    }

    /// Returns `true` if `pos` is one of [`corners`](Self::corners).
    #[must_use]
    pub fn is_corner(self, pos: Position) -> bool {
        self.contains(pos)
            && (pos.row() == 0 || pos.row() == self.height - 1)
            && (pos.col() == 0 || pos.col() == self.width - 1)
    }
}

impl Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn size(height: usize, width: usize) -> BoardSize {
        BoardSize::new(height, width).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_dimensions() {
        assert_eq!(
            BoardSize::new(0, 5),
            Err(ConfigError::EmptyDimension {
                height: 0,
                width: 5
            })
        );
        assert!(BoardSize::new(5, 0).is_err());
        assert!(BoardSize::new(1, 1).is_ok());
    }

    #[test]
    fn test_index_round_trip_boundaries() {
        let size = size(3, 4);
        assert_eq!(size.index_of(Position::new(0, 0)), Some(0));
        assert_eq!(size.index_of(Position::new(2, 3)), Some(11));
        assert_eq!(size.index_of(Position::new(3, 0)), None);
        assert_eq!(size.index_of(Position::new(0, 4)), None);
        assert_eq!(size.position_of(5), Position::new(1, 1));
    }

    #[test]
    #[should_panic(expected = "cell index 12 out of range for 3x4 board")]
    fn test_position_of_out_of_range_panics() {
        let _ = size(3, 4).position_of(12);
    }

    #[test]
    fn test_neighbor_counts() {
        let size = size(3, 3);
        assert_eq!(size.neighbors(Position::new(0, 0)).len(), 3);
        assert_eq!(size.neighbors(Position::new(0, 1)).len(), 5);
        assert_eq!(size.neighbors(Position::new(1, 1)).len(), 8);

        let neighbors = size.neighbors(Position::new(0, 0));
        assert_eq!(
            neighbors.as_slice(),
            &[
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_single_cell_board_has_no_neighbors() {
        assert!(size(1, 1).neighbors(Position::new(0, 0)).is_empty());
    }

    #[test]
    fn test_corners_are_deduplicated() {
        assert_eq!(size(1, 1).corners().len(), 1);
        assert_eq!(size(1, 5).corners().len(), 2);
        assert_eq!(size(4, 1).corners().len(), 2);
        assert_eq!(size(5, 5).corners().len(), 4);

        let size = size(5, 5);
        for pos in size.positions() {
            assert_eq!(size.is_corner(pos), size.corners().contains(&pos));
        }
    }

    #[test]
    fn test_positions_row_major() {
        let positions: Vec<_> = size(2, 2).positions().collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1)
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_neighbors_are_adjacent_and_in_bounds(
            height in 1usize..12,
            width in 1usize..12,
            row in 0usize..12,
            col in 0usize..12,
        ) {
            let size = size(height, width);
            let pos = Position::new(row % height, col % width);
            for neighbor in size.neighbors(pos) {
                prop_assert!(size.contains(neighbor));
                prop_assert_ne!(neighbor, pos);
                prop_assert!(neighbor.row().abs_diff(pos.row()) <= 1);
                prop_assert!(neighbor.col().abs_diff(pos.col()) <= 1);
            }
        }

        #[test]
        fn prop_neighborhood_is_symmetric(
            height in 1usize..10,
            width in 1usize..10,
        ) {
            let size = size(height, width);
            for pos in size.positions() {
                for neighbor in size.neighbors(pos) {
                    prop_assert!(size.neighbors(neighbor).contains(&pos));
                }
            }
        }
    }
}
