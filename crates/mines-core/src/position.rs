//! Board coordinates.

use std::fmt::{self, Display};

/// The coordinates of a single cell on the board.
///
/// Rows grow downwards and columns grow to the right; `(0, 0)` is the top-left
/// corner. A position carries no knowledge of the board it belongs to, use
/// [`BoardSize::contains`] to check bounds.
///
/// [`BoardSize::contains`]: crate::BoardSize::contains
///
/// # Examples
///
/// ```
/// use mines_core::Position;
///
/// let pos = Position::new(2, 5);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 5);
/// assert_eq!(pos.to_string(), "(2, 5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row (y coordinate).
    #[must_use]
    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (x coordinate).
    #[must_use]
    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the position shifted by the given offsets, or `None` if the
    /// result would have a negative coordinate.
    ///
    /// The upper bound is not checked here.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Self { row, col })
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
