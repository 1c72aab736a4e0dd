//! Coordinate-indexed board storage.

use std::ops::{Index, IndexMut};

use crate::{BoardSize, Position};

/// A dense, row-major container holding one value per cell.
///
/// Indexing with `grid[pos]` panics on out-of-bounds positions; use
/// [`get`](Self::get) and [`get_mut`](Self::get_mut) when the position has not
/// been checked yet.
///
/// # Examples
///
/// ```
/// use mines_core::{BoardSize, Grid, Position};
///
/// let size = BoardSize::new(2, 3)?;
/// let mut grid = Grid::new(size, 0_u8);
/// grid[Position::new(1, 2)] = 7;
///
/// assert_eq!(grid.get(Position::new(1, 2)), Some(&7));
/// assert_eq!(grid.get(Position::new(2, 0)), None);
/// assert_eq!(grid.iter().filter(|(_, value)| **value == 7).count(), 1);
/// # Ok::<(), mines_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    size: BoardSize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `value`.
    #[must_use]
    pub fn new(size: BoardSize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size.cell_count()],
        }
    }
}

impl<T> Grid<T> {
    /// Creates a grid by calling `f` once per position, in row-major order.
    #[must_use]
    pub fn from_fn<F>(size: BoardSize, f: F) -> Self
    where
        F: FnMut(Position) -> T,
    {
        Self {
            size,
            cells: size.positions().map(f).collect(),
        }
    }

    /// Returns the grid dimensions.
    #[must_use]
    #[inline]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the value at `pos`, or `None` if it is out of bounds.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.size.index_of(pos).map(|i| &self.cells[i])
    }

    /// Returns a mutable reference to the value at `pos`, or `None` if it is
    /// out of bounds.
    #[must_use]
    #[inline]
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        self.size.index_of(pos).map(|i| &mut self.cells[i])
    }

    /// Returns an iterator over `(position, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        self.size.positions().zip(&self.cells)
    }

    /// Returns an iterator over the values in row-major order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Returns a mutable iterator over `(position, value)` pairs in row-major
    /// order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Position, &mut T)> {
        self.size.positions().zip(&mut self.cells)
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &T {
        match self.size.index_of(pos) {
            Some(i) => &self.cells[i],
            None => panic!("position {pos} out of bounds for {} grid", self.size),
        }
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, pos: Position) -> &mut T {
        match self.size.index_of(pos) {
            Some(i) => &mut self.cells[i],
            None => panic!("position {pos} out of bounds for {} grid", self.size),
        }
    }
}
