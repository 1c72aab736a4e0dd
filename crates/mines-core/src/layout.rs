//! Mine layouts.

use crate::{BoardSize, Grid, Position};

/// Which cells of a board hold mines.
///
/// A layout is produced by the generator for normal play, or built from
/// explicit positions with [`from_positions`](Self::from_positions) when a
/// deterministic board is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MineLayout {
    mines: Grid<bool>,
    mine_count: usize,
}

impl MineLayout {
    /// Creates a layout with mines at exactly the given positions.
    ///
    /// Duplicate positions are counted once.
    ///
    /// # Panics
    ///
    /// Panics if any position lies outside `size`.
    #[must_use]
    pub fn from_positions<I>(size: BoardSize, positions: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut mines = Grid::new(size, false);
        for pos in positions {
            mines[pos] = true;
        }
        Self::from_grid(mines)
    }

    /// Creates a layout from a grid of mine flags.
    #[must_use]
    pub fn from_grid(mines: Grid<bool>) -> Self {
        let mine_count = mines.values().filter(|&&mine| mine).count();
        Self { mines, mine_count }
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.mines.size()
    }

    /// Returns the number of mines.
    #[must_use]
    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    /// Returns `true` if `pos` holds a mine. Out-of-bounds positions never do.
    #[must_use]
    pub fn is_mine(&self, pos: Position) -> bool {
        self.mines.get(pos).copied().unwrap_or(false)
    }

    /// Returns the number of mines among the in-bounds Moore neighbors of
    /// `pos`.
    #[must_use]
    pub fn neighbor_mines(&self, pos: Position) -> u8 {
        let count = self
            .size()
            .neighbors(pos)
            .into_iter()
            .filter(|&neighbor| self.is_mine(neighbor))
            .count();
        // A cell has at most 8 neighbors.
        u8::try_from(count).unwrap_or(u8::MAX)
    }

    /// Returns an iterator over the mine positions in row-major order.
    pub fn mine_positions(&self) -> impl Iterator<Item = Position> {
        self.mines
            .iter()
            .filter_map(|(pos, &mine)| mine.then_some(pos))
    }
}
