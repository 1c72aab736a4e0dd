//! New-game configuration.

use crate::BoardSize;

/// An error raised while validating a board configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The board would have no cells.
    #[display("board dimensions must be non-zero, got {height}x{width}")]
    EmptyDimension {
        /// Requested number of rows.
        height: usize,
        /// Requested number of columns.
        width: usize,
    },
    /// The mine count leaves no room for the cells that must stay safe.
    #[display("cannot place {mines} mines, at most {limit} fit on this board")]
    TooManyMines {
        /// Requested number of mines.
        mines: usize,
        /// Largest mine count accepted for the board.
        limit: usize,
    },
}

/// Validated dimensions and mine count for a new game.
///
/// The mine count is always strictly less than the number of cells, so at
/// least one safe cell exists and the game can be won. This check is made
/// here regardless of any range validation done by the caller.
///
/// # Examples
///
/// ```
/// use mines_core::{BoardConfig, ConfigError};
///
/// let config = BoardConfig::new(10, 10, 15)?;
/// assert_eq!(config.mines(), 15);
/// assert_eq!(config.safe_cells(), 85);
///
/// // A board full of mines cannot be won
/// assert!(matches!(
///     BoardConfig::new(2, 2, 4),
///     Err(ConfigError::TooManyMines { mines: 4, limit: 3 })
/// ));
/// # Ok::<(), ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardConfig {
    size: BoardSize,
    mines: usize,
}

impl BoardConfig {
    /// Validates a `height × width` board holding `mines` mines.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyDimension`] if either dimension is zero, and
    /// [`ConfigError::TooManyMines`] if `mines >= height * width`.
    pub fn new(height: usize, width: usize, mines: usize) -> Result<Self, ConfigError> {
        Self::with_size(BoardSize::new(height, width)?, mines)
    }

    /// Validates a mine count for already validated dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooManyMines`] if `mines >= size.cell_count()`.
    pub fn with_size(size: BoardSize, mines: usize) -> Result<Self, ConfigError> {
        let limit = size.cell_count() - 1;
        if mines > limit {
            return Err(ConfigError::TooManyMines { mines, limit });
        }
        Ok(Self { size, mines })
    }

    /// Returns the board dimensions.
    #[must_use]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the number of mines to place.
    #[must_use]
    pub const fn mines(&self) -> usize {
        self.mines
    }

    /// Returns the number of cells that do not hold a mine.
    #[must_use]
    pub const fn safe_cells(&self) -> usize {
        self.size.cell_count() - self.mines
    }
}
