//! User-editable game settings and their validation.

use std::ops::RangeInclusive;

use mines_core::{BoardConfig, ConfigError};

/// Board settings as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub height: usize,
    pub width: usize,
    pub mines: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            height: 10,
            width: 10,
            mines: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SettingsError {
    #[display("height and width must be between {min} and {max}, got {height}x{width}")]
    #[from(ignore)]
    DimensionOutOfRange {
        height: usize,
        width: usize,
        min: usize,
        max: usize,
    },
    #[display("mines must be between {min} and {max} for a {height}x{width} grid, got {mines}")]
    #[from(ignore)]
    MinesOutOfRange {
        height: usize,
        width: usize,
        mines: usize,
        min: usize,
        max: usize,
    },
    #[display("{_0}")]
    Config(ConfigError),
}

/// Accepted ranges for [`GameSettings`].
///
/// Dimensions are bounded directly; the mine count is bounded by a percentage
/// of the cell count, rounded down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsValidator {
    min_grid_size: usize,
    max_grid_size: usize,
    min_mines_percent: usize,
    max_mines_percent: usize,
}

impl Default for SettingsValidator {
    fn default() -> Self {
        Self {
            min_grid_size: Self::MIN_GRID_SIZE,
            max_grid_size: Self::MAX_GRID_SIZE,
            min_mines_percent: Self::MIN_MINES_PERCENT,
            max_mines_percent: Self::MAX_MINES_PERCENT,
        }
    }
}

impl SettingsValidator {
    pub const MIN_GRID_SIZE: usize = 5;
    pub const MAX_GRID_SIZE: usize = 30;
    pub const MIN_MINES_PERCENT: usize = 5;
    pub const MAX_MINES_PERCENT: usize = 25;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn grid_size_range(&self) -> RangeInclusive<usize> {
        self.min_grid_size..=self.max_grid_size
    }

    /// Mine counts accepted for a `height × width` grid.
    ///
    /// This is computed from the candidate dimensions, so it can be shown to
    /// the user while they are still editing the grid size.
    #[must_use]
    pub fn mine_range(&self, height: usize, width: usize) -> RangeInclusive<usize> {
        let cells = height.saturating_mul(width);
        let percent = |p: usize| cells.saturating_mul(p) / 100;
        percent(self.min_mines_percent)..=percent(self.max_mines_percent)
    }

    /// Checks `settings` and converts them into a [`BoardConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::DimensionOutOfRange`] or
    /// [`SettingsError::MinesOutOfRange`] naming the accepted ranges, and
    /// [`SettingsError::Config`] if the board itself rejects the values.
    pub fn validate(&self, settings: &GameSettings) -> Result<BoardConfig, SettingsError> {
        let GameSettings {
            height,
            width,
            mines,
        } = *settings;

        let sizes = self.grid_size_range();
        if !sizes.contains(&height) || !sizes.contains(&width) {
            return Err(SettingsError::DimensionOutOfRange {
                height,
                width,
                min: *sizes.start(),
                max: *sizes.end(),
            });
        }

        let mine_range = self.mine_range(height, width);
        if !mine_range.contains(&mines) {
            return Err(SettingsError::MinesOutOfRange {
                height,
                width,
                mines,
                min: *mine_range.start(),
                max: *mine_range.end(),
            });
        }

        Ok(BoardConfig::new(height, width, mines)?)
    }
}
