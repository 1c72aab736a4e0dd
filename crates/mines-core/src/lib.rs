//! Core data structures for Minesweeper boards.
//!
//! This crate provides the coordinate and container types shared by mine
//! placement, the board engine and shell-side helpers.
//!
//! # Overview
//!
//! 1. **Coordinates** - Where a cell is
//!    - [`position`]: `(row, col)` coordinates of a single cell
//!    - [`board_size`]: Validated board dimensions, bounds checks and
//!      Moore-neighborhood enumeration
//!
//! 2. **Containers** - What is stored per cell
//!    - [`grid`]: A dense, row-major [`Grid`] indexed by [`Position`]
//!    - [`layout`]: A [`MineLayout`] describing which cells hold mines
//!
//! 3. **Configuration** - What a new game is asked for
//!    - [`config`]: [`BoardConfig`] and its [`ConfigError`]
//!
//! # Examples
//!
//! ```
//! use mines_core::{BoardConfig, MineLayout, Position};
//!
//! let config = BoardConfig::new(3, 3, 1)?;
//! let layout = MineLayout::from_positions(config.size(), [Position::new(1, 1)]);
//!
//! // Every other cell touches the single mine in the middle
//! assert_eq!(layout.mine_count(), 1);
//! assert_eq!(layout.neighbor_mines(Position::new(0, 0)), 1);
//! # Ok::<(), mines_core::ConfigError>(())
//! ```

pub mod board_size;
pub mod config;
pub mod grid;
pub mod layout;
pub mod position;

pub use self::{
    board_size::{BoardSize, Neighbors},
    config::{BoardConfig, ConfigError},
    grid::Grid,
    layout::MineLayout,
    position::Position,
};
