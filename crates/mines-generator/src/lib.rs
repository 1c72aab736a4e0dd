//! Random mine placement for Minesweeper boards.
//!
//! [`MineGenerator`] turns a validated [`BoardConfig`] into a [`MineLayout`].
//! Every layout is produced from a [`BoardSeed`], so any board can be
//! reproduced exactly from its seed.
//!
//! # Placement policies
//!
//! - [`PlacementPolicy::Uniform`] (the default): mines are drawn uniformly from
//!   every cell of the board.
//! - [`PlacementPolicy::AvoidCorners`]: the corner cells never hold a mine.
//!
//! # Examples
//!
//! ```
//! use mines_core::BoardConfig;
//! use mines_generator::{BoardSeed, MineGenerator};
//!
//! let config = BoardConfig::new(10, 10, 15)?;
//! let generator = MineGenerator::new();
//!
//! let generated = generator.generate(&config)?;
//! assert_eq!(generated.layout.mine_count(), 15);
//!
//! // The same seed always yields the same layout
//! let again = generator.generate_with_seed(&config, generated.seed)?;
//! assert_eq!(again.layout, generated.layout);
//! # Ok::<(), mines_core::ConfigError>(())
//! ```
//!
//! [`BoardConfig`]: mines_core::BoardConfig
//! [`MineLayout`]: mines_core::MineLayout

mod generator;
mod seed;

pub use self::{
    generator::{GeneratedLayout, MineGenerator, PlacementPolicy},
    seed::{BoardSeed, SeedParseError},
};
