use mines_core::{BoardConfig, BoardSize, ConfigError, MineLayout, Position};
use rand::{SeedableRng as _, seq::index};
use rand_pcg::Pcg64;

use crate::BoardSeed;

/// Which cells are eligible to hold a mine.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementPolicy {
    /// Every cell is eligible; mines are drawn uniformly from the whole board.
    #[default]
    Uniform,
    /// The distinct corner cells of the board never hold a mine.
    AvoidCorners,
}

impl PlacementPolicy {
    /// Returns `true` if a mine may be placed at `pos` on a board of `size`.
    #[must_use]
    pub fn is_eligible(self, size: BoardSize, pos: Position) -> bool {
        match self {
            Self::Uniform => size.contains(pos),
            Self::AvoidCorners => size.contains(pos) && !size.is_corner(pos),
        }
    }

    /// Returns the number of cells eligible for a mine on a board of `size`.
    #[must_use]
    pub fn eligible_cells(self, size: BoardSize) -> usize {
        match self {
            Self::Uniform => size.cell_count(),
            Self::AvoidCorners => size.cell_count() - size.corners().len(),
        }
    }
}

/// A generated layout together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLayout {
    /// The mine layout.
    pub layout: MineLayout,
    /// The seed that reproduces `layout` for the same configuration and policy.
    pub seed: BoardSeed,
}

/// Places mines on a board.
///
/// The number of mines is taken from the [`BoardConfig`]; the positions are
/// distinct cells chosen uniformly at random among the cells allowed by the
/// [`PlacementPolicy`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MineGenerator {
    policy: PlacementPolicy,
}

impl MineGenerator {
    /// Creates a generator using [`PlacementPolicy::Uniform`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator using the given placement policy.
    #[must_use]
    pub fn with_policy(policy: PlacementPolicy) -> Self {
        Self { policy }
    }

    /// Returns the placement policy.
    #[must_use]
    pub fn policy(&self) -> PlacementPolicy {
        self.policy
    }

    /// Generates a layout from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooManyMines`] if the policy leaves fewer
    /// eligible cells than the configured mine count.
    pub fn generate(&self, config: &BoardConfig) -> Result<GeneratedLayout, ConfigError> {
        self.generate_with_seed(config, BoardSeed::random())
    }

    /// Generates the layout determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooManyMines`] if the policy leaves fewer
    /// eligible cells than the configured mine count. The check is made before
    /// any sampling takes place.
    pub fn generate_with_seed(
        &self,
        config: &BoardConfig,
        seed: BoardSeed,
    ) -> Result<GeneratedLayout, ConfigError> {
        let size = config.size();
        let mines = config.mines();
        let eligible: Vec<Position> = size
            .positions()
            .filter(|&pos| self.policy.is_eligible(size, pos))
            .collect();
        if mines > eligible.len() {
            return Err(ConfigError::TooManyMines {
                mines,
                limit: eligible.len(),
            });
        }

        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let chosen = index::sample(&mut rng, eligible.len(), mines);
        let layout = MineLayout::from_positions(size, chosen.into_iter().map(|i| eligible[i]));

        log::debug!(
            "generated {size} layout with {mines} mines ({:?}), seed={seed}",
            self.policy
        );
        Ok(GeneratedLayout { layout, seed })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SEED: &str = "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3";

    fn seed() -> BoardSeed {
        SEED.parse().unwrap()
    }

    #[test]
    fn test_same_seed_same_layout() {
        let config = BoardConfig::new(16, 16, 40).unwrap();
        let generator = MineGenerator::new();
        let a = generator.generate_with_seed(&config, seed()).unwrap();
        let b = generator.generate_with_seed(&config, seed()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed, seed());
    }

    #[test]
    fn test_zero_mines() {
        let config = BoardConfig::new(5, 5, 0).unwrap();
        let generated = MineGenerator::new().generate(&config).unwrap();
        assert_eq!(generated.layout.mine_count(), 0);
    }

    #[test]
    fn test_uniform_fills_all_but_one_cell() {
        let config = BoardConfig::new(3, 3, 8).unwrap();
        let generated = MineGenerator::new()
            .generate_with_seed(&config, seed())
            .unwrap();
        assert_eq!(generated.layout.mine_count(), 8);
    }

    #[test]
    fn test_avoid_corners_keeps_corners_clear() {
        let config = BoardConfig::new(5, 5, 21).unwrap();
        let generator = MineGenerator::with_policy(PlacementPolicy::AvoidCorners);
        let generated = generator.generate_with_seed(&config, seed()).unwrap();

        assert_eq!(generated.layout.mine_count(), 21);
        for corner in config.size().corners() {
            assert!(!generated.layout.is_mine(corner));
        }
    }

    #[test]
    fn test_avoid_corners_rejects_overfull_board() {
        // 5x5 has 21 non-corner cells
        let config = BoardConfig::new(5, 5, 22).unwrap();
        let generator = MineGenerator::with_policy(PlacementPolicy::AvoidCorners);
        assert_eq!(
            generator.generate(&config),
            Err(ConfigError::TooManyMines {
                mines: 22,
                limit: 21
            })
        );

        // A 2x1 board is all corners
        let config = BoardConfig::new(2, 1, 1).unwrap();
        assert!(generator.generate(&config).is_err());
        assert!(MineGenerator::new().generate(&config).is_ok());
    }

    #[test]
    fn test_eligible_cells() {
        let size = BoardSize::new(1, 1).unwrap();
        assert_eq!(PlacementPolicy::Uniform.eligible_cells(size), 1);
        assert_eq!(PlacementPolicy::AvoidCorners.eligible_cells(size), 0);

        let size = BoardSize::new(1, 4).unwrap();
        assert_eq!(PlacementPolicy::AvoidCorners.eligible_cells(size), 2);
    }

    proptest! {
        #[test]
        fn prop_places_exact_mine_count(
            height in 1usize..16,
            width in 1usize..16,
            ratio in 0.0f64..1.0,
            bytes in any::<[u8; 32]>(),
        ) {
            let cells = height * width;
            #[expect(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                clippy::cast_precision_loss
            )]
            let mines = ((cells as f64) * ratio) as usize % cells;
            let config = BoardConfig::new(height, width, mines).unwrap();
            let generated = MineGenerator::new()
                .generate_with_seed(&config, BoardSeed::from_bytes(bytes))
                .unwrap();
            prop_assert_eq!(generated.layout.mine_count(), mines);
            prop_assert_eq!(generated.layout.mine_positions().count(), mines);
        }
    }
}
