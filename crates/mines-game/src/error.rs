use mines_core::{BoardSize, ConfigError, Position};

/// An error returned by board and game operations.
///
/// Intents that are legal but have no effect (revealing a flagged cell,
/// flagging after the game ended, ...) are not errors; they return
/// [`Outcome::NoOp`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GameError {
    /// The requested dimensions or mine count cannot form a playable board.
    #[display("invalid configuration: {_0}")]
    #[from]
    InvalidConfiguration(ConfigError),
    /// An intent referenced a cell outside the board.
    #[display("position {pos} is outside the {size} board")]
    OutOfBounds {
        /// The rejected position.
        pos: Position,
        /// The board dimensions.
        size: BoardSize,
    },
}

/// The result of an accepted intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Outcome {
    /// At least one cell changed state.
    Applied,
    /// Nothing changed; no notification was emitted.
    NoOp,
}
