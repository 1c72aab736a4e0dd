use std::time::Instant;

use mines_core::{BoardConfig, MineLayout, Position};
use mines_generator::{BoardSeed, MineGenerator};

use crate::{
    Board, GameClock, GameEffects, GameError, GameObserver, GameOutcome, GameStatus, NoEffects,
    Outcome,
};

/// A Minesweeper session.
///
/// `Game` owns the current [`Board`] and everything around it: the generator
/// used to start new games, the [`GameObserver`] that receives board
/// notifications, the [`GameEffects`] collaborator called when a game ends, and
/// the [`GameClock`].
///
/// Starting a new game discards the previous board entirely and reports every
/// cell of the new one to the observer.
///
/// # Example
///
/// ```
/// use mines_core::{BoardSize, MineLayout, Position};
/// use mines_game::{Game, GameEvent, GameOutcome, NoEffects};
///
/// let size = BoardSize::new(2, 1)?;
/// let layout = MineLayout::from_positions(size, [Position::new(1, 0)]);
/// let mut game = Game::from_layout(&layout, Vec::<GameEvent>::new(), NoEffects)?;
///
/// game.reveal(Position::new(0, 0))?;
/// assert!(game.status().is_won());
/// assert_eq!(
///     game.observer().last(),
///     Some(&GameEvent::GameOver { outcome: GameOutcome::Won })
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Game<O = (), E = NoEffects> {
    board: Board,
    seed: Option<BoardSeed>,
    generator: MineGenerator,
    observer: O,
    effects: E,
    clock: GameClock,
}

impl<O, E> Game<O, E>
where
    O: GameObserver,
    E: GameEffects,
{
    /// Creates a session and starts a random game for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] if the generator cannot
    /// place the configured mines.
    pub fn new(
        config: &BoardConfig,
        generator: MineGenerator,
        observer: O,
        effects: E,
    ) -> Result<Self, GameError> {
        let generated = generator.generate(config)?;
        let mut game = Self {
            board: Board::from_layout(&generated.layout)?,
            seed: Some(generated.seed),
            generator,
            observer,
            effects,
            clock: GameClock::new(),
        };
        log::debug!(
            "new game: {}, {} mines, seed={}",
            config.size(),
            config.mines(),
            generated.seed
        );
        game.render_all();
        Ok(game)
    }

    /// Creates a session playing a fixed layout.
    ///
    /// The session's generator uses the default placement policy for any later
    /// [`new_game`](Self::new_game).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] if the layout leaves no safe
    /// cell.
    pub fn from_layout(layout: &MineLayout, observer: O, effects: E) -> Result<Self, GameError> {
        let mut game = Self {
            board: Board::from_layout(layout)?,
            seed: None,
            generator: MineGenerator::new(),
            observer,
            effects,
            clock: GameClock::new(),
        };
        game.render_all();
        Ok(game)
    }

    /// Starts a new random `height × width` game with `mines` mines.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] if the dimensions or mine
    /// count are rejected. The current game is left untouched in that case.
    pub fn new_game(&mut self, height: usize, width: usize, mines: usize) -> Result<(), GameError> {
        let config = BoardConfig::new(height, width, mines)?;
        self.new_game_with_seed(&config, BoardSeed::random())
    }

    /// Starts the game determined by `config` and `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] if the generator cannot
    /// place the configured mines. The current game is left untouched in that
    /// case.
    pub fn new_game_with_seed(
        &mut self,
        config: &BoardConfig,
        seed: BoardSeed,
    ) -> Result<(), GameError> {
        let generated = self.generator.generate_with_seed(config, seed)?;
        log::debug!(
            "new game: {}, {} mines, seed={seed}",
            config.size(),
            config.mines()
        );
        self.board = Board::from_layout(&generated.layout)?;
        self.seed = Some(seed);
        self.clock.reset();
        self.render_all();
        Ok(())
    }

    /// Reports every cell and the mine counter to the observer.
    pub fn render_all(&mut self) {
        for (pos, display) in self.board.displays() {
            self.observer.on_cell_changed(pos, display);
        }
        self.observer
            .on_mine_counter_changed(self.board.mine_counter());
    }

    /// Reveals a cell. See [`Board::reveal`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` is outside the board.
    pub fn reveal(&mut self, pos: Position) -> Result<Outcome, GameError> {
        self.apply(|board, observer| board.reveal(pos, observer))
    }

    /// Toggles a flag. See [`Board::toggle_flag`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` is outside the board.
    pub fn toggle_flag(&mut self, pos: Position) -> Result<Outcome, GameError> {
        self.apply(|board, observer| board.toggle_flag(pos, observer))
    }

    /// Chords a revealed cell. See [`Board::chord`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` is outside the board.
    pub fn chord(&mut self, pos: Position) -> Result<Outcome, GameError> {
        self.apply(|board, observer| board.chord(pos, observer))
    }

    fn apply<F>(&mut self, intent: F) -> Result<Outcome, GameError>
    where
        F: FnOnce(&mut Board, &mut O) -> Result<Outcome, GameError>,
    {
        if self.board.status().is_terminal() {
            // Still validates the coordinate; never changes anything.
            return intent(&mut self.board, &mut self.observer);
        }

        let outcome = intent(&mut self.board, &mut self.observer)?;
        let now = Instant::now();
        self.clock.start_at(now);

        match self.board.status() {
            GameStatus::Playing => {}
            GameStatus::Won => self.game_over(GameOutcome::Won, now),
            GameStatus::Lost => self.game_over(GameOutcome::Lost, now),
        }
        Ok(outcome)
    }

    fn game_over(&mut self, outcome: GameOutcome, now: Instant) {
        self.clock.stop_at(now);
        log::debug!(
            "game over: {outcome:?} after {}s",
            self.clock.elapsed_secs_at(now)
        );
        match outcome {
            GameOutcome::Won => self.effects.won(),
            GameOutcome::Lost => self.effects.lost(),
        }
    }
}

impl<O, E> Game<O, E> {
    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the status of the current game.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// Returns configured mines minus placed flags.
    #[must_use]
    pub fn mine_counter(&self) -> usize {
        self.board.mine_counter()
    }

    /// Returns the seed of the current game, or `None` for a fixed layout.
    #[must_use]
    pub fn seed(&self) -> Option<BoardSeed> {
        self.seed
    }

    /// Returns the observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably, e.g. to drain recorded events.
    #[must_use]
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Returns the effects collaborator.
    #[must_use]
    pub fn effects(&self) -> &E {
        &self.effects
    }

    /// Returns the game clock.
    #[must_use]
    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Returns the whole seconds played so far, capped at
    /// [`MAX_ELAPSED_SECS`](crate::MAX_ELAPSED_SECS).
    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        self.clock.elapsed_secs_at(Instant::now())
    }
}
