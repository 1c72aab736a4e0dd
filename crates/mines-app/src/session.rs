use mines_core::Position;
use mines_game::{Game, GameEffects, GameError, GameObserver, NoEffects, Outcome};
use mines_generator::{BoardSeed, MineGenerator};

use crate::{
    input::{ClickClassifier, ClickIntent, MouseButton},
    settings::{GameSettings, SettingsError, SettingsValidator},
};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SessionError {
    #[display("{_0}")]
    Settings(SettingsError),
    #[display("{_0}")]
    Game(GameError),
}

/// A game driven by raw mouse events.
///
/// Button events on a cell are classified into intents and applied to the
/// game; settings changes are validated before they replace the game.
#[derive(Debug)]
pub struct Session<O = (), E = NoEffects> {
    game: Game<O, E>,
    classifier: ClickClassifier,
    validator: SettingsValidator,
    settings: GameSettings,
}

impl<O, E> Session<O, E>
where
    O: GameObserver,
    E: GameEffects,
{
    /// Starts a session with a game for `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Settings`] if `settings` are rejected.
    pub fn new(
        settings: GameSettings,
        generator: MineGenerator,
        observer: O,
        effects: E,
    ) -> Result<Self, SessionError> {
        let validator = SettingsValidator::new();
        let config = validator.validate(&settings)?;
        let game = Game::new(&config, generator, observer, effects)?;
        Ok(Self {
            game,
            classifier: ClickClassifier::new(),
            validator,
            settings,
        })
    }

    /// Handles a button press on the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if an intent targets a cell outside
    /// the board.
    pub fn press(
        &mut self,
        pos: Position,
        button: MouseButton,
    ) -> Result<Option<Outcome>, GameError> {
        let intent = self.classifier.press(button);
        intent.map(|intent| self.dispatch(intent, pos)).transpose()
    }

    /// Handles a button release on the cell at `pos`. `over_cell` tells
    /// whether the pointer is still over that cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if an intent targets a cell outside
    /// the board.
    pub fn release(
        &mut self,
        pos: Position,
        button: MouseButton,
        over_cell: bool,
    ) -> Result<Option<Outcome>, GameError> {
        let intent = self.classifier.release(button, over_cell);
        intent.map(|intent| self.dispatch(intent, pos)).transpose()
    }

    /// Applies an intent directly.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` is outside the board.
    pub fn dispatch(&mut self, intent: ClickIntent, pos: Position) -> Result<Outcome, GameError> {
        log::trace!("{intent:?} at {pos}");
        match intent {
            ClickIntent::Reveal => self.game.reveal(pos),
            ClickIntent::ToggleFlag => self.game.toggle_flag(pos),
            ClickIntent::Chord => self.game.chord(pos),
        }
    }

    /// Validates `settings` and starts a new game with them.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Settings`] if `settings` are rejected; the
    /// current game and settings are kept in that case.
    pub fn apply_settings(&mut self, settings: GameSettings) -> Result<(), SessionError> {
        let config = self.validator.validate(&settings)?;
        self.game.new_game_with_seed(&config, BoardSeed::random())?;
        self.settings = settings;
        self.classifier.reset();
        Ok(())
    }

    /// Starts a new game with the current settings.
    ///
    /// # Errors
    ///
    /// Fails only if the current settings became invalid, which
    /// [`apply_settings`](Self::apply_settings) prevents.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        self.apply_settings(self.settings)
    }
}

impl<O, E> Session<O, E> {
    #[must_use]
    pub fn game(&self) -> &Game<O, E> {
        &self.game
    }

    #[must_use]
    pub fn game_mut(&mut self) -> &mut Game<O, E> {
        &mut self.game
    }

    #[must_use]
    pub fn settings(&self) -> GameSettings {
        self.settings
    }
}

#[cfg(test)]
mod tests {
    use mines_game::{CellDisplay, GameEvent};

    use super::*;

    fn session() -> Session<Vec<GameEvent>> {
        Session::new(
            GameSettings::default(),
            MineGenerator::new(),
            Vec::<GameEvent>::new(),
            NoEffects,
        )
        .unwrap()
    }

    /// A safe cell of the current board.
    fn safe_cell<O, E>(session: &Session<O, E>) -> Position {
        let board = session.game().board();
        board
            .size()
            .positions()
            .find(|&pos| !board.cell(pos).unwrap().is_mine())
            .unwrap()
    }

    #[test]
    fn test_new_session_renders_board() {
        let session = session();
        // 100 cells and the mine counter
        assert_eq!(session.game().observer().len(), 101);
        assert_eq!(session.game().mine_counter(), 15);
    }

    #[test]
    fn test_invalid_initial_settings() {
        let result = Session::new(
            GameSettings {
                height: 3,
                width: 3,
                mines: 1,
            },
            MineGenerator::new(),
            (),
            NoEffects,
        );
        assert!(matches!(
            result,
            Err(SessionError::Settings(
                SettingsError::DimensionOutOfRange { .. }
            ))
        ));
    }

    #[test]
    fn test_secondary_click_flags_cell() {
        let mut session = session();
        let pos = Position::new(0, 0);
        session.game_mut().observer_mut().clear();

        assert_eq!(session.press(pos, MouseButton::Secondary), Ok(None));
        assert_eq!(
            session.release(pos, MouseButton::Secondary, true),
            Ok(Some(Outcome::Applied))
        );
        assert_eq!(
            session.game().observer().as_slice(),
            &[
                GameEvent::CellChanged {
                    pos,
                    display: CellDisplay::Flagged
                },
                GameEvent::MineCounterChanged { remaining: 14 },
            ]
        );
    }

    #[test]
    fn test_primary_click_reveals_cell() {
        let mut session = session();
        let pos = safe_cell(&session);

        session.press(pos, MouseButton::Primary).unwrap();
        session.release(pos, MouseButton::Primary, true).unwrap();
        assert!(session.game().board().cell(pos).unwrap().is_revealed());
    }

    #[test]
    fn test_release_outside_does_nothing() {
        let mut session = session();
        let pos = safe_cell(&session);

        session.press(pos, MouseButton::Primary).unwrap();
        assert_eq!(session.release(pos, MouseButton::Primary, false), Ok(None));
        assert!(!session.game().board().cell(pos).unwrap().is_revealed());
    }

    #[test]
    fn test_out_of_bounds_intent() {
        let mut session = session();
        assert!(matches!(
            session.press(Position::new(10, 0), MouseButton::Middle),
            Err(GameError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_apply_settings_replaces_game() {
        let mut session = session();
        let settings = GameSettings {
            height: 8,
            width: 12,
            mines: 20,
        };
        session.apply_settings(settings).unwrap();
        assert_eq!(session.settings(), settings);
        assert_eq!(session.game().board().size().cell_count(), 96);
        assert_eq!(session.game().mine_counter(), 20);
    }

    #[test]
    fn test_rejected_settings_keep_game() {
        let mut session = session();
        let before = session.game().board().clone();
        let result = session.apply_settings(GameSettings {
            height: 10,
            width: 10,
            mines: 90,
        });
        assert!(matches!(
            result,
            Err(SessionError::Settings(SettingsError::MinesOutOfRange { .. }))
        ));
        assert_eq!(session.game().board(), &before);
        assert_eq!(session.settings(), GameSettings::default());
    }
}
