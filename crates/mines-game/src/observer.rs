use mines_core::Position;

use crate::CellDisplay;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum GameOutcome {
    /// Every safe cell was revealed.
    Won,
    /// A mine was revealed.
    Lost,
}

/// Receives notifications about board changes.
///
/// A front end implements this to redraw cells and counters. Every method has
/// an empty default, so implementors only override what they need.
///
/// Within one intent, each changed cell is reported once with its final
/// display state, and [`on_game_over`](Self::on_game_over) is called at most
/// once, after the terminal reveal of the remaining cells.
pub trait GameObserver {
    /// A cell's display state changed.
    fn on_cell_changed(&mut self, pos: Position, display: CellDisplay) {
        let _ = (pos, display);
    }

    /// The mine counter (configured mines minus placed flags) changed.
    fn on_mine_counter_changed(&mut self, remaining: usize) {
        let _ = remaining;
    }

    /// The game reached a terminal state.
    fn on_game_over(&mut self, outcome: GameOutcome) {
        let _ = outcome;
    }
}

impl GameObserver for () {}

impl<O> GameObserver for &mut O
where
    O: GameObserver + ?Sized,
{
    fn on_cell_changed(&mut self, pos: Position, display: CellDisplay) {
        (**self).on_cell_changed(pos, display);
    }

    fn on_mine_counter_changed(&mut self, remaining: usize) {
        (**self).on_mine_counter_changed(remaining);
    }

    fn on_game_over(&mut self, outcome: GameOutcome) {
        (**self).on_game_over(outcome);
    }
}

/// A recorded [`GameObserver`] notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// See [`GameObserver::on_cell_changed`].
    CellChanged {
        /// The changed cell.
        pos: Position,
        /// Its new display state.
        display: CellDisplay,
    },
    /// See [`GameObserver::on_mine_counter_changed`].
    MineCounterChanged {
        /// Configured mines minus placed flags.
        remaining: usize,
    },
    /// See [`GameObserver::on_game_over`].
    GameOver {
        /// How the game ended.
        outcome: GameOutcome,
    },
}

/// Records every notification in order.
impl GameObserver for Vec<GameEvent> {
    fn on_cell_changed(&mut self, pos: Position, display: CellDisplay) {
        self.push(GameEvent::CellChanged { pos, display });
    }

    fn on_mine_counter_changed(&mut self, remaining: usize) {
        self.push(GameEvent::MineCounterChanged { remaining });
    }

    fn on_game_over(&mut self, outcome: GameOutcome) {
        self.push(GameEvent::GameOver { outcome });
    }
}
