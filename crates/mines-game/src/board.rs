use mines_core::{BoardConfig, BoardSize, Grid, MineLayout, Position};
use mines_generator::MineGenerator;

use crate::{Cell, CellDisplay, GameError, GameObserver, GameOutcome, Outcome};

/// Whether a board still accepts intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum GameStatus {
    /// The game is in progress.
    Playing,
    /// Every safe cell has been revealed.
    Won,
    /// A mine has been revealed.
    Lost,
}

impl GameStatus {
    /// Returns `true` once the game is won or lost.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !self.is_playing()
    }
}

impl From<GameOutcome> for GameStatus {
    fn from(outcome: GameOutcome) -> Self {
        match outcome {
            GameOutcome::Won => Self::Won,
            GameOutcome::Lost => Self::Lost,
        }
    }
}

/// A Minesweeper board.
///
/// The board owns every [`Cell`] and applies the three player intents:
/// [`reveal`](Self::reveal), [`toggle_flag`](Self::toggle_flag) and
/// [`chord`](Self::chord). Each intent reports what it changed to a
/// [`GameObserver`].
///
/// Once the board is won or lost it becomes read-only: every further intent
/// returns [`Outcome::NoOp`].
///
/// # Example
///
/// ```
/// use mines_core::{BoardSize, MineLayout, Position};
/// use mines_game::{Board, CellDisplay};
///
/// // * . .
/// // . . .
/// // . . .
/// let size = BoardSize::new(3, 3)?;
/// let layout = MineLayout::from_positions(size, [Position::new(0, 0)]);
/// let mut board = Board::from_layout(&layout)?;
///
/// // Revealing the far corner floods every safe cell and wins the game
/// board.reveal(Position::new(2, 2), &mut ())?;
/// assert!(board.status().is_won());
/// assert_eq!(board.display(Position::new(1, 1))?, CellDisplay::Number(1));
/// # Ok::<(), mines_game::GameError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Grid<Cell>,
    total_mines: usize,
    flags_placed: usize,
    cells_to_reveal: usize,
    status: GameStatus,
    triggered: Option<Position>,
}

impl Board {
    /// Creates a `height × width` board with `mines` randomly placed mines.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] if either dimension is zero
    /// or `mines >= height * width`. No board is built in that case.
    pub fn new(height: usize, width: usize, mines: usize) -> Result<Self, GameError> {
        let config = BoardConfig::new(height, width, mines)?;
        let generated = MineGenerator::new().generate(&config)?;
        Self::from_layout(&generated.layout)
    }

    /// Creates a board with mines exactly where `layout` puts them.
    ///
    /// Neighbor counts are computed once here and never change afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] if the layout leaves no safe
    /// cell, since such a board could never be won.
    pub fn from_layout(layout: &MineLayout) -> Result<Self, GameError> {
        let size = layout.size();
        BoardConfig::with_size(size, layout.mine_count())?;
        let cells = Grid::from_fn(size, |pos| Cell {
            mine: layout.is_mine(pos),
            neighbor_mines: layout.neighbor_mines(pos),
            ..Cell::default()
        });
        let total_mines = layout.mine_count();
        Ok(Self {
            cells,
            total_mines,
            flags_placed: 0,
            cells_to_reveal: size.cell_count() - total_mines,
            status: GameStatus::Playing,
            triggered: None,
        })
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.cells.size()
    }

    /// Returns the game status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the number of mines on the board.
    #[must_use]
    pub fn total_mines(&self) -> usize {
        self.total_mines
    }

    /// Returns the number of flags currently placed.
    #[must_use]
    pub fn flags_placed(&self) -> usize {
        self.flags_placed
    }

    /// Returns the value shown by a mine counter: mines minus placed flags.
    ///
    /// This is not the number of unflagged mines; a wrongly placed flag still
    /// decrements it.
    #[must_use]
    pub fn mine_counter(&self) -> usize {
        self.total_mines - self.flags_placed
    }

    /// Returns the number of safe cells that still have to be revealed.
    ///
    /// The count is frozen once the game is over.
    #[must_use]
    pub fn cells_to_reveal(&self) -> usize {
        self.cells_to_reveal
    }

    /// Returns the mine that lost the game, if any.
    #[must_use]
    pub fn triggered_mine(&self) -> Option<Position> {
        self.triggered
    }

    /// Returns the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` is outside the board.
    pub fn cell(&self, pos: Position) -> Result<&Cell, GameError> {
        self.cells.get(pos).ok_or(GameError::OutOfBounds {
            pos,
            size: self.size(),
        })
    }

    /// Returns what should be drawn for the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` is outside the board.
    pub fn display(&self, pos: Position) -> Result<CellDisplay, GameError> {
        Ok(self.cell(pos)?.display(self.triggered == Some(pos)))
    }

    /// Returns an iterator over every cell's display state in row-major order.
    pub fn displays(&self) -> impl Iterator<Item = (Position, CellDisplay)> {
        self.cells
            .iter()
            .map(|(pos, cell)| (pos, cell.display(self.triggered == Some(pos))))
    }

    /// Reveals the cell at `pos` (left-click).
    ///
    /// - Revealed or flagged cells, and any cell once the game is over, are
    ///   left alone.
    /// - A cell with no adjacent mines is flood-filled: its unflagged
    ///   neighbors are revealed too, spreading through further zero cells and
    ///   stopping at the first ring of numbered cells. A flagged zero cell
    ///   stays hidden and the fill does not spread past it.
    /// - Revealing a mine loses the game; revealing the last safe cell wins it.
    ///   Either way every remaining hidden cell is then revealed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` is outside the board.
    pub fn reveal<O>(&mut self, pos: Position, observer: &mut O) -> Result<Outcome, GameError>
    where
        O: GameObserver + ?Sized,
    {
        let cell = *self.cell(pos)?;
        if self.status.is_terminal() || cell.revealed || cell.flagged {
            return Ok(Outcome::NoOp);
        }
        log::trace!("reveal {pos}");

        if cell.mine {
            self.cells[pos].revealed = true;
            self.triggered = Some(pos);
            observer.on_cell_changed(pos, CellDisplay::TriggeredMine);
            self.finish(GameOutcome::Lost, observer);
            return Ok(Outcome::Applied);
        }

        self.flood_reveal(pos, observer);
        if self.cells_to_reveal == 0 {
            self.finish(GameOutcome::Won, observer);
        }
        Ok(Outcome::Applied)
    }

    /// Places or removes a flag on the cell at `pos` (right-click).
    ///
    /// Revealed cells cannot be flagged, and no more flags than mines can be
    /// placed; removing a flag is always possible while the game is running.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` is outside the board.
    pub fn toggle_flag<O>(&mut self, pos: Position, observer: &mut O) -> Result<Outcome, GameError>
    where
        O: GameObserver + ?Sized,
    {
        let cell = *self.cell(pos)?;
        if self.status.is_terminal() || cell.revealed {
            return Ok(Outcome::NoOp);
        }

        if cell.flagged {
            self.flags_placed -= 1;
        } else if self.flags_placed == self.total_mines {
            return Ok(Outcome::NoOp);
        } else {
            self.flags_placed += 1;
        }
        log::trace!("toggle flag {pos}");

        let cell = &mut self.cells[pos];
        cell.flagged = !cell.flagged;
        observer.on_cell_changed(pos, cell.display(false));
        observer.on_mine_counter_changed(self.mine_counter());
        Ok(Outcome::Applied)
    }

    /// Reveals the neighbors of a revealed cell (middle-click).
    ///
    /// This only happens when the number of flagged neighbors equals the cell's
    /// neighbor mine count. Each neighbor is then passed to
    /// [`reveal`](Self::reveal), so flagged and revealed neighbors are skipped
    /// and a wrongly flagged neighborhood loses the game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` is outside the board.
    pub fn chord<O>(&mut self, pos: Position, observer: &mut O) -> Result<Outcome, GameError>
    where
        O: GameObserver + ?Sized,
    {
        let cell = *self.cell(pos)?;
        if self.status.is_terminal() || !cell.revealed {
            return Ok(Outcome::NoOp);
        }

        let neighbors = self.size().neighbors(pos);
        let flagged = neighbors
            .iter()
            .filter(|&&neighbor| self.cells[neighbor].flagged)
            .count();
        if flagged != usize::from(cell.neighbor_mines) {
            return Ok(Outcome::NoOp);
        }
        log::trace!("chord {pos}");

        let mut outcome = Outcome::NoOp;
        for neighbor in neighbors {
            if self.reveal(neighbor, observer)?.is_applied() {
                outcome = Outcome::Applied;
            }
        }
        Ok(outcome)
    }

    fn flood_reveal<O>(&mut self, start: Position, observer: &mut O)
    where
        O: GameObserver + ?Sized,
    {
        let size = self.size();
        let mut stack = vec![start];
        while let Some(pos) = stack.pop() {
            let cell = &mut self.cells[pos];
            if cell.revealed || cell.flagged {
                continue;
            }
            // Only zero cells spread, and their neighbors are never mines.
            debug_assert!(!cell.mine, "flood-fill reached mine at {pos}");

            cell.revealed = true;
            let neighbor_mines = cell.neighbor_mines;
            observer.on_cell_changed(pos, CellDisplay::Number(neighbor_mines));
            self.cells_to_reveal -= 1;

            if neighbor_mines == 0 {
                stack.extend(size.neighbors(pos).into_iter().filter(|&neighbor| {
                    let cell = &self.cells[neighbor];
                    !cell.revealed && !cell.flagged
                }));
            }
        }
    }

    fn finish<O>(&mut self, outcome: GameOutcome, observer: &mut O)
    where
        O: GameObserver + ?Sized,
    {
        self.status = outcome.into();
        for (pos, cell) in self.cells.iter_mut() {
            if !cell.revealed {
                cell.revealed = true;
                observer.on_cell_changed(pos, cell.display(false));
            }
        }
        log::debug!(
            "game over: {outcome:?}, {} safe cells left unrevealed",
            self.cells_to_reveal
        );
        observer.on_game_over(outcome);
    }
}
