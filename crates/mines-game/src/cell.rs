/// What a front end should draw for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum CellDisplay {
    /// Not revealed and not flagged.
    Hidden,
    /// Not revealed and marked with a flag.
    Flagged,
    /// A revealed safe cell with the given number of adjacent mines (0-8).
    Number(u8),
    /// A revealed mine.
    Mine,
    /// The revealed mine that ended the game.
    TriggeredMine,
}

impl CellDisplay {
    /// Returns `true` for every revealed display state.
    #[must_use]
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Number(_) | Self::Mine | Self::TriggeredMine)
    }
}

/// The state of a single cell.
///
/// The mine flag and neighbor count are fixed when the board is built; only
/// the revealed and flagged states change during play.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub(crate) mine: bool,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
    pub(crate) neighbor_mines: u8,
}

impl Cell {
    /// Returns `true` if the cell holds a mine.
    #[must_use]
    pub fn is_mine(&self) -> bool {
        self.mine
    }

    /// Returns `true` if the cell has been revealed.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns `true` if the cell carries a flag.
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// Returns the number of mines among the cell's neighbors (0-8).
    #[must_use]
    pub fn neighbor_mines(&self) -> u8 {
        self.neighbor_mines
    }

    /// Returns the display state; `triggered` marks the mine that lost the game.
    #[must_use]
    pub fn display(&self, triggered: bool) -> CellDisplay {
        match (self.revealed, self.flagged, self.mine) {
            (false, false, _) => CellDisplay::Hidden,
            (false, true, _) => CellDisplay::Flagged,
            (true, _, true) if triggered => CellDisplay::TriggeredMine,
            (true, _, true) => CellDisplay::Mine,
            (true, _, false) => CellDisplay::Number(self.neighbor_mines),
        }
    }
}
