use serde::{Deserialize, Serialize};

/// One grid position as stored by the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    mine: bool,
    revealed: bool,
    flagged: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub(crate) const fn new(mine: bool, adjacent_mines: u8) -> Self {
        Self {
            mine,
            revealed: false,
            flagged: false,
            adjacent_mines,
        }
    }

    pub const fn is_mine(self) -> bool {
        self.mine
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// Mines among the up-to-8 surrounding cells, 0..=8.
    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }

    pub(crate) const fn is_hidden_unflagged(self) -> bool {
        !self.revealed && !self.flagged
    }

    pub(crate) fn set_revealed(&mut self) {
        self.revealed = true;
    }

    pub(crate) fn set_flagged(&mut self, flagged: bool) {
        self.flagged = flagged;
    }
}

/// What a renderer should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Hidden,
    Flagged,
    Open(u8),
    Mine,
    /// The mine that ended the game
    TriggeredMine,
    /// Flag left on a safe cell after a loss
    WrongFlag,
}

impl Default for Tile {
    fn default() -> Self {
        Self::Hidden
    }
}
