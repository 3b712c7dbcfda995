use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod session;
mod snapshot;
mod types;

/// Board dimensions and mine count for a new game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub(crate) const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validates a configuration, rejecting empty boards and more mines than cells.
    ///
    /// Generators run the same check again, since the fields are public.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }
        let capacity = mult(size.0, size.1);
        if mines > capacity {
            return Err(GameError::TooManyMines {
                requested: mines,
                capacity,
            });
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((9, 9), 10)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Result of a reveal intent. `NoChange` and `Revealed` both mean play continues.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn is_continue(self) -> bool {
        matches!(self, Self::NoChange | Self::Revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_nine_by_nine_with_ten_mines() {
        let config = GameConfig::default();
        assert_eq!(config.size, (9, 9));
        assert_eq!(config.mines, 10);
        assert_eq!(config.total_cells(), 81);
    }

    #[test]
    fn config_rejects_empty_boards() {
        assert_eq!(GameConfig::new((0, 5), 0), Err(GameError::EmptyBoard));
        assert_eq!(GameConfig::new((5, 0), 0), Err(GameError::EmptyBoard));
    }

    #[test]
    fn config_accepts_full_and_empty_minefields() {
        assert!(GameConfig::new((3, 3), 9).is_ok());
        assert!(GameConfig::new((3, 3), 0).is_ok());
        assert_eq!(
            GameConfig::new((3, 3), 10),
            Err(GameError::TooManyMines {
                requested: 10,
                capacity: 9
            })
        );
    }

    #[test]
    fn continue_covers_no_change_and_revealed() {
        use RevealOutcome::*;
        assert!(NoChange.is_continue() && Revealed.is_continue());
        assert!(!Won.is_continue() && !HitMine.is_continue());
        assert!(!NoChange.has_update());
    }

    #[test]
    fn mark_outcome_reports_updates() {
        assert!(MarkOutcome::Flagged.has_update());
        assert!(MarkOutcome::Unflagged.has_update());
        assert!(!MarkOutcome::NoChange.has_update());
    }
}
