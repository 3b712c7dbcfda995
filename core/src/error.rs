use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board needs at least one row and one column")]
    EmptyBoard,
    #[error("Too many mines, requested {requested} but only {capacity} cells")]
    TooManyMines {
        requested: CellCount,
        capacity: CellCount,
    },
    #[error("Board shape does not fit the coordinate range")]
    InvalidBoardShape,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
