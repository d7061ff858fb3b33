use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board needs a positive size that fits the drawing surface")]
    InvalidSize,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Cannot place {requested} mines, only {available} cells are outside the safe zone")]
    NoRoomForMines {
        requested: CellCount,
        available: CellCount,
    },
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Mines were already placed for this game")]
    AlreadyStarted,
}

pub type Result<T> = core::result::Result<T, GameError>;
