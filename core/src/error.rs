use thiserror::Error;

use crate::Tile;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board shape must be a non-empty square")]
    InvalidBoardShape,
    #[error("Tile {0} is neither empty nor a power of two")]
    InvalidTile(Tile),
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
