use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Empty cell does not belong to a player")]
    NotAPlayer,
    #[error("Board must be 8 rows of 8 cells made of '_', 'x' and 'o'")]
    InvalidBoardShape,
    #[error("Game has not been started")]
    NotStarted,
    #[error("Game is already running")]
    AlreadyRunning,
    #[error("Game already ended, it cannot be resumed")]
    AlreadyEnded,
    #[error("No legal moves are available")]
    NoLegalMoves,
}

pub type Result<T> = core::result::Result<T, GameError>;
