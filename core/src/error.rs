use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must hold exactly 64 tiles")]
    InvalidBoardShape,
    #[error("Tile was already flipped by this team")]
    AlreadyFlipped,
    #[error("It is not this team's turn")]
    NotYourTurn,
    #[error("Team can no longer play")]
    TeamFinished,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Invalid rule settings: {0}")]
    InvalidSettings(&'static str),
}

pub type Result<T> = core::result::Result<T, GameError>;
