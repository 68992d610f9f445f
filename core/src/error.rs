use alloc::string::String;
use thiserror::Error;

use crate::{CellCount, Coord, Symbol};

/// Broad category of a [`GameError`], deciding how a caller should react to it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad game setup, fatal to game start.
    Configuration,
    /// Bad guess, report it and ask for the same guess again.
    Guess,
    /// The core contract was used incorrectly.
    Invariant,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board size must be one of 4, 6, 8 or 10, got {0}")]
    InvalidSize(Coord),
    #[error("Not enough symbols, board needs {needed} but only {available} are available")]
    InsufficientSymbols { needed: CellCount, available: usize },
    #[error("Symbol pool is exhausted")]
    ExhaustedPool,
    #[error("At least one player is required")]
    NoPlayers,
    #[error("Player names must not be empty")]
    EmptyPlayerName,
    #[error("Invalid coordinate for guess")]
    InvalidCoords,
    #[error("Position has already been guessed")]
    AlreadyRevealed,
    #[error("Cell is not provisionally revealed")]
    NotProvisional,
    #[error("A guess pair is already provisionally revealed")]
    TooManyProvisional,
    #[error("Both cells of a pair must be distinct")]
    SameCell,
    #[error("Cells do not hold the same symbol")]
    NotAPair,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Symbol {0} does not appear in exactly two cells")]
    UnpairedSymbol(Symbol),
    #[error("Guess pair must be resolved before guessing again")]
    PendingResolution,
    #[error("No guess pair is waiting to be resolved")]
    NothingToResolve,
    #[error("Game is still in progress")]
    GameInProgress,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

impl GameError {
    pub const fn kind(&self) -> ErrorKind {
        use GameError::*;
        match self {
            InvalidSize(_) | InsufficientSymbols { .. } | NoPlayers | EmptyPlayerName => {
                ErrorKind::Configuration
            }
            InvalidCoords | AlreadyRevealed => ErrorKind::Guess,
            ExhaustedPool | NotProvisional | TooManyProvisional | SameCell | NotAPair
            | InvalidBoardShape | UnpairedSymbol(_) | PendingResolution | NothingToResolve
            | GameInProgress | AlreadyEnded => ErrorKind::Invariant,
        }
    }

    /// Whether the same guess slot can simply be asked for again.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Guess)
    }
}

/// Failure to read a coordinate pair out of raw user text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Incorrect formatting for guess, expected two numbers but got {0}")]
    WrongArity(usize),
    #[error("Invalid coordinate for guess: {0:?}")]
    NotANumber(String),
}

pub type Result<T> = core::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_guess_errors_are_recoverable() {
        assert!(GameError::InvalidCoords.is_recoverable());
        assert!(GameError::AlreadyRevealed.is_recoverable());
        assert!(!GameError::AlreadyEnded.is_recoverable());
        assert!(!GameError::NoPlayers.is_recoverable());
        assert_eq!(
            GameError::InsufficientSymbols {
                needed: 8,
                available: 3
            }
            .kind(),
            ErrorKind::Configuration
        );
        assert_eq!(GameError::NotProvisional.kind(), ErrorKind::Invariant);
    }
}
