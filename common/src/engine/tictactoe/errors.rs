use std::fmt;

use super::types::CELL_COUNT;

/// A move the rules reject. The board is left untouched when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfRange { index: i64 },
    Occupied { index: usize },
    NoPlayerMark { index: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange { index } => {
                write!(f, "Cell {} is out of range 0..={}", index, CELL_COUNT - 1)
            }
            MoveError::Occupied { index } => write!(f, "Cell {} is already marked", index),
            MoveError::NoPlayerMark { index } => write!(f, "Cell {} cannot be marked Empty", index),
        }
    }
}

impl std::error::Error for MoveError {}

/// Which of the three input problems the view should report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputErrorKind {
    Type,
    Range,
    Occupied,
}

/// Rejected human input. Always recovered by prompting again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    NotAnInteger { raw: String },
    InvalidMove(MoveError),
}

impl InputError {
    pub fn kind(&self) -> InputErrorKind {
        match self {
            InputError::NotAnInteger { .. } => InputErrorKind::Type,
            InputError::InvalidMove(MoveError::OutOfRange { .. }) => InputErrorKind::Range,
            InputError::InvalidMove(MoveError::Occupied { .. }) => InputErrorKind::Occupied,
            // Player text only ever places X.
            InputError::InvalidMove(MoveError::NoPlayerMark { .. }) => InputErrorKind::Type,
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotAnInteger { raw } => write!(f, "'{}' is not an integer", raw),
            InputError::InvalidMove(e) => write!(f, "Invalid move: {}", e),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::NotAnInteger { .. } => None,
            InputError::InvalidMove(e) => Some(e),
        }
    }
}

impl From<MoveError> for InputError {
    fn from(e: MoveError) -> Self {
        InputError::InvalidMove(e)
    }
}
