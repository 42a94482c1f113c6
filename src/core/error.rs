//! Game error types
//!
//! Every condition here is recoverable. Callers decide how to present it and
//! may simply re-prompt; none of these messages are meant for end users
//! (see `output::locale` for the localized text).

use std::fmt;

/// Why a raw input was rejected as a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Input did not have exactly 3 characters (carries the actual count)
    WrongLength(usize),
    /// Input contained a character that is not a decimal digit
    NonDigit(char),
    /// Input repeated a digit
    DuplicateDigit(u8),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => {
                write!(f, "Guess must be exactly 3 digits, got {len} characters")
            }
            Self::NonDigit(ch) => write!(f, "Guess must contain only digits, found {ch:?}"),
            Self::DuplicateDigit(digit) => write!(f, "Guess repeats the digit {digit}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Why a submission was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The input failed validation; the game state is unchanged
    Validation(ValidationError),
    /// The game was already won; only a reset leaves this state
    GameOver,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "Invalid guess: {err}"),
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::GameOver => None,
        }
    }
}

impl From<ValidationError> for SubmitError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}
