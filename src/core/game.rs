//! Game state and turn handling
//!
//! A `GameState` is an ordinary owned value: the caller keeps it, passes it to
//! each operation, and may run as many independent games as it likes.
//! A game that has not been started yet is simply a missing `GameState`.

use super::digits::{Guess, Secret};
use super::error::{SubmitError, ValidationError};
use super::score::Score;
use tracing::debug;

/// Where a started game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won,
}

/// One accepted guess and its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: Guess,
    pub score: Score,
    /// Attempt number of this guess, starting at 1
    pub attempt: u32,
}

/// State of a single game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    secret: Secret,
    attempts: u32,
    is_over: bool,
}

impl GameState {
    /// Start a game with a known secret
    #[must_use]
    pub const fn with_secret(secret: Secret) -> Self {
        Self {
            secret,
            attempts: 0,
            is_over: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Secret {
        &self.secret
    }

    /// Number of valid guesses made so far
    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.is_over
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.is_over {
            Phase::Won
        } else {
            Phase::Playing
        }
    }

    /// Validate and score a raw guess, advancing the game
    ///
    /// On success the attempt counter goes up by one, and a perfect score
    /// ends the game. On any error the state is left exactly as it was.
    ///
    /// # Errors
    /// - `SubmitError::GameOver` if the game was already won, whatever the input
    /// - `SubmitError::Validation` if the input is not a legal guess
    ///
    /// # Examples
    /// ```
    /// use number_baseball::core::{GameState, Phase, Secret, SubmitError};
    ///
    /// let mut game = GameState::with_secret(Secret::from_digits([1, 2, 3]).unwrap());
    ///
    /// let turn = game.submit_guess("321").unwrap();
    /// assert_eq!((turn.score.strikes(), turn.score.balls()), (1, 2));
    ///
    /// game.submit_guess("123").unwrap();
    /// assert_eq!(game.phase(), Phase::Won);
    /// assert_eq!(game.submit_guess("456"), Err(SubmitError::GameOver));
    /// assert_eq!(game.attempts(), 2);
    /// ```
    pub fn submit_guess(&mut self, raw_input: &str) -> Result<Turn, SubmitError> {
        if self.is_over {
            return Err(SubmitError::GameOver);
        }

        let guess = validate_guess(raw_input)?;
        self.play(guess)
    }

    /// Play an already validated guess
    ///
    /// Same transition as [`Self::submit_guess`] without the parsing step;
    /// used by the solver front ends.
    ///
    /// # Errors
    /// Returns `SubmitError::GameOver` if the game was already won.
    pub fn play(&mut self, guess: Guess) -> Result<Turn, SubmitError> {
        if self.is_over {
            return Err(SubmitError::GameOver);
        }

        let score = score_guess(&guess, self);

        self.attempts += 1;
        if score.is_perfect() {
            self.is_over = true;
        }

        debug!(
            %guess,
            %score,
            attempt = self.attempts,
            won = self.is_over,
            "guess submitted"
        );

        Ok(Turn {
            guess,
            score,
            attempt: self.attempts,
        })
    }
}

/// Check raw input and turn it into a guess
///
/// # Errors
/// Returns the first failed check, in the order length, digits, duplicates.
pub fn validate_guess(input: &str) -> Result<Guess, ValidationError> {
    Guess::parse(input)
}

/// Score a validated guess against the game's secret
///
/// Pure: the state is only read.
///
/// # Panics
/// Panics if the game is already over. Scoring a finished game is a caller
/// bug; `GameState::submit_guess` checks this before it gets here.
#[must_use]
pub fn score_guess(guess: &Guess, state: &GameState) -> Score {
    assert!(
        !state.is_over(),
        "score_guess called on a finished game (secret {})",
        state.secret()
    );
    Score::calculate(guess, state.secret())
}
