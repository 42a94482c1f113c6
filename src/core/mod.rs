//! Core game logic for number baseball
//!
//! Secret generation, guess validation, strike/ball scoring and game state
//! transitions. Nothing here renders, localizes, or performs I/O; front ends
//! call in and present the values that come back.

mod digits;
mod engine;
mod error;
mod game;
mod score;

pub use digits::{DIGIT_COUNT, Guess, SECRET_SPACE, Secret};
pub use engine::GameEngine;
pub use error::{SubmitError, ValidationError};
pub use game::{GameState, Phase, Turn, score_guess, validate_guess};
pub use score::Score;
