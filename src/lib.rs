//! Number Baseball
//!
//! The classic three-digit guessing game (Bulls and Cows): guess a secret of
//! three distinct digits, learn strikes and balls, repeat until you hit it.
//!
//! # Quick Start
//!
//! ```rust
//! use number_baseball::core::{GameEngine, Phase};
//!
//! let mut engine = GameEngine::seeded(7);
//! let mut game = engine.start_game();
//!
//! let turn = game.submit_guess("123").unwrap();
//! println!("{}", turn.score);
//!
//! let secret = game.secret().to_string();
//! if game.phase() == Phase::Playing {
//!     game.submit_guess(&secret).unwrap();
//! }
//! assert_eq!(game.phase(), Phase::Won);
//! ```

// Core game rules
pub mod core;

// Guess selection for hints and auto-play
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output and localization
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostic logging setup
pub mod logging;
