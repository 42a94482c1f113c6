//! Number baseball solving algorithms
//!
//! Narrows the 720 possible secrets down with every (guess, score) pair and
//! picks the next guess with one of several strategies.

mod engine;
pub mod entropy;
pub mod minimax;
pub mod strategy;

pub use engine::Solver;
pub use strategy::{
    EntropyStrategy, HybridStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType,
};

use crate::core::{DIGIT_COUNT, Guess, Secret};
use rustc_hash::FxHashSet;

/// Digits of every remaining candidate, for O(1) "could this guess win?" checks
pub(crate) fn candidate_digits(candidates: &[Secret]) -> FxHashSet<[u8; DIGIT_COUNT]> {
    candidates.iter().map(|secret| *secret.digits()).collect()
}

/// Whether a guess is itself one of the remaining candidates
pub(crate) fn is_candidate(guess: &Guess, candidates: &FxHashSet<[u8; DIGIT_COUNT]>) -> bool {
    candidates.contains(guess.digits())
}
