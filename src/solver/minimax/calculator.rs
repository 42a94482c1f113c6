//! Minimax worst-case calculation for strike/ball scores
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible score.

use crate::core::{Guess, Secret};
use crate::solver::entropy::group_by_score;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Examples
/// ```
/// use number_baseball::core::{Guess, Secret};
/// use number_baseball::solver::minimax::calculate_max_remaining;
///
/// let guess = Guess::parse("012").unwrap();
/// let max_remaining = calculate_max_remaining(&guess, &Secret::all());
/// assert_eq!(max_remaining, 252); // one ball is the most common reply
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Guess, candidates: &[Secret]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    group_by_score(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}
