//! Minimax-based guess selection strategy
//!
//! Always selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::{Guess, Secret};
use crate::solver::{candidate_digits, is_candidate};
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Returns the guess with the lowest maximum remaining candidates and that value,
/// or `None` if the guess pool is empty. Ties go to a guess that could be the
/// answer, then to the earliest guess in the pool.
///
/// # Examples
/// ```
/// use number_baseball::core::{Guess, Secret};
/// use number_baseball::solver::minimax::select_best_guess;
///
/// let guesses = vec![Guess::parse("789").unwrap(), Guess::parse("123").unwrap()];
/// let candidates = vec![
///     Secret::from_digits([1, 2, 3]).unwrap(),
///     Secret::from_digits([4, 5, 6]).unwrap(),
/// ];
///
/// let (best, max_remaining) = select_best_guess(&guesses, &candidates).unwrap();
/// assert_eq!(best.to_string(), "123");
/// assert_eq!(max_remaining, 1);
/// ```
#[must_use]
pub fn select_best_guess(guess_pool: &[Guess], candidates: &[Secret]) -> Option<(Guess, usize)> {
    let answers = candidate_digits(candidates);

    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| {
            let max_remaining = calculate_max_remaining(guess, candidates);
            (index, *guess, max_remaining, !is_candidate(guess, &answers))
        })
        .min_by_key(|&(index, _, max_remaining, not_candidate)| {
            (max_remaining, not_candidate, index)
        })
        .map(|(_, guess, max_remaining, _)| (guess, max_remaining))
}
