//! Pure entropy-based guess selection
//!
//! Selects guesses that maximize Shannon entropy (expected information gain).

use super::calculator::calculate_entropy;
use crate::core::{Guess, Secret};
use crate::solver::{candidate_digits, is_candidate};
use rayon::prelude::*;

/// Select best guess by maximizing entropy
///
/// Ties go to a guess that could itself be the answer, then to the earliest
/// guess in the pool. Returns `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use number_baseball::core::{Guess, Secret};
/// use number_baseball::solver::entropy::select_best_guess;
///
/// let guesses = vec![Guess::parse("789").unwrap(), Guess::parse("124").unwrap()];
/// let candidates = vec![
///     Secret::from_digits([1, 2, 3]).unwrap(),
///     Secret::from_digits([1, 2, 4]).unwrap(),
///     Secret::from_digits([5, 2, 4]).unwrap(),
/// ];
///
/// let (best, entropy) = select_best_guess(&guesses, &candidates).unwrap();
/// assert_eq!(best.to_string(), "124"); // 789 cannot tell them apart
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess(guess_pool: &[Guess], candidates: &[Secret]) -> Option<(Guess, f64)> {
    let answers = candidate_digits(candidates);

    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| {
            let entropy = calculate_entropy(guess, candidates);
            (index, *guess, entropy, is_candidate(guess, &answers))
        })
        .max_by(|a, b| {
            a.2.total_cmp(&b.2)
                .then(a.3.cmp(&b.3))
                .then_with(|| b.0.cmp(&a.0))
        })
        .map(|(_, guess, entropy, _)| (guess, entropy))
}
