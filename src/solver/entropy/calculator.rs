//! Shannon entropy calculation for score distributions
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{Guess, Score, Secret};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing score x.
///
/// # Examples
/// ```
/// use number_baseball::core::{Guess, Secret};
/// use number_baseball::solver::entropy::calculate_entropy;
///
/// let guess = Guess::parse("123").unwrap();
/// let candidates = vec![
///     Secret::from_digits([1, 2, 3]).unwrap(),
///     Secret::from_digits([4, 5, 6]).unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!((entropy - 1.0).abs() < 1e-9); // two distinct scores, one bit
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Guess, candidates: &[Secret]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let score_counts = group_by_score(guess, candidates);
    shannon_entropy(&score_counts)
}

/// Group candidates by the score they produce with the guess
pub(crate) fn group_by_score(guess: &Guess, candidates: &[Secret]) -> FxHashMap<Score, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let score = Score::calculate(guess, candidate);
        *counts.entry(score).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from a score distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one score with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n scores
#[must_use]
pub fn shannon_entropy<S>(score_counts: &std::collections::HashMap<Score, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = score_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    score_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics(guess: &Guess, candidates: &[Secret]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let groups = group_by_score(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining: f64 = groups
        .values()
        .map(|&size| {
            let p = size as f64 / total;
            p * size as f64
        })
        .sum();

    let max_partition = groups.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy: shannon_entropy(&groups),
        expected_remaining,
        max_partition,
    }
}
