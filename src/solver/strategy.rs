//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::{Guess, Secret};

/// A strategy for selecting the best guess from a pool of candidates
pub trait Strategy {
    /// Select the best guess from the guess pool given the current candidates
    ///
    /// Returns the best guess, or `None` if the guess pool is empty.
    fn select_guess(&self, guess_pool: &[Guess], candidates: &[Secret]) -> Option<Guess>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Entropy while many candidates remain, minimax near the end (default)
    Hybrid(HybridStrategy),
    /// Pure entropy maximization
    Entropy(EntropyStrategy),
    /// Pure minimax optimization
    Minimax(MinimaxStrategy),
    /// Random selection from candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(&self, guess_pool: &[Guess], candidates: &[Secret]) -> Option<Guess> {
        match self {
            Self::Hybrid(s) => s.select_guess(guess_pool, candidates),
            Self::Entropy(s) => s.select_guess(guess_pool, candidates),
            Self::Minimax(s) => s.select_guess(guess_pool, candidates),
            Self::Random(s) => s.select_guess(guess_pool, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "hybrid", "entropy", "minimax", "random".
    /// Defaults to hybrid if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "entropy" | "pure-entropy" => Self::Entropy(EntropyStrategy),
            "minimax" => Self::Minimax(MinimaxStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Hybrid(HybridStrategy::default()),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hybrid(_) => "hybrid",
            Self::Entropy(_) => "entropy",
            Self::Minimax(_) => "minimax",
            Self::Random(_) => "random",
        }
    }
}

/// Pure entropy maximization strategy
///
/// Always selects the guess with the highest Shannon entropy.
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_guess(&self, guess_pool: &[Guess], candidates: &[Secret]) -> Option<Guess> {
        super::entropy::select_best_guess(guess_pool, candidates).map(|(best, _)| best)
    }
}

/// Pure minimax strategy
///
/// Always selects the guess that minimizes worst-case remaining candidates.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess(&self, guess_pool: &[Guess], candidates: &[Secret]) -> Option<Guess> {
        super::minimax::select_best_guess(guess_pool, candidates).map(|(best, _)| best)
    }
}

/// Hybrid strategy combining entropy and minimax
///
/// Uses entropy when many candidates remain, switches to minimax near the end.
pub struct HybridStrategy {
    /// Switch to minimax when candidates <= this threshold
    pub minimax_threshold: usize,
}

impl HybridStrategy {
    /// Create a new hybrid strategy
    ///
    /// # Parameters
    /// - `minimax_threshold`: Switch to minimax when candidates <= this value (default: 10)
    #[must_use]
    pub const fn new(minimax_threshold: usize) -> Self {
        Self { minimax_threshold }
    }
}

impl Default for HybridStrategy {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Strategy for HybridStrategy {
    fn select_guess(&self, guess_pool: &[Guess], candidates: &[Secret]) -> Option<Guess> {
        if candidates.len() <= self.minimax_threshold {
            MinimaxStrategy.select_guess(guess_pool, candidates)
        } else {
            EntropyStrategy.select_guess(guess_pool, candidates)
        }
    }
}

/// Random strategy
///
/// Plays a uniformly random remaining candidate.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess(&self, guess_pool: &[Guess], candidates: &[Secret]) -> Option<Guess> {
        use rand::prelude::IndexedRandom;

        // Prefer candidates from the guess pool
        let valid_candidates: Vec<Guess> = candidates
            .iter()
            .map(|&secret| Guess::from(secret))
            .filter(|guess| guess_pool.contains(guess))
            .collect();

        valid_candidates
            .choose(&mut rand::rng())
            .copied()
            .or_else(|| guess_pool.first().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_data() -> (Vec<Guess>, Vec<Secret>) {
        let guesses = Guess::all();
        let candidates = ["123", "132", "213", "456"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        (guesses, candidates)
    }

    #[test]
    fn entropy_strategy_selects_guess() {
        let (guesses, candidates) = setup_test_data();
        assert!(EntropyStrategy.select_guess(&guesses, &candidates).is_some());
    }

    #[test]
    fn minimax_strategy_selects_guess() {
        let (guesses, candidates) = setup_test_data();
        let guess = MinimaxStrategy.select_guess(&guesses, &candidates).unwrap();

        // Four candidates can always be split completely by some guess
        let max = crate::solver::minimax::calculate_max_remaining(&guess, &candidates);
        assert_eq!(max, 1);
    }

    #[test]
    fn hybrid_switches_on_threshold() {
        let (guesses, candidates) = setup_test_data();

        let low = HybridStrategy::new(10).select_guess(&guesses, &candidates);
        let minimax = MinimaxStrategy.select_guess(&guesses, &candidates);
        assert_eq!(low, minimax);

        let high = HybridStrategy::new(0).select_guess(&guesses, &candidates);
        let entropy = EntropyStrategy.select_guess(&guesses, &candidates);
        assert_eq!(high, entropy);
    }

    #[test]
    fn random_strategy_picks_candidate() {
        let (guesses, candidates) = setup_test_data();

        for _ in 0..20 {
            let guess = RandomStrategy.select_guess(&guesses, &candidates).unwrap();
            assert!(candidates.iter().any(|c| guess.matches(c)));
        }
    }

    #[test]
    fn random_strategy_falls_back_to_pool() {
        let guesses = vec![Guess::parse("789").unwrap()];
        let candidates: Vec<Secret> = vec!["123".parse().unwrap()];

        let guess = RandomStrategy.select_guess(&guesses, &candidates);
        assert_eq!(guess, guesses.first().copied());
    }

    #[test]
    fn empty_pool_returns_none() {
        let (_, candidates) = setup_test_data();
        assert!(EntropyStrategy.select_guess(&[], &candidates).is_none());
        assert!(MinimaxStrategy.select_guess(&[], &candidates).is_none());
        assert!(RandomStrategy.select_guess(&[], &candidates).is_none());
    }

    #[test]
    fn strategy_from_name() {
        assert_eq!(StrategyType::from_name("entropy").name(), "entropy");
        assert_eq!(StrategyType::from_name("minimax").name(), "minimax");
        assert_eq!(StrategyType::from_name("random").name(), "random");
        assert_eq!(StrategyType::from_name("hybrid").name(), "hybrid");
        assert_eq!(StrategyType::from_name("bogus").name(), "hybrid");
    }
}
