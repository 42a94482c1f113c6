//! Main solver interface

use super::strategy::Strategy;
use crate::core::{Guess, SECRET_SPACE, Score, Secret};
use tracing::trace;

/// Number baseball solver
///
/// Coordinates the solving process using a given strategy.
pub struct Solver<S: Strategy> {
    strategy: S,
    guess_pool: Vec<Guess>,
    secrets: Vec<Secret>,
}

impl<S: Strategy> Solver<S> {
    /// Solver over the full game: every legal guess, every possible secret
    pub fn new(strategy: S) -> Self {
        Self::with_pools(strategy, Guess::all(), Secret::all())
    }

    /// Solver over restricted guess and secret pools
    ///
    /// # Parameters
    /// - `strategy`: The guess selection strategy to use
    /// - `guess_pool`: Guesses the solver may play
    /// - `secrets`: Secrets that may be the answer
    pub const fn with_pools(strategy: S, guess_pool: Vec<Guess>, secrets: Vec<Secret>) -> Self {
        Self {
            strategy,
            guess_pool,
            secrets,
        }
    }

    /// Get the best first guess for a new game
    ///
    /// Over the full secret space every opening is equivalent up to relabeling
    /// digits and positions, so the first pooled guess is as good as any and
    /// skips a full strategy pass.
    pub fn first_guess(&self) -> Option<Guess> {
        if self.secrets.len() == SECRET_SPACE {
            return self.guess_pool.first().copied();
        }
        self.strategy.select_guess(&self.guess_pool, &self.secrets)
    }

    /// Get the next best guess given previous guesses and scores
    ///
    /// Returns `None` if no secret is consistent with the history.
    pub fn next_guess(&self, history: &[(Guess, Score)]) -> Option<Guess> {
        if history.is_empty() {
            return self.first_guess();
        }

        let candidates = self.filter_candidates(history);

        let guess = match candidates.as_slice() {
            [] => None,
            [only] => Some(Guess::from(*only)),
            _ => self.strategy.select_guess(&self.guess_pool, &candidates),
        };

        trace!(
            candidates = candidates.len(),
            guess = ?guess.map(|g| g.to_string()),
            "selected next guess"
        );
        guess
    }

    /// Secrets that would have produced every observed score
    fn filter_candidates(&self, history: &[(Guess, Score)]) -> Vec<Secret> {
        self.secrets
            .iter()
            .filter(|&candidate| {
                history
                    .iter()
                    .all(|(guess, observed)| Score::calculate(guess, candidate) == *observed)
            })
            .copied()
            .collect()
    }

    /// Count how many candidates remain given the history
    pub fn count_candidates(&self, history: &[(Guess, Score)]) -> usize {
        self.secrets
            .iter()
            .filter(|&candidate| {
                history
                    .iter()
                    .all(|(guess, observed)| Score::calculate(guess, candidate) == *observed)
            })
            .count()
    }

    /// Get the current candidates (public accessor)
    pub fn get_candidates(&self, history: &[(Guess, Score)]) -> Vec<Secret> {
        self.filter_candidates(history)
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::{EntropyStrategy, MinimaxStrategy};

    fn guess(s: &str) -> Guess {
        Guess::parse(s).unwrap()
    }

    fn secret(s: &str) -> Secret {
        s.parse().unwrap()
    }

    #[test]
    fn first_guess_on_full_space() {
        let solver = Solver::new(MinimaxStrategy);
        assert_eq!(solver.first_guess(), Some(guess("012")));
        assert_eq!(solver.next_guess(&[]), Some(guess("012")));
    }

    #[test]
    fn first_guess_on_restricted_space_uses_strategy() {
        let secrets = vec![secret("123"), secret("456"), secret("789")];
        let solver = Solver::with_pools(EntropyStrategy, Guess::all(), secrets.clone());

        let first = solver.first_guess().unwrap();
        assert!(Guess::all().contains(&first));
    }

    #[test]
    fn count_candidates_starts_full() {
        let solver = Solver::new(MinimaxStrategy);
        assert_eq!(solver.count_candidates(&[]), SECRET_SPACE);
    }

    #[test]
    fn filter_keeps_consistent_secrets() {
        let solver = Solver::new(MinimaxStrategy);
        let answer = secret("123");

        let g = guess("321");
        let history = vec![(g, Score::calculate(&g, &answer))];
        let candidates = solver.get_candidates(&history);

        assert!(candidates.contains(&answer));
        assert!(candidates.len() < SECRET_SPACE);
        for candidate in &candidates {
            assert_eq!(Score::calculate(&g, candidate), history[0].1);
        }
        assert_eq!(solver.count_candidates(&history), candidates.len());
    }

    #[test]
    fn perfect_score_leaves_one_candidate() {
        let solver = Solver::new(MinimaxStrategy);
        let history = vec![(guess("479"), Score::PERFECT)];

        assert_eq!(solver.get_candidates(&history), vec![secret("479")]);
        assert_eq!(solver.next_guess(&history), Some(guess("479")));
    }

    #[test]
    fn contradictory_history_has_no_guess() {
        let solver = Solver::new(MinimaxStrategy);
        let history = vec![
            (guess("123"), Score::PERFECT),
            (guess("456"), Score::PERFECT),
        ];

        assert_eq!(solver.count_candidates(&history), 0);
        assert_eq!(solver.next_guess(&history), None);
    }

    #[test]
    fn three_balls_leave_two_rotations() {
        // "123" with 0S 3B: only the two cyclic rotations remain
        let solver = Solver::new(EntropyStrategy);
        let history = vec![(guess("123"), Score::new(0, 3).unwrap())];

        let candidates = solver.get_candidates(&history);
        assert_eq!(candidates, vec![secret("231"), secret("312")]);
    }
}
