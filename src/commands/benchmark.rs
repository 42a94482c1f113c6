//! Benchmark command
//!
//! Tests solver performance across many secrets.

use crate::core::{GameState, Guess, Score, Secret};
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Guesses allowed per game before the solver counts as failed
pub const MAX_TURNS: usize = 10;

/// How many of the hardest secrets to keep
const HARDEST_KEPT: usize = 5;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_secrets: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub failures: usize,
    pub distribution: HashMap<usize, usize>,
    /// Secrets that took the most guesses, hardest first
    pub hardest: Vec<(Secret, usize)>,
    pub duration: Duration,
    pub secrets_per_second: f64,
}

/// Pick the secrets to benchmark against
///
/// `None` means every secret. With a count, a random sample without repeats is
/// drawn, reproducible when a seed is given.
#[must_use]
pub fn select_secrets(count: Option<usize>, seed: Option<u64>) -> Vec<Secret> {
    let all = Secret::all();
    let Some(count) = count else {
        return all;
    };

    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    all.choose_multiple(&mut rng, count).copied().collect()
}

/// Run benchmark on a set of secrets
///
/// If `forced_first` is provided, it will be used as the first guess instead of
/// letting the solver choose.
pub fn run_benchmark<S: Strategy>(
    solver: &Solver<S>,
    secrets: &[Secret],
    forced_first: Option<Guess>,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut failures = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut per_secret: Vec<(Secret, usize)> = Vec::with_capacity(secrets.len());

    for &secret in secrets {
        let (guesses, solved) = play_out(solver, secret, forced_first);

        if !solved {
            failures += 1;
            warn!(%secret, guesses, "solver did not finish");
        }

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
        per_secret.push((secret, guesses));

        pb.set_message(format!("{secret} in {guesses}"));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_secrets = secrets.len();

    per_secret.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    per_secret.truncate(HARDEST_KEPT);

    let (average_guesses, secrets_per_second) = if total_secrets == 0 {
        (0.0, 0.0)
    } else {
        (
            total_guesses as f64 / total_secrets as f64,
            total_secrets as f64 / duration.as_secs_f64().max(f64::EPSILON),
        )
    };

    info!(
        total_secrets,
        average_guesses,
        failures,
        elapsed_ms = duration.as_millis(),
        "benchmark finished"
    );

    BenchmarkResult {
        total_secrets,
        total_guesses,
        average_guesses,
        min_guesses: if total_secrets == 0 { 0 } else { min_guesses },
        max_guesses,
        failures,
        distribution,
        hardest: per_secret,
        duration,
        secrets_per_second,
    }
}

/// Play one game to the end, returning guesses used and whether it was won
fn play_out<S: Strategy>(
    solver: &Solver<S>,
    secret: Secret,
    forced_first: Option<Guess>,
) -> (usize, bool) {
    let mut game = GameState::with_secret(secret);
    let mut history: Vec<(Guess, Score)> = Vec::new();

    while history.len() < MAX_TURNS {
        let next = match (history.is_empty(), forced_first) {
            (true, Some(forced)) => Some(forced),
            _ => solver.next_guess(&history),
        };
        let Some(guess) = next else {
            break;
        };

        let Ok(turn) = game.play(guess) else {
            break;
        };
        history.push((turn.guess, turn.score));

        if game.is_over() {
            return (history.len(), true);
        }
    }

    (history.len(), false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{EntropyStrategy, HybridStrategy};

    fn sample() -> Vec<Secret> {
        select_secrets(Some(12), Some(7))
    }

    #[test]
    fn benchmark_runs() {
        let solver = Solver::new(HybridStrategy::default());
        let result = run_benchmark(&solver, &sample(), None, false);

        assert_eq!(result.total_secrets, 12);
        assert_eq!(result.failures, 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= MAX_TURNS);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let solver = Solver::new(EntropyStrategy);
        let result = run_benchmark(&solver, &sample(), None, false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_secrets);
    }

    #[test]
    fn benchmark_with_forced_first_guess() {
        let solver = Solver::new(EntropyStrategy);
        let secret = Secret::from_digits([9, 8, 7]).unwrap();
        let forced = Guess::from(secret);

        let result = run_benchmark(&solver, &[secret], Some(forced), false);

        assert_eq!(result.total_guesses, 1);
        assert_eq!(result.distribution.get(&1), Some(&1));
    }

    #[test]
    fn benchmark_empty_secret_list() {
        let solver = Solver::new(EntropyStrategy);
        let result = run_benchmark(&solver, &[], None, false);

        assert_eq!(result.total_secrets, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
        assert!(result.hardest.is_empty());
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let solver = Solver::new(HybridStrategy::default());
        let result = run_benchmark(&solver, &sample(), None, false);

        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);

        assert!(result.hardest.len() <= HARDEST_KEPT);
        assert_eq!(result.hardest[0].1, result.max_guesses);
    }

    #[test]
    fn select_secrets_is_reproducible() {
        let a = select_secrets(Some(20), Some(42));
        let b = select_secrets(Some(20), Some(42));
        assert_eq!(a, b);
        assert_eq!(a.len(), 20);

        let mut unique = a.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 20);
    }

    #[test]
    fn select_secrets_defaults_to_everything() {
        assert_eq!(select_secrets(None, None).len(), 720);
        assert_eq!(select_secrets(Some(5000), Some(1)).len(), 720);
    }
}
