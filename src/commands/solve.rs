//! Secret solving command
//!
//! Lets the solver play a full game against a known secret and records every step.

use crate::core::{GameState, Guess, Score, Secret};
use crate::solver::entropy::calculate_entropy;
use crate::solver::{Solver, Strategy};
use anyhow::{Context, Result, anyhow};

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_guesses: 10,
        }
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: Secret,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Guess,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve a specific secret using the given solver
///
/// Every guess goes through a real `GameState`, so the game's own rules
/// decide when it is won.
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not three distinct digits
/// - The solver runs out of candidates (only possible with a restricted pool)
pub fn solve_secret<S: Strategy>(config: SolveConfig, solver: &Solver<S>) -> Result<SolveResult> {
    let secret: Secret = config
        .secret
        .parse()
        .with_context(|| format!("invalid secret '{}'", config.secret))?;

    let mut game = GameState::with_secret(secret);
    let mut history: Vec<(Guess, Score)> = Vec::new();
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = solver.count_candidates(&history);

        let guess = solver
            .next_guess(&history)
            .ok_or_else(|| anyhow!("no candidates remaining"))?;

        let (entropy, expected_remaining) = if candidates_before > 1 {
            let current = solver.get_candidates(&history);
            let ent = calculate_entropy(&guess, &current);
            let expected = candidates_before as f64 / ent.exp2();
            (Some(ent), Some(expected))
        } else {
            (None, None)
        };

        let turn = game.play(guess)?;
        history.push((turn.guess, turn.score));

        guesses.push(GuessStep {
            guess: turn.guess,
            score: turn.score,
            candidates_before,
            candidates_after: solver.count_candidates(&history),
            entropy,
            expected_remaining,
        });

        if game.is_over() {
            return Ok(SolveResult {
                success: true,
                guesses,
                secret,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        secret,
    })
}
