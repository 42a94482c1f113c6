//! Opening guess analysis command
//!
//! Analyzes how well a guess splits the full secret space.

use crate::core::{Guess, Score, Secret};
use crate::solver::entropy::{calculate_metrics, group_by_score};
use anyhow::{Context, Result};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Guess,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
    /// How many secrets produce each score, most common first
    pub distribution: Vec<(Score, usize)>,
}

/// Analyze a guess against every possible secret
///
/// # Errors
///
/// Returns an error if the guess is not three distinct digits.
pub fn analyze_guess(input: &str) -> Result<AnalysisResult> {
    let guess = Guess::parse(input).with_context(|| format!("invalid guess '{input}'"))?;
    Ok(analyze_against(guess, &Secret::all()))
}

/// Analyze a guess against an arbitrary candidate set
#[must_use]
pub fn analyze_against(guess: Guess, candidates: &[Secret]) -> AnalysisResult {
    let metrics = calculate_metrics(&guess, candidates);

    let mut distribution: Vec<(Score, usize)> =
        group_by_score(&guess, candidates).into_iter().collect();
    distribution.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then(a.0.strikes().cmp(&b.0.strikes()))
            .then(a.0.balls().cmp(&b.0.balls()))
    });

    AnalysisResult {
        guess,
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        total_candidates: candidates.len(),
        distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_valid_guess() {
        let result = analyze_guess("012").unwrap();

        assert_eq!(result.guess.to_string(), "012");
        assert_eq!(result.total_candidates, 720);
        assert_eq!(result.max_partition, 252);
        assert!(result.entropy > 2.0 && result.entropy < 2.5);
        assert!(result.expected_reduction >= 1.0);
    }

    #[test]
    fn distribution_is_sorted_and_complete() {
        let result = analyze_guess("345").unwrap();

        assert_eq!(result.distribution.len(), 9);
        assert_eq!(result.distribution[0], (Score::new(0, 1).unwrap(), 252));
        assert_eq!(result.distribution[1], (Score::OUT, 210));

        let total: usize = result.distribution.iter().map(|(_, n)| n).sum();
        assert_eq!(total, 720);
        assert!(result.distribution.contains(&(Score::PERFECT, 1)));
    }

    #[test]
    fn analyze_invalid_guess() {
        assert!(analyze_guess("122").is_err());
        assert!(analyze_guess("12a").is_err());
    }

    #[test]
    fn entropy_properties() {
        let candidates: Vec<Secret> = ["123", "132", "456"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let result = analyze_against(Guess::parse("123").unwrap(), &candidates);

        assert!(result.entropy >= 0.0);
        assert!(result.entropy <= 3.0_f64.log2() + 1e-9);
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= 3.0);
    }
}
