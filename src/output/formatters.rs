//! Formatting utilities for terminal output

use crate::core::{DIGIT_COUNT, Score};

/// Format a score as an emoji string
///
/// One green dot per strike, one yellow dot per ball, white for the rest.
#[must_use]
pub fn score_to_emoji(score: Score) -> String {
    let strikes = usize::from(score.strikes());
    let balls = usize::from(score.balls());
    let misses = DIGIT_COUNT.saturating_sub(strikes + balls);

    let mut result = String::with_capacity(DIGIT_COUNT * 4);
    result.push_str(&"🟢".repeat(strikes));
    result.push_str(&"🟡".repeat(balls));
    result.push_str(&"⚪".repeat(misses));
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar
///
/// Scaled against log2(9), the most any guess can reach with nine possible scores.
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = 9.0_f64.log2();
    create_progress_bar(entropy, max_entropy, width)
}
