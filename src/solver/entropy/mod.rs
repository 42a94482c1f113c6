//! Entropy-based guess selection
//!
//! Implements Shannon entropy calculation for strike/ball score distributions.
//! This is the foundation of information-theoretic solving.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub(crate) use calculator::group_by_score;
pub use selector::select_best_guess;
