//! Minimax-based guess selection
//!
//! Implements worst-case minimization for number baseball solving.

mod calculator;
mod selector;

pub use calculator::calculate_max_remaining;
pub use selector::select_best_guess;
