//! Terminal output formatting
//!
//! Display utilities for CLI results, emoji scores and localized text.

pub mod display;
pub mod formatters;
pub mod locale;

pub use display::{print_analysis_result, print_benchmark_result, print_solve_result};
pub use locale::{Language, MessageKey};
