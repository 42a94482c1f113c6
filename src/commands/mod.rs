//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_against, analyze_guess};
pub use benchmark::{BenchmarkResult, run_benchmark, select_secrets};
pub use simple::{SessionSummary, run_simple};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_secret};
