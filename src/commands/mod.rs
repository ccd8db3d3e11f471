//! Command implementations

pub mod analyze;
pub mod bench;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisReport, analyze_word};
pub use bench::{BenchReport, run_bench};
pub use play::run_play;
pub use solve::{MAX_ROUNDS, SolveReport, SolveStep, solve_target, solve_word};
