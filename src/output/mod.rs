//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    DISPLAY_LIMIT, print_analysis, print_bench_report, print_candidates, print_feedback,
    print_play_banner, print_round, print_solution, print_solve_report,
};
