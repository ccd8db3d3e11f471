//! Solver evaluation over the solution list
//!
//! Replays the solve loop against every solution word (or a limited
//! subset) and aggregates round counts.

use crate::commands::solve::solve_target;
use crate::core::Word;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Aggregated results from a benchmark run
pub struct BenchReport {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Solve every target in the solution list and collect statistics
#[must_use]
pub fn run_bench(vocabulary: &[Word], solutions: &[Word], limit: Option<usize>) -> BenchReport {
    let targets: Vec<&Word> = solutions
        .iter()
        .take(limit.unwrap_or(solutions.len()))
        .collect();

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut solved = 0;
    let mut failed = 0;
    let mut total_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    let start = Instant::now();

    for (idx, &target) in targets.iter().enumerate() {
        let Ok(report) = solve_target(vocabulary, solutions, target) else {
            failed += 1;
            pb.inc(1);
            continue;
        };

        let rounds = report.steps.len();
        if report.solved {
            solved += 1;
            total_rounds += rounds;
            min_rounds = min_rounds.min(rounds);
            max_rounds = max_rounds.max(rounds);
            *distribution.entry(rounds).or_insert(0) += 1;
        } else {
            failed += 1;
        }

        if idx % 10 == 0 && solved > 0 {
            let avg = total_rounds as f64 / solved as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = targets.len();

    let average_rounds = if solved > 0 {
        total_rounds as f64 / solved as f64
    } else {
        0.0
    };
    let words_per_second = if duration.as_secs_f64() > 0.0 {
        total_words as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    BenchReport {
        total_words,
        solved,
        failed,
        total_rounds,
        average_rounds,
        min_rounds: if min_rounds == usize::MAX {
            0
        } else {
            min_rounds
        },
        max_rounds,
        distribution,
        duration,
        words_per_second,
    }
}
