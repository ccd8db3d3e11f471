//! Display functions for command results

use std::collections::HashMap;
use std::ops::RangeInclusive;

use super::formatters::{entropy_bar, feedback_glyphs};
use crate::commands::{AnalysisReport, BenchReport, SolveReport};
use crate::core::{Feedback, Word};
use colored::Colorize;

/// Remaining candidates are listed in full only at or below this count
pub const DISPLAY_LIMIT: usize = 50;

/// Print the interactive mode banner
pub fn print_play_banner(solution_count: usize, vocabulary_count: usize) {
    println!("\n╔══════════════════════════════════════════════════════════╗");
    println!("║              Wordle Oracle - Interactive Mode            ║");
    println!("╚══════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest the guess with the highest expected information.");
    println!("After playing it, enter the puzzle's feedback as five letters:\n");
    println!("  x = gray (letter not in the word)");
    println!("  y = yellow (letter in the word, wrong spot)");
    println!("  g = green (letter in the right spot)\n");
    println!("Tracking {solution_count} possible solutions, guessing from {vocabulary_count} words.\n");
}

/// Print the header and suggested guess for one round
pub fn print_round(round: usize, guess: &Word, remaining: usize) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Round {round}: {remaining} candidate{} remaining",
        if remaining == 1 { "" } else { "s" }
    );
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Suggested guess: {}\n",
        guess.text().to_uppercase().bright_yellow().bold()
    );
}

/// List the remaining candidates when there are few enough to read
pub fn print_candidates(candidates: &[Word]) {
    if candidates.len() > DISPLAY_LIMIT {
        return;
    }

    println!("Remaining candidates:");
    for candidate in candidates {
        println!("  • {}", candidate.text());
    }
    println!();
}

/// Echo a guess with the feedback it received
pub fn print_feedback(guess: &Word, feedback: &Feedback) {
    println!(
        "  {} {}\n",
        guess.text().to_uppercase().bright_white().bold(),
        feedback_glyphs(feedback)
    );
}

/// Announce the solved word
pub fn print_solution(word: &Word, rounds: usize) {
    println!(
        "\n{}",
        format!("✅ Solution: {}", word.text().to_uppercase())
            .green()
            .bold()
    );
    println!(
        "   Found after {rounds} round{} of feedback\n",
        if rounds == 1 { "" } else { "s" }
    );
}

/// Print the result of solving a known target
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        report.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in report.steps.iter().enumerate() {
        println!(
            "\nRound {}: {} {}",
            i + 1,
            step.guess.to_uppercase(),
            feedback_glyphs(&step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}  (expected gain {:.3} nats)",
                step.candidates_before, step.candidates_after, step.score
            );
        }
    }

    println!();
    if report.solved {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", report.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved within {} guesses", report.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis(report: &AnalysisReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        report.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(report.score, 30);

    println!("\n📊 Against {} possible solutions:", report.total_candidates);
    println!(
        "   Score:      [{}] {} ({:.3} bits)",
        bar.green(),
        format!("{:.3} nats", report.score).bright_yellow(),
        report.score / std::f64::consts::LN_2
    );
    println!(
        "   Expected:   {:.1} candidates remain after this guess",
        report.expected_remaining
    );
    println!("   Rank:       #{} in the vocabulary", report.rank);

    println!("\n🏆 Top guesses by score:");
    for (word, score) in &report.top {
        println!("   {}  {score:.3}", word.to_uppercase());
    }
}

/// Print the result of a benchmark run
pub fn print_bench_report(report: &BenchReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", report.total_words);
    println!(
        "   Solved:           {} ({:.1}%)",
        report.solved,
        percentage(report.solved, report.total_words)
    );
    if report.failed > 0 {
        println!("   Failed:           {}", report.failed);
    }
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", report.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", report.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", report.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", report.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for rounds in distribution_range(&report.distribution, report.max_rounds) {
        let count = report.distribution.get(&rounds).copied().unwrap_or(0);
        let pct = percentage(count, report.total_words);
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {rounds}: {bar} {count:4} ({pct:5.1}%)");
    }
}

/// Percentage of `total`, zero when the run tested no words
fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

/// Histogram buckets to print; the zero-round bucket shows only when occupied
fn distribution_range(
    distribution: &HashMap<usize, usize>,
    max_rounds: usize,
) -> RangeInclusive<usize> {
    let start = if distribution.contains_key(&0) { 0 } else { 1 };
    start..=max_rounds.max(6)
}
