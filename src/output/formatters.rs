//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};

/// Format a feedback line as colored squares
#[must_use]
pub fn feedback_glyphs(feedback: &Feedback) -> String {
    feedback
        .marks()
        .iter()
        .map(|mark| match mark {
            Mark::Correct => '🟩',
            Mark::Present => '🟨',
            Mark::Absent => '⬜',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format an entropy score as a bar
#[must_use]
pub fn entropy_bar(score: f64, width: usize) -> String {
    let max_score = 7.0; // roughly ln(1100), above any realistic score
    create_progress_bar(score, max_score, width)
}
