//! Scoring breakdown for a single guess

use crate::core::Word;
use crate::solver::entropy::{expected_remaining, rank_guesses, score_guess};

/// How many of the best guesses to include in a report
const TOP_GUESSES: usize = 5;

/// Scoring details for one guess against the current candidate set
#[derive(Debug)]
pub struct AnalysisReport {
    pub word: String,
    pub score: f64,
    pub expected_remaining: f64,
    pub total_candidates: usize,
    pub rank: usize,
    pub top: Vec<(String, f64)>,
}

/// Analyze how well a word performs as the next guess
///
/// # Errors
///
/// Returns an error if the word is malformed or not in the vocabulary.
pub fn analyze_word(
    word: &str,
    vocabulary: &[Word],
    solutions: &[Word],
) -> Result<AnalysisReport, String> {
    let guess = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;

    if !vocabulary.contains(&guess) {
        return Err(format!("Word '{word}' is not in the vocabulary"));
    }

    let score = score_guess(&guess, solutions);
    let remaining = expected_remaining(&guess, solutions);

    let mut ranked = rank_guesses(vocabulary, solutions);
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    // Ties share a rank: only strictly better scores push a word down.
    let rank = 1 + ranked.iter().filter(|(_, s)| *s > score).count();
    let top = ranked
        .iter()
        .take(TOP_GUESSES)
        .map(|(w, s)| (w.text().to_string(), *s))
        .collect();

    Ok(AnalysisReport {
        word: guess.text().to_string(),
        score,
        expected_remaining: remaining,
        total_candidates: solutions.len(),
        rank,
        top,
    })
}
