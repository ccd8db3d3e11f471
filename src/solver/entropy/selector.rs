//! Entropy-maximizing guess selection
//!
//! Every vocabulary word is scored against the remaining solutions and the
//! first word with the strictly highest score wins. The vocabulary is kept
//! sorted at load time, so ties always resolve to the lexicographically
//! smallest word and repeated runs produce identical guess sequences.

use super::calculator::score_guess;
use crate::core::Word;

/// Score every vocabulary word against the remaining solutions
///
/// Returns (word, score) pairs in vocabulary order.
#[must_use]
pub fn rank_guesses<'a>(vocabulary: &'a [Word], solutions: &[Word]) -> Vec<(&'a Word, f64)> {
    vocabulary
        .iter()
        .map(|guess| (guess, score_guess(guess, solutions)))
        .collect()
}

/// Select the guess with the maximum expected information gain
///
/// Returns the winning word and its score, or `None` if the vocabulary is
/// empty. Among equal scores the earliest vocabulary entry wins.
///
/// # Examples
/// ```
/// use wordle_oracle::core::Word;
/// use wordle_oracle::solver::entropy::select_guess;
///
/// let vocabulary = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("aeros").unwrap(),
/// ];
/// let solutions = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let (best, score) = select_guess(&vocabulary, &solutions).unwrap();
/// assert_eq!(best.text(), "aeros");
/// assert!(score > 0.0);
/// ```
#[must_use]
pub fn select_guess<'a>(vocabulary: &'a [Word], solutions: &[Word]) -> Option<(&'a Word, f64)> {
    let mut best: Option<(&Word, f64)> = None;

    for guess in vocabulary {
        let score = score_guess(guess, solutions);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((guess, score)),
        }
    }

    best
}
