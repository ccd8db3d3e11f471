//! Self-play against a known target
//!
//! Runs the same solve loop used interactively, but feedback comes from
//! the encoder instead of a human.

use crate::core::{Feedback, Word};
use crate::solver::entropy::score_guess;
use crate::solver::{Engine, FeedbackSource, OracleFeedback, SolveError};

/// Round cap for self-play, far above anything a real solve needs
pub const MAX_ROUNDS: usize = 16;

/// A single round in a solve report
#[derive(Debug)]
pub struct SolveStep {
    pub guess: String,
    pub score: f64,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of solving a known target
#[derive(Debug)]
pub struct SolveReport {
    pub target: String,
    pub steps: Vec<SolveStep>,
    pub solved: bool,
}

/// Solve a target word by self-play
///
/// # Errors
///
/// Returns `SolveError` if the word lists cannot support a solve or if
/// the target is inconsistent with the solution list.
pub fn solve_target(
    vocabulary: &[Word],
    solutions: &[Word],
    target: &Word,
) -> Result<SolveReport, SolveError> {
    let mut engine = Engine::new(vocabulary, solutions);
    let mut oracle = OracleFeedback::new(target.clone());
    let mut steps = Vec::new();

    while engine.solution().is_none() && steps.len() < MAX_ROUNDS {
        let candidates_before = engine.candidates().len();
        let guess = engine.next_guess()?;
        let score = score_guess(&guess, engine.candidates());
        let feedback = oracle.next_feedback(&guess)?;
        let candidates_after = engine.apply_feedback(&guess, &feedback)?;

        steps.push(SolveStep {
            guess: guess.text().to_string(),
            score,
            feedback,
            candidates_before,
            candidates_after,
        });
    }

    Ok(SolveReport {
        target: target.text().to_string(),
        solved: engine.solution().is_some(),
        steps,
    })
}

/// Solve a target given as a command line string
///
/// # Errors
///
/// Returns an error if the target is not a valid five-letter word, is not
/// in the solution list, or the solve itself fails.
pub fn solve_word(
    word: &str,
    vocabulary: &[Word],
    solutions: &[Word],
) -> Result<SolveReport, String> {
    let target = Word::new(word).map_err(|e| format!("Invalid target word: {e}"))?;

    if !solutions.contains(&target) {
        return Err(format!("Word '{word}' is not in the solution list"));
    }

    solve_target(vocabulary, solutions, &target).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::SOLUTIONS;
    use crate::wordlists::loader::words_from_slice;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn solve_finds_the_target() {
        let vocabulary = words(&["crane", "crate", "grade", "soare"]);
        let solutions = words(&["crane", "crate", "grade"]);
        let target = Word::new("grade").unwrap();

        let report = solve_target(&vocabulary, &solutions, &target).unwrap();

        assert!(report.solved);
        assert_eq!(report.target, "grade");
        // opener, then one splitting guess
        assert_eq!(report.steps.len(), 2);
        assert_eq!(report.steps[0].guess, "soare");
        assert_eq!(report.steps[1].guess, "crane");

        // soare cannot separate these candidates, crane splits all three
        assert!(report.steps[0].score.abs() < 1e-12);
        assert!((report.steps[1].score - 3.0_f64.ln()).abs() < 1e-9);
    }

    #[test]
    fn solve_steps_narrow_monotonically() {
        let vocabulary = words(&["crane", "crate", "grade", "pious", "slate", "soare"]);
        let solutions = words(&["crane", "crate", "grade", "pious", "slate"]);
        let target = Word::new("crate").unwrap();

        let report = solve_target(&vocabulary, &solutions, &target).unwrap();

        assert!(report.solved);
        for step in &report.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_guessing_the_target_reports_solved_feedback() {
        let vocabulary = words(&["crane", "soare"]);
        let solutions = words(&["crane", "soare"]);
        let target = Word::new("soare").unwrap();

        let report = solve_target(&vocabulary, &solutions, &target).unwrap();

        assert!(report.solved);
        assert_eq!(report.steps.len(), 1);
        assert!(report.steps[0].feedback.is_solved());
    }

    #[test]
    fn solve_lone_candidate_takes_no_rounds() {
        let vocabulary = words(&["crane", "soare"]);
        let solutions = words(&["crane"]);
        let target = Word::new("crane").unwrap();

        let report = solve_target(&vocabulary, &solutions, &target).unwrap();

        assert!(report.solved);
        assert!(report.steps.is_empty());
    }

    #[test]
    fn solve_repeats_the_same_guess_sequence() {
        let pool = words_from_slice(&SOLUTIONS[..60]);

        for target in pool.iter().take(8) {
            let first = solve_target(&pool, &pool, target).unwrap();
            let second = solve_target(&pool, &pool, target).unwrap();

            let first_guesses: Vec<&str> =
                first.steps.iter().map(|step| step.guess.as_str()).collect();
            let second_guesses: Vec<&str> =
                second.steps.iter().map(|step| step.guess.as_str()).collect();

            assert!(first.solved && second.solved);
            assert_eq!(first_guesses, second_guesses, "target {}", target.text());
        }
    }

    #[test]
    fn solve_word_rejects_invalid_input() {
        let vocabulary = words(&["crane", "soare"]);
        let solutions = words(&["crane"]);

        assert!(solve_word("xyz", &vocabulary, &solutions).is_err());
        assert!(solve_word("cr4ne", &vocabulary, &solutions).is_err());
    }

    #[test]
    fn solve_word_rejects_unknown_target() {
        let vocabulary = words(&["crane", "crate", "soare"]);
        let solutions = words(&["crane", "crate"]);

        let err = solve_word("grade", &vocabulary, &solutions).unwrap_err();
        assert!(err.contains("not in the solution list"));
    }
}
