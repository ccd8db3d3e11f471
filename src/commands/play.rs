//! Interactive solving session
//!
//! Drives the solve loop against a live puzzle: suggest a guess, read the
//! puzzle's feedback, narrow the candidates, repeat until one word remains.

use crate::core::Word;
use crate::output::{print_candidates, print_feedback, print_round, print_solution};
use crate::solver::{Engine, FeedbackSource, SolveError};

/// Run the solve loop against a feedback source
///
/// The loop reports the suggested guess and the remaining candidates each
/// round, then blocks on the source for feedback. It ends cleanly when one
/// candidate remains or the source runs out of input; contradictory
/// feedback is an error.
///
/// # Errors
///
/// Returns an error if the word lists cannot support a solve, if feedback
/// eliminates every candidate, or if a non-interactive source produces a
/// malformed line.
pub fn run_play<F: FeedbackSource>(
    vocabulary: &[Word],
    solutions: &[Word],
    source: &mut F,
) -> Result<(), String> {
    let mut engine = Engine::new(vocabulary, solutions);

    loop {
        if let Some(solution) = engine.solution() {
            print_solution(solution, engine.rounds());
            return Ok(());
        }

        let guess = engine.next_guess().map_err(|e| e.to_string())?;
        print_round(engine.rounds() + 1, &guess, engine.candidates().len());
        print_candidates(engine.candidates());

        let feedback = match source.next_feedback(&guess) {
            Ok(feedback) => feedback,
            Err(SolveError::FeedbackRead(reason)) => {
                println!("\nNo more feedback ({reason}), stopping here.");
                return Ok(());
            }
            Err(err) => return Err(err.to_string()),
        };

        print_feedback(&guess, &feedback);
        engine.apply_feedback(&guess, &feedback).map_err(|e| e.to_string())?;
    }
}
