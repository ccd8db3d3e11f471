//! Solve loop state
//!
//! The engine owns the shrinking candidate set and hands out one guess per
//! round. Feedback acquisition lives behind [`FeedbackSource`] so the loop
//! can be driven by a terminal, a script, or a known target.
//!
//! [`FeedbackSource`]: super::FeedbackSource

use std::fmt;

use super::entropy::select_guess;
use super::filter::is_consistent;
use crate::core::{Feedback, FeedbackError, Word};

/// Fixed opening guess
///
/// Scoring the full vocabulary against the full solution set is identical
/// on every run, so the winner is precomputed once and hardcoded.
pub const OPENING_GUESS: &str = "soare";

/// Why a solve cannot continue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The solution set was empty before the first guess
    NoCandidates,
    /// No vocabulary word is available to guess
    EmptyVocabulary,
    /// Feedback eliminated every remaining candidate
    Contradiction { guess: String, feedback: String },
    /// The feedback source hit end of input or an I/O failure
    FeedbackRead(String),
    /// The feedback source produced an unparseable line
    FeedbackFormat(FeedbackError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates => write!(f, "no candidate solutions to work with"),
            Self::EmptyVocabulary => write!(f, "no vocabulary words available to guess"),
            Self::Contradiction { guess, feedback } => write!(
                f,
                "feedback '{feedback}' for guess '{guess}' eliminated every candidate; \
                 some earlier feedback must be wrong"
            ),
            Self::FeedbackRead(reason) => write!(f, "could not read feedback: {reason}"),
            Self::FeedbackFormat(err) => write!(f, "malformed feedback: {err}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FeedbackFormat(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FeedbackError> for SolveError {
    fn from(err: FeedbackError) -> Self {
        Self::FeedbackFormat(err)
    }
}

/// One game's worth of solving state
///
/// The vocabulary is borrowed and never changes; the candidate set starts
/// as a copy of the solution list and only ever shrinks.
pub struct Engine<'a> {
    vocabulary: &'a [Word],
    candidates: Vec<Word>,
    rounds: usize,
}

impl<'a> Engine<'a> {
    /// Start a game with the full solution set as candidates
    #[must_use]
    pub fn new(vocabulary: &'a [Word], solutions: &[Word]) -> Self {
        Self {
            vocabulary,
            candidates: solutions.to_vec(),
            rounds: 0,
        }
    }

    /// Words still consistent with every round of feedback so far
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Number of feedback rounds applied so far
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// The solved word, once exactly one candidate remains
    #[must_use]
    pub fn solution(&self) -> Option<&Word> {
        match self.candidates.as_slice() {
            [solution] => Some(solution),
            _ => None,
        }
    }

    /// Pick the guess for the current round
    ///
    /// The first round plays the fixed opener when the vocabulary contains
    /// it; later rounds score the whole vocabulary against the remaining
    /// candidates. A lone candidate is guessed directly.
    ///
    /// # Errors
    /// `NoCandidates` if the candidate set is already empty,
    /// `EmptyVocabulary` if there is nothing to guess from.
    pub fn next_guess(&self) -> Result<Word, SolveError> {
        if self.candidates.is_empty() {
            return Err(SolveError::NoCandidates);
        }
        if let [solution] = self.candidates.as_slice() {
            return Ok(solution.clone());
        }

        if self.rounds == 0
            && let Some(opener) = self.vocabulary.iter().find(|w| w.text() == OPENING_GUESS)
        {
            return Ok(opener.clone());
        }

        select_guess(self.vocabulary, &self.candidates)
            .map(|(word, _)| word.clone())
            .ok_or(SolveError::EmptyVocabulary)
    }

    /// Narrow the candidate set with one round of feedback
    ///
    /// Returns the number of candidates remaining.
    ///
    /// # Errors
    /// `Contradiction` if no candidate survives, which means some feedback
    /// line was inconsistent with the solution list.
    pub fn apply_feedback(
        &mut self,
        guess: &Word,
        feedback: &Feedback,
    ) -> Result<usize, SolveError> {
        self.candidates
            .retain(|candidate| is_consistent(candidate, guess, feedback));
        self.rounds += 1;

        if self.candidates.is_empty() {
            return Err(SolveError::Contradiction {
                guess: guess.text().to_string(),
                feedback: feedback.to_string(),
            });
        }

        Ok(self.candidates.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t).unwrap()).collect()
    }

    fn feedback(line: &str) -> Feedback {
        Feedback::parse(line).unwrap()
    }

    #[test]
    fn engine_starts_with_full_solution_set() {
        let vocabulary = words(&["crane", "crate", "grade", "soare"]);
        let solutions = words(&["crane", "crate", "grade"]);
        let engine = Engine::new(&vocabulary, &solutions);

        assert_eq!(engine.candidates(), solutions.as_slice());
        assert_eq!(engine.rounds(), 0);
        assert!(engine.solution().is_none());
    }

    #[test]
    fn engine_opens_with_fixed_guess() {
        let vocabulary = words(&["crane", "crate", "grade", "soare"]);
        let solutions = words(&["crane", "crate", "grade"]);
        let engine = Engine::new(&vocabulary, &solutions);

        let guess = engine.next_guess().unwrap();
        assert_eq!(guess.text(), "soare");
    }

    #[test]
    fn engine_opener_falls_back_to_selector() {
        // no "soare" in this vocabulary, so the first guess is scored like
        // any other round
        let vocabulary = words(&["aaaaa", "aeros"]);
        let solutions = words(&["slate", "irate"]);
        let engine = Engine::new(&vocabulary, &solutions);

        let guess = engine.next_guess().unwrap();
        assert_eq!(guess.text(), "aeros");
    }

    #[test]
    fn engine_guesses_lone_candidate_directly() {
        let vocabulary = words(&["crane", "soare"]);
        let solutions = words(&["crane"]);
        let engine = Engine::new(&vocabulary, &solutions);

        let guess = engine.next_guess().unwrap();
        assert_eq!(guess.text(), "crane");
        assert_eq!(engine.solution().map(Word::text), Some("crane"));
    }

    #[test]
    fn engine_errors_without_candidates() {
        let vocabulary = words(&["crane", "soare"]);
        let engine = Engine::new(&vocabulary, &[]);

        assert_eq!(engine.next_guess(), Err(SolveError::NoCandidates));
    }

    #[test]
    fn engine_errors_without_vocabulary() {
        let solutions = words(&["crane", "crate"]);
        let engine = Engine::new(&[], &solutions);

        assert_eq!(engine.next_guess(), Err(SolveError::EmptyVocabulary));
    }

    #[test]
    fn engine_feedback_narrows_candidates() {
        let vocabulary = words(&["crane", "crate", "grade", "pious", "slate", "soare"]);
        let solutions = words(&["crane", "crate", "grade", "pious", "slate"]);
        let mut engine = Engine::new(&vocabulary, &solutions);

        let guess = engine.next_guess().unwrap();
        assert_eq!(guess.text(), "soare");

        let remaining = engine.apply_feedback(&guess, &feedback("xxgyg")).unwrap();
        assert_eq!(remaining, 3);
        assert_eq!(engine.candidates(), words(&["crane", "crate", "grade"]).as_slice());
        assert_eq!(engine.rounds(), 1);
    }

    #[test]
    fn engine_second_round_uses_selector() {
        let vocabulary = words(&["crane", "crate", "grade", "soare"]);
        let solutions = words(&["crane", "crate", "grade"]);
        let mut engine = Engine::new(&vocabulary, &solutions);

        let opener = engine.next_guess().unwrap();
        engine.apply_feedback(&opener, &feedback("xxgyg")).unwrap();

        // crane and crate both split the three candidates apart; crane wins
        // the tie as the earlier vocabulary entry
        let guess = engine.next_guess().unwrap();
        assert_eq!(guess.text(), "crane");
    }

    #[test]
    fn engine_contradiction_reports_guess_and_feedback() {
        let vocabulary = words(&["crane", "crate", "grade", "soare"]);
        let solutions = words(&["crane", "crate", "grade"]);
        let mut engine = Engine::new(&vocabulary, &solutions);

        let guess = engine.next_guess().unwrap();
        let err = engine.apply_feedback(&guess, &feedback("xxxxx")).unwrap_err();

        assert_eq!(
            err,
            SolveError::Contradiction {
                guess: "soare".to_string(),
                feedback: "xxxxx".to_string(),
            }
        );
        assert!(engine.candidates().is_empty());
    }

    #[test]
    fn engine_solution_appears_at_one_candidate() {
        let vocabulary = words(&["crane", "crate", "grade", "soare"]);
        let solutions = words(&["crane", "grade"]);
        let mut engine = Engine::new(&vocabulary, &solutions);

        let opener = engine.next_guess().unwrap();
        // soare produces the same line against both remaining candidates
        let remaining = engine.apply_feedback(&opener, &feedback("xxgyg")).unwrap();
        assert_eq!(remaining, 2);
        assert!(engine.solution().is_none());

        let guess = engine.next_guess().unwrap();
        let line = Feedback::from(crate::core::Pattern::encode(&guess, &words(&["grade"])[0]));
        engine.apply_feedback(&guess, &line).unwrap();

        assert_eq!(engine.solution().map(Word::text), Some("grade"));
    }
}
