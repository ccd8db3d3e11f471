//! Candidate filtering from feedback
//!
//! After each round the remaining solutions are narrowed to the words that
//! could still have produced the observed feedback. The rules mirror the
//! pattern encoder:
//! - correct: the candidate must have the guessed letter at that position
//! - present: the candidate must contain the letter, but not at that position
//! - absent: the candidate must not contain the letter anywhere, unless the
//!   guess itself repeats that letter, in which case the absent marker is
//!   position-local and carries no global exclusion

use crate::core::{Feedback, Mark, WORD_LENGTH, Word};

/// Check whether a candidate could still be the solution given one round
/// of feedback.
///
/// # Examples
/// ```
/// use wordle_oracle::core::{Feedback, Word};
/// use wordle_oracle::solver::is_consistent;
///
/// let guess = Word::new("soare").unwrap();
/// let feedback = Feedback::parse("xxgyg").unwrap();
///
/// assert!(is_consistent(&Word::new("crane").unwrap(), &guess, &feedback));
/// assert!(!is_consistent(&Word::new("soare").unwrap(), &guess, &feedback));
/// ```
#[must_use]
pub fn is_consistent(candidate: &Word, guess: &Word, feedback: &Feedback) -> bool {
    for position in 0..WORD_LENGTH {
        let letter = guess.char_at(position);
        let holds = match feedback.mark_at(position) {
            Mark::Correct => candidate.char_at(position) == letter,
            Mark::Present => {
                candidate.has_letter(letter) && candidate.char_at(position) != letter
            }
            Mark::Absent => {
                !candidate.has_letter(letter) || guess.count_letter(letter) > 1
            }
        };
        if !holds {
            return false;
        }
    }
    true
}

/// Narrow a candidate list to the words consistent with one round of feedback.
///
/// The result is always a subset of the input, so the candidate set can
/// only shrink from round to round.
#[must_use]
pub fn filter_candidates(candidates: &[Word], guess: &Word, feedback: &Feedback) -> Vec<Word> {
    candidates
        .iter()
        .filter(|candidate| is_consistent(candidate, guess, feedback))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| word(t)).collect()
    }

    fn feedback(line: &str) -> Feedback {
        Feedback::parse(line).unwrap()
    }

    #[test]
    fn filter_correct_requires_exact_position() {
        let guess = word("crane");
        let marks = feedback("gxxxx");

        // starts with c, contains none of r, a, n, e
        assert!(is_consistent(&word("chops"), &guess, &marks));
        // same letters except the leading c
        assert!(!is_consistent(&word("ghost"), &guess, &marks));
    }

    #[test]
    fn filter_present_requires_letter_elsewhere() {
        let guess = word("crane");
        let marks = feedback("yxxxx");

        // c present at position 4, none of r, a, n, e
        assert!(is_consistent(&word("music"), &guess, &marks));
        // no c at all
        assert!(!is_consistent(&word("moist"), &guess, &marks));
        // c exactly at position 0
        assert!(!is_consistent(&word("chops"), &guess, &marks));
    }

    #[test]
    fn filter_absent_excludes_letter_globally() {
        let guess = word("crane");
        let marks = feedback("xxxxx");

        // no c, r, a, n, or e anywhere
        assert!(is_consistent(&word("silty"), &guess, &marks));
        // contains c at a different position
        assert!(!is_consistent(&word("picky"), &guess, &marks));
        // contains a and e
        assert!(!is_consistent(&word("plate"), &guess, &marks));
    }

    #[test]
    fn filter_absent_skipped_for_repeated_guess_letters() {
        // "geese" has three e's; an x on any of them must not exclude
        // candidates that contain e
        let guess = word("geese");
        let marks = feedback("xxxxx");

        assert!(is_consistent(&word("ladle"), &guess, &marks));
        // but the unique letters g and s still exclude globally
        assert!(!is_consistent(&word("gravy"), &guess, &marks));
        assert!(!is_consistent(&word("moist"), &guess, &marks));
    }

    #[test]
    fn filter_scenario_keeps_all_consistent_candidates() {
        let candidates = words(&["crane", "crate", "grade"]);
        let guess = word("soare");

        // the real feedback for every candidate here is xxgyg
        for candidate in &candidates {
            let pattern = Pattern::encode(&guess, candidate);
            assert_eq!(Feedback::from(pattern).to_string(), "xxgyg");
        }

        let remaining = filter_candidates(&candidates, &guess, &feedback("xxgyg"));
        assert_eq!(remaining, candidates);
    }

    #[test]
    fn filter_contradictory_feedback_empties_the_set() {
        // all three candidates contain a, r, and e, each unique in "soare",
        // so an all-absent line excludes everything
        let candidates = words(&["crane", "crate", "grade"]);
        let remaining = filter_candidates(&candidates, &word("soare"), &feedback("xxxxx"));

        assert!(remaining.is_empty());
    }

    #[test]
    fn filter_agrees_with_encoder() {
        // the real feedback for a word, fed back through the filter, never
        // excludes that word
        let pool = words(&["crane", "crate", "grade", "soare", "geese", "ladle"]);

        for guess in &pool {
            for solution in &pool {
                let line = Feedback::from(Pattern::encode(guess, solution));
                assert!(
                    is_consistent(solution, guess, &line),
                    "{solution} excluded by its own feedback {line} for guess {guess}"
                );
            }
        }
    }

    #[test]
    fn filter_result_is_subset_of_input() {
        let candidates = words(&["crane", "crate", "grade", "slate", "pious"]);
        let remaining = filter_candidates(&candidates, &word("soare"), &feedback("xxgyg"));

        assert_eq!(remaining, words(&["crane", "crate", "grade"]));
        assert!(remaining.iter().all(|w| candidates.contains(w)));
    }
}
