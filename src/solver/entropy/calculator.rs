//! Entropy scoring for candidate guesses
//!
//! Given a guess and the remaining solutions, computes the expected
//! information gain of playing that guess.

use rustc_hash::FxHashMap;

use crate::core::{Pattern, Word};

/// Score a guess against the remaining solutions
///
/// Partitions the solutions by the feedback pattern each would produce,
/// then sums `p * ln(1/p)` over the partition, where `p` is the fraction
/// of solutions in a group. The result is the expected information gain
/// in natural-log units. Higher is better: a high score means the guess
/// splits the remaining solutions into many small groups.
///
/// # Examples
/// ```
/// use wordle_oracle::core::Word;
/// use wordle_oracle::solver::entropy::score_guess;
///
/// let guess = Word::new("crane").unwrap();
/// let solutions = vec![
///     Word::new("crane").unwrap(),
///     Word::new("crate").unwrap(),
///     Word::new("grade").unwrap(),
/// ];
///
/// // each solution produces a distinct pattern, so the score is ln 3
/// let score = score_guess(&guess, &solutions);
/// assert!((score - 3.0_f64.ln()).abs() < 1e-9);
/// ```
#[must_use]
pub fn score_guess(guess: &Word, solutions: &[Word]) -> f64 {
    if solutions.is_empty() {
        return 0.0;
    }

    let counts = pattern_histogram(guess, solutions);
    entropy_from_counts(&counts)
}

/// Expected number of solutions remaining after playing a guess
///
/// Each pattern group of size `c` survives with probability `c / n`, so
/// the expectation is the sum of `c * c / n` over the groups.
#[must_use]
pub fn expected_remaining(guess: &Word, solutions: &[Word]) -> f64 {
    if solutions.is_empty() {
        return 0.0;
    }

    let counts = pattern_histogram(guess, solutions);
    let total = solutions.len() as f64;

    counts
        .values()
        .map(|&count| count as f64 * count as f64 / total)
        .sum()
}

/// Group solutions by the pattern they would produce against the guess
fn pattern_histogram(guess: &Word, solutions: &[Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for solution in solutions {
        let pattern = Pattern::encode(guess, solution);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Entropy of a pattern histogram, in natural-log units
///
/// # Properties
/// - Returns 0.0 when every solution falls into a single pattern group
/// - Maximized, at ln(n), when all n solutions produce distinct patterns
///
/// # Examples
/// ```
/// use rustc_hash::FxHashMap;
/// use wordle_oracle::core::Pattern;
/// use wordle_oracle::solver::entropy::entropy_from_counts;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(Pattern::new(0), 25);
/// uniform.insert(Pattern::new(1), 25);
/// uniform.insert(Pattern::new(2), 25);
/// uniform.insert(Pattern::new(3), 25);
///
/// let entropy = entropy_from_counts(&uniform);
/// assert!((entropy - 4.0_f64.ln()).abs() < 1e-9);
/// ```
#[must_use]
pub fn entropy_from_counts<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.ln()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn score_distinct_patterns_reaches_ln_n() {
        let guess = Word::new("crane").unwrap();
        let solutions = words(&["crane", "crate", "grade"]);

        let score = score_guess(&guess, &solutions);
        assert!((score - 3.0_f64.ln()).abs() < 1e-9);
    }

    #[test]
    fn score_single_pattern_group_is_zero() {
        // soare produces the same feedback against all three
        let guess = Word::new("soare").unwrap();
        let solutions = words(&["crane", "crate", "grade"]);

        let score = score_guess(&guess, &solutions);
        assert!(score.abs() < 1e-12);
    }

    #[test]
    fn score_empty_solutions_is_zero() {
        let guess = Word::new("crane").unwrap();
        let score = score_guess(&guess, &[]);

        assert!((score - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn score_stays_within_bounds() {
        let solutions = words(&["slate", "irate", "trace", "raise", "pious"]);
        let upper = (solutions.len() as f64).ln();

        for guess in words(&["crane", "soare", "aaaaa", "pious"]) {
            let score = score_guess(&guess, &solutions);
            assert!(score >= 0.0);
            assert!(score <= upper + 1e-12);
        }
    }

    #[test]
    fn expected_remaining_distinct_patterns() {
        // every group has size one, so exactly one candidate survives
        let guess = Word::new("crane").unwrap();
        let solutions = words(&["crane", "crate", "grade"]);

        let expected = expected_remaining(&guess, &solutions);
        assert!((expected - 1.0).abs() < 1e-9);
    }

    #[test]
    fn expected_remaining_single_group() {
        // one group of three: the guess eliminates nothing
        let guess = Word::new("soare").unwrap();
        let solutions = words(&["crane", "crate", "grade"]);

        let expected = expected_remaining(&guess, &solutions);
        assert!((expected - 3.0).abs() < 1e-9);
    }

    #[test]
    fn histogram_groups_by_pattern() {
        let guess = Word::new("crane").unwrap();
        let solutions = words(&["crane", "crate", "grade"]);

        let counts = pattern_histogram(&guess, &solutions);

        assert_eq!(counts.len(), 3);
        assert_eq!(counts[&Pattern::new(242)], 1);
        assert_eq!(counts[&Pattern::new(236)], 1);
        assert_eq!(counts[&Pattern::new(74)], 1);
    }

    #[test]
    fn entropy_uniform_distribution() {
        let mut counts = FxHashMap::default();
        counts.insert(Pattern::new(0), 25);
        counts.insert(Pattern::new(1), 25);
        counts.insert(Pattern::new(2), 25);
        counts.insert(Pattern::new(3), 25);

        let entropy = entropy_from_counts(&counts);
        assert!((entropy - 4.0_f64.ln()).abs() < 1e-9);
    }

    #[test]
    fn entropy_certain_outcome_is_zero() {
        let mut counts = FxHashMap::default();
        counts.insert(Pattern::new(0), 10);

        let entropy = entropy_from_counts(&counts);
        assert!(entropy.abs() < 1e-12);
    }

    #[test]
    fn entropy_skewed_below_uniform() {
        let mut uniform = FxHashMap::default();
        uniform.insert(Pattern::new(0), 25);
        uniform.insert(Pattern::new(1), 25);
        uniform.insert(Pattern::new(2), 25);
        uniform.insert(Pattern::new(3), 25);

        let mut skewed = FxHashMap::default();
        skewed.insert(Pattern::new(0), 97);
        skewed.insert(Pattern::new(1), 1);
        skewed.insert(Pattern::new(2), 1);
        skewed.insert(Pattern::new(3), 1);

        assert!(entropy_from_counts(&uniform) > entropy_from_counts(&skewed));
    }

    #[test]
    fn entropy_empty_histogram_is_zero() {
        let counts: FxHashMap<Pattern, usize> = FxHashMap::default();
        assert!((entropy_from_counts(&counts) - 0.0).abs() < f64::EPSILON);
    }
}
