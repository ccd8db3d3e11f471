//! Feedback pattern encoding
//!
//! A pattern packs the per-letter feedback for one guess into a single
//! base-3 number between 0 and 242:
//! - 0 = letter absent from the solution
//! - 1 = letter present somewhere else in the solution
//! - 2 = letter correct at this position
//!
//! The leftmost letter contributes the most significant digit, so all
//! correct encodes to 242 and all absent to 0. Presence is a containment
//! check on the whole solution, not a per-letter count: a repeated guess
//! letter can report present even when every copy of it in the solution
//! is already matched exactly.

use super::{WORD_LENGTH, Word};

/// Feedback for one guess against one solution, base-3 encoded.
///
/// Value range: 0-242 (3^5 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All letters correct (solved game)
    pub const SOLVED: Self = Self(242);

    /// Create a pattern from a raw encoded value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw encoded value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.0 == 242
    }

    /// Calculate the pattern `guess` would receive if `solution` were the target
    ///
    /// Each position scores 2 for an exact match, 1 if the solution merely
    /// contains the letter, and 0 otherwise. Digits accumulate left to
    /// right, most significant first.
    ///
    /// # Examples
    /// ```
    /// use wordle_oracle::core::{Pattern, Word};
    ///
    /// let guess = Word::new("abcde").unwrap();
    /// let solution = Word::new("aecdb").unwrap();
    ///
    /// // a(correct) b(present) c(correct) d(correct) e(present)
    /// // 2×81 + 1×27 + 2×9 + 2×3 + 1 = 214
    /// assert_eq!(Pattern::encode(&guess, &solution).value(), 214);
    /// ```
    #[must_use]
    pub fn encode(guess: &Word, solution: &Word) -> Self {
        let mut value = 0u8;

        for position in 0..WORD_LENGTH {
            let letter = guess.char_at(position);
            let digit = if letter == solution.char_at(position) {
                2
            } else if solution.has_letter(letter) {
                1
            } else {
                0
            };
            value = value * 3 + digit;
        }

        Self(value)
    }

    /// Unpack the pattern into per-position digits, leftmost letter first
    #[must_use]
    pub fn digits(self) -> [u8; WORD_LENGTH] {
        let mut digits = [0u8; WORD_LENGTH];
        let mut value = self.0;

        for position in (0..WORD_LENGTH).rev() {
            digits[position] = value % 3;
            value /= 3;
        }

        digits
    }
}
