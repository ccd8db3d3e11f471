//! User-entered feedback lines
//!
//! Feedback is typed as five letters from the alphabet {x, y, g}:
//! - x = letter absent from the solution
//! - y = letter present at a different position
//! - g = letter correct at this position
//!
//! Parsing is case-insensitive, so "XYGXG" and "xygxg" are the same line.

use std::fmt;

use super::{Pattern, WORD_LENGTH};

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Letter does not appear in the solution ('x')
    Absent,
    /// Letter appears in the solution, but not here ('y')
    Present,
    /// Letter is correct at this position ('g')
    Correct,
}

impl Mark {
    /// The letter used to enter and display this mark
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Absent => 'x',
            Self::Present => 'y',
            Self::Correct => 'g',
        }
    }
}

/// A full feedback line, one mark per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([Mark; WORD_LENGTH]);

/// Why a feedback line failed to parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// Line did not contain exactly five characters
    InvalidLength(usize),
    /// Line contained a character outside {x, y, g}
    InvalidChar(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "feedback must be exactly {WORD_LENGTH} characters, got {len}")
            }
            Self::InvalidChar(ch) => {
                write!(f, "feedback characters must be 'x', 'y', or 'g', got '{ch}'")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// Parse a feedback line like "xygxg"
    ///
    /// # Errors
    /// Returns `FeedbackError` if the line is not exactly five characters
    /// or contains a character outside {x, y, g} (either case).
    ///
    /// # Examples
    /// ```
    /// use wordle_oracle::core::{Feedback, Mark};
    ///
    /// let feedback = Feedback::parse("xyGXg").unwrap();
    /// assert_eq!(feedback.mark_at(2), Mark::Correct);
    /// assert!(Feedback::parse("xxxx").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, FeedbackError> {
        let count = line.chars().count();
        if count != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(count));
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (position, ch) in line.chars().enumerate() {
            marks[position] = match ch.to_ascii_lowercase() {
                'x' => Mark::Absent,
                'y' => Mark::Present,
                'g' => Mark::Correct,
                _ => return Err(FeedbackError::InvalidChar(ch)),
            };
        }

        Ok(Self(marks))
    }

    /// Get the marks for all positions, leftmost letter first
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Get the mark at a single position (0-based)
    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> Mark {
        self.0[position]
    }

    /// Check if every letter is marked correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&mark| mark == Mark::Correct)
    }
}

impl From<Pattern> for Feedback {
    /// Expand an encoded pattern into its feedback line
    fn from(pattern: Pattern) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (position, digit) in pattern.digits().into_iter().enumerate() {
            marks[position] = match digit {
                2 => Mark::Correct,
                1 => Mark::Present,
                _ => Mark::Absent,
            };
        }
        Self(marks)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.0 {
            write!(f, "{}", mark.as_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
