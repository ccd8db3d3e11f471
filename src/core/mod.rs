//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod pattern;
mod word;

pub use feedback::{Feedback, FeedbackError, Mark};
pub use pattern::Pattern;
pub use word::{Word, WordError};

/// Every word and feedback line is exactly this many letters
pub const WORD_LENGTH: usize = 5;
