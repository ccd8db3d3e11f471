//! Entropy scoring and guess selection
//!
//! The information-theoretic core of the solver: guesses are ranked by the
//! expected information gain of the feedback they would produce.

mod calculator;
mod selector;

pub use calculator::{entropy_from_counts, expected_remaining, score_guess};
pub use selector::{rank_guesses, select_guess};
