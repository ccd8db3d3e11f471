//! Entropy-driven solving
//!
//! The engine suggests guesses, a feedback source answers them, and the
//! filter narrows the candidate set until one word remains.

mod engine;
pub mod entropy;
mod filter;
mod source;

pub use engine::{Engine, OPENING_GUESS, SolveError};
pub use filter::{filter_candidates, is_consistent};
pub use source::{FeedbackSource, InteractiveFeedback, OracleFeedback, ScriptedFeedback};
