//! Wordle Oracle
//!
//! An interactive Wordle assistant. Each round it suggests the guess with
//! the highest expected information gain, reads the colour feedback, and
//! filters the candidate pool until one solution remains.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_oracle::core::{Feedback, Pattern, Word};
//!
//! let guess = Word::new("soare").unwrap();
//! let solution = Word::new("crane").unwrap();
//!
//! // Encode the feedback the real game would give
//! let pattern = Pattern::encode(&guess, &solution);
//! assert_eq!(Feedback::from(pattern).to_string(), "xxgyg");
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
