//! Feedback acquisition
//!
//! The solve loop never reads input itself; it asks a [`FeedbackSource`]
//! for one feedback line per round. An interactive session wraps stdin, a
//! scripted source replays a fixed sequence for tests, and an oracle
//! computes feedback from a known target for self-play.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use super::engine::SolveError;
use crate::core::{Feedback, Pattern, Word};

/// Yields one feedback line per solve round
pub trait FeedbackSource {
    /// Produce the feedback for the guess just played
    ///
    /// # Errors
    /// `FeedbackRead` when the underlying source is exhausted or fails,
    /// `FeedbackFormat` when a source treats malformed lines as fatal.
    fn next_feedback(&mut self, guess: &Word) -> Result<Feedback, SolveError>;
}

/// Reads feedback lines from a terminal or any buffered reader
///
/// Malformed lines are reported and re-prompted rather than treated as
/// fatal; only end of input or an I/O failure ends the session.
pub struct InteractiveFeedback<R> {
    reader: R,
}

impl<R: BufRead> InteractiveFeedback<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> FeedbackSource for InteractiveFeedback<R> {
    fn next_feedback(&mut self, guess: &Word) -> Result<Feedback, SolveError> {
        loop {
            print!("Feedback for '{guess}' (x=absent, y=present, g=correct): ");
            io::stdout()
                .flush()
                .map_err(|e| SolveError::FeedbackRead(e.to_string()))?;

            let mut line = String::new();
            let bytes = self
                .reader
                .read_line(&mut line)
                .map_err(|e| SolveError::FeedbackRead(e.to_string()))?;

            if bytes == 0 {
                return Err(SolveError::FeedbackRead("end of input".to_string()));
            }

            match Feedback::parse(line.trim()) {
                Ok(feedback) => return Ok(feedback),
                Err(err) => println!("  {err}, try again"),
            }
        }
    }
}

/// Replays a fixed sequence of feedback lines
///
/// Intended for tests and scripted runs; here a malformed line is a bug
/// in the script, so it fails the solve instead of re-prompting.
pub struct ScriptedFeedback {
    lines: VecDeque<String>,
}

impl ScriptedFeedback {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of unconsumed lines
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl FeedbackSource for ScriptedFeedback {
    fn next_feedback(&mut self, _guess: &Word) -> Result<Feedback, SolveError> {
        let line = self
            .lines
            .pop_front()
            .ok_or_else(|| SolveError::FeedbackRead("feedback script exhausted".to_string()))?;

        Feedback::parse(line.trim()).map_err(SolveError::from)
    }
}

/// Computes feedback against a known target word
///
/// Used for self-play: the solve loop runs exactly as it would against a
/// human, but the answers come from the encoder.
pub struct OracleFeedback {
    target: Word,
}

impl OracleFeedback {
    pub const fn new(target: Word) -> Self {
        Self { target }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

impl FeedbackSource for OracleFeedback {
    fn next_feedback(&mut self, guess: &Word) -> Result<Feedback, SolveError> {
        Ok(Feedback::from(Pattern::encode(guess, &self.target)))
    }
}
