//! Word list loading utilities
//!
//! Word lists come either from the embedded defaults or from files named
//! on the command line. Both paths produce the same shape: valid
//! five-letter words, sorted and deduplicated, so guess selection always
//! iterates the vocabulary in a stable order.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a line-oriented file
///
/// Lines that are not valid five-letter words are skipped rather than
/// treated as errors. The result is sorted and deduplicated.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_oracle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/solutions.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(normalized(words))
}

/// Convert embedded string slice to a word list
///
/// # Examples
/// ```
/// use wordle_oracle::wordlists::loader::words_from_slice;
/// use wordle_oracle::wordlists::SOLUTIONS;
///
/// let words = words_from_slice(SOLUTIONS);
/// assert_eq!(words.len(), SOLUTIONS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    normalized(slice.iter().filter_map(|&s| Word::new(s).ok()).collect())
}

/// Sort and deduplicate, pinning the iteration order ties resolve by
fn normalized(mut words: Vec<Word>) -> Vec<Word> {
    words.sort();
    words.dedup();
    words
}
