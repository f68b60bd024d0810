//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a file, one per line
///
/// Blank lines are ignored. Lines holding more than one token are skipped
/// with a warning, since a word list entry is always a single word.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_mole::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_lines(&content);

    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Parse word list text, one word per line
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else if trimmed.split_whitespace().nth(1).is_some() {
                warn!(line = line_no + 1, entry = trimmed, "skipping multi-word entry");
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use wordle_mole::wordlists::loader::words_from_slice;
/// use wordle_mole::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
