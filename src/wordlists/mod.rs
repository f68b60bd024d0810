//! Word lists for the daily game
//!
//! Solutions rotate through [`ANSWERS`] in order, one per day. A guess is
//! accepted if it is an answer or one of [`VALID_GUESSES`].

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, VALID_GUESSES, VALID_GUESSES_COUNT};

use crate::core::{CaseLocale, locale_aware_lower_case};
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for unusable word lists
#[derive(Debug)]
pub enum WordListError {
    /// The answer list has no words, so no daily solution can be chosen
    Empty,
    /// A word list file could not be read
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Answer list must contain at least one word"),
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Solution rotation plus the set of accepted guesses
///
/// Words are stored lower case, as they appear in the list files.
#[derive(Debug, Clone)]
pub struct WordList {
    answers: Vec<String>,
    accepted: FxHashSet<String>,
}

impl WordList {
    /// Build a word list from answers and extra accepted guesses
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `answers` is empty.
    pub fn new(answers: Vec<String>, valid_guesses: Vec<String>) -> Result<Self, WordListError> {
        if answers.is_empty() {
            return Err(WordListError::Empty);
        }

        let accepted = answers.iter().cloned().chain(valid_guesses).collect();
        Ok(Self { answers, accepted })
    }

    /// The lists compiled into the binary
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if the embedded answer list is empty.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(
            loader::words_from_slice(ANSWERS),
            loader::words_from_slice(VALID_GUESSES),
        )
    }

    /// Load lists from files, using the embedded list for any path not given
    ///
    /// # Errors
    /// Returns `WordListError::Io` if a file cannot be read, or
    /// `WordListError::Empty` if the resulting answer list is empty.
    pub fn load(answers: Option<&Path>, valid_guesses: Option<&Path>) -> Result<Self, WordListError> {
        let read = |path: &Path| {
            loader::load_from_file(path).map_err(|source| WordListError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        let answers = match answers {
            Some(path) => read(path)?,
            None => loader::words_from_slice(ANSWERS),
        };
        let valid_guesses = match valid_guesses {
            Some(path) => read(path)?,
            None => loader::words_from_slice(VALID_GUESSES),
        };

        Self::new(answers, valid_guesses)
    }

    /// Solutions in rotation order
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Number of solutions in the rotation (always at least one)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Always false for a constructed list
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// The answer for a day index
    ///
    /// Indices wrap around the list. Negative indices (days before the
    /// epoch) wrap the same way, counting back from the end.
    #[must_use]
    pub fn answer_for_index(&self, index: i64) -> &str {
        let slot = index.rem_euclid(self.answers.len() as i64) as usize;
        &self.answers[slot]
    }

    /// Whether `word` is an answer or an accepted guess, ignoring case
    ///
    /// # Examples
    /// ```
    /// use wordle_mole::core::CaseLocale;
    /// use wordle_mole::wordlists::WordList;
    ///
    /// let words = WordList::embedded().unwrap();
    /// assert!(words.is_word_in_word_list("CRANE", CaseLocale::Default));
    /// assert!(!words.is_word_in_word_list("QXZVJ", CaseLocale::Default));
    /// ```
    #[must_use]
    pub fn is_word_in_word_list(&self, word: &str, locale: CaseLocale) -> bool {
        self.accepted
            .contains(&locale_aware_lower_case(word, locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        loader::words_from_slice(list)
    }

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn valid_guesses_count_matches_const() {
        assert_eq!(VALID_GUESSES.len(), VALID_GUESSES_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        // All answers should be 5 letters, lowercase
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn valid_guesses_are_not_answers() {
        let answers: FxHashSet<_> = ANSWERS.iter().collect();
        for guess in VALID_GUESSES {
            assert!(!answers.contains(guess), "'{guess}' is in both lists");
        }
    }

    #[test]
    fn empty_answers_rejected() {
        assert!(matches!(
            WordList::new(Vec::new(), words(&["crane"])),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn lookup_is_case_insensitive_across_both_lists() {
        let list = WordList::new(words(&["crane"]), words(&["crate"])).unwrap();

        assert!(list.is_word_in_word_list("crane", CaseLocale::Default));
        assert!(list.is_word_in_word_list("CRANE", CaseLocale::Default));
        assert!(list.is_word_in_word_list("Crate", CaseLocale::Default));
        assert!(!list.is_word_in_word_list("slate", CaseLocale::Default));
        assert!(!list.is_word_in_word_list("", CaseLocale::Default));
    }

    #[test]
    fn lookup_uses_locale_folding() {
        let list = WordList::new(words(&["ılık"]), Vec::new()).unwrap();

        assert!(list.is_word_in_word_list("ILIK", CaseLocale::Turkic));
        assert!(!list.is_word_in_word_list("ILIK", CaseLocale::Default));
    }

    #[test]
    fn answer_index_wraps_both_ways() {
        let list = WordList::new(words(&["alpha", "bravo", "delta"]), Vec::new()).unwrap();

        assert_eq!(list.answer_for_index(0), "alpha");
        assert_eq!(list.answer_for_index(4), "bravo");
        assert_eq!(list.answer_for_index(-1), "delta");
        assert_eq!(list.answer_for_index(-3), "alpha");
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());
    }

    #[test]
    fn load_without_paths_uses_embedded() {
        let list = WordList::load(None, None).unwrap();
        assert_eq!(list.len(), ANSWERS_COUNT);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = WordList::load(Some(Path::new("missing/answers.txt")), None).unwrap_err();
        assert!(matches!(err, WordListError::Io { .. }));
        assert!(err.to_string().contains("missing/answers.txt"));
    }
}
