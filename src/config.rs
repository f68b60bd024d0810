//! Runtime configuration
//!
//! Everything that varies between deployments: locale, stored day offset and
//! optional replacement word lists. The binary fills this from command-line
//! flags and environment variables; library code only ever receives it.

use crate::core::CaseLocale;
use crate::daily::{Clock, DailyCache, MAX_INDEX_OFFSET, clamp_offset};
use crate::wordlists::{WordList, WordListError};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Settings for one game deployment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub locale: CaseLocale,
    /// Days added to the clock-derived index
    pub index_offset: i64,
    pub answers_path: Option<PathBuf>,
    pub guesses_path: Option<PathBuf>,
}

impl GameConfig {
    /// Configuration with an optional locale tag and a day offset
    ///
    /// Offsets outside `±MAX_INDEX_OFFSET` are clamped with a warning.
    ///
    /// # Examples
    /// ```
    /// use wordle_mole::config::GameConfig;
    /// use wordle_mole::core::CaseLocale;
    ///
    /// let config = GameConfig::new(Some("tr-TR"), 2);
    /// assert_eq!(config.locale, CaseLocale::Turkic);
    /// assert_eq!(config.index_offset, 2);
    /// ```
    #[must_use]
    pub fn new(locale_tag: Option<&str>, index_offset: i64) -> Self {
        let clamped = clamp_offset(index_offset);
        if clamped != index_offset {
            warn!(
                requested = index_offset,
                max = MAX_INDEX_OFFSET,
                "index offset out of range, clamping"
            );
        }

        Self {
            locale: CaseLocale::from_optional(locale_tag),
            index_offset: clamped,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_word_lists(mut self, answers: Option<PathBuf>, guesses: Option<PathBuf>) -> Self {
        self.answers_path = answers;
        self.guesses_path = guesses;
        self
    }

    /// Load the configured word lists, falling back to the embedded ones
    ///
    /// # Errors
    /// Returns a `WordListError` if a configured file cannot be read or the
    /// answer list ends up empty.
    pub fn load_word_list(&self) -> Result<WordList, WordListError> {
        let words = WordList::load(self.answers_path.as_deref(), self.guesses_path.as_deref())?;
        debug!(
            answers = words.len(),
            locale = %self.locale,
            offset = self.index_offset,
            "word list ready"
        );
        Ok(words)
    }

    /// Daily cache driven by `clock` with this configuration's locale and offset
    #[must_use]
    pub fn daily_cache<C: Clock>(&self, words: WordList, clock: C) -> DailyCache<C, i64> {
        DailyCache::new(words, self.locale, clock, self.index_offset)
    }
}
