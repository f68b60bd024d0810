//! The daily puzzle and its cache
//!
//! A [`DailyPuzzle`] bundles everything that is fixed for one day. The
//! [`DailyCache`] keeps the current one and rebuilds it whenever the day index
//! changes, so a long-running process rolls over at midnight UTC.

use super::clock::{Clock, IndexOffset};
use super::schedule::{MoleError, day_index, mole_of_day, tomorrow, word_of_day};
use crate::core::CaseLocale;
use crate::wordlists::WordList;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Solution, mole and rollover time for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPuzzle {
    pub solution: String,
    pub solution_index: i64,
    pub mole: String,
    /// Start of the next day, ms since the Unix epoch
    pub tomorrow: i64,
}

impl DailyPuzzle {
    /// Build the puzzle for a day index
    ///
    /// # Errors
    /// Returns `MoleError::Exhausted` if no mole letter can be chosen.
    pub fn for_index(words: &WordList, index: i64, locale: CaseLocale) -> Result<Self, MoleError> {
        let word = word_of_day(words, index, locale);
        let mole = mole_of_day(&word.solution, index)?;

        Ok(Self {
            mole: mole.to_string(),
            tomorrow: tomorrow(index),
            solution: word.solution,
            solution_index: word.solution_index,
        })
    }

    /// Exact comparison with the solution
    ///
    /// The solution is stored upper case, so callers normalise the guess first.
    #[inline]
    #[must_use]
    pub fn is_winning_word(&self, word: &str) -> bool {
        self.solution == word
    }

    /// Rollover instant as a UTC timestamp
    #[must_use]
    pub fn tomorrow_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.tomorrow)
    }
}

/// Current puzzle, recomputed when the day index moves
pub struct DailyCache<C: Clock, O: IndexOffset> {
    words: WordList,
    locale: CaseLocale,
    clock: C,
    offset: O,
    cached: Option<DailyPuzzle>,
}

impl<C: Clock, O: IndexOffset> DailyCache<C, O> {
    pub fn new(words: WordList, locale: CaseLocale, clock: C, offset: O) -> Self {
        Self {
            words,
            locale,
            clock,
            offset,
            cached: None,
        }
    }

    /// Effective day index right now
    #[must_use]
    pub fn index(&self) -> i64 {
        day_index(self.clock.now_ms(), self.offset.index_offset())
    }

    /// Today's puzzle, rebuilt if the day changed since the last call
    ///
    /// # Errors
    /// Returns `MoleError::Exhausted` if no mole letter can be chosen for today.
    pub fn current(&mut self) -> Result<&DailyPuzzle, MoleError> {
        let index = self.index();

        let puzzle = match self.cached.take() {
            Some(puzzle) if puzzle.solution_index == index => puzzle,
            previous => {
                debug!(
                    index,
                    previous = previous.map(|p| p.solution_index),
                    "daily puzzle refreshed"
                );
                DailyPuzzle::for_index(&self.words, index, self.locale)?
            }
        };

        Ok(self.cached.insert(puzzle))
    }

    /// Drop the cached puzzle so the next `current` call rebuilds it
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub const fn locale(&self) -> CaseLocale {
        self.locale
    }
}
