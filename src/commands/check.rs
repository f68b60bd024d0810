//! Guess checking command
//!
//! Runs every rule a guess is subject to and reports all of them at once,
//! rather than stopping at the first failure like a game submission does.

use crate::core::{
    CaseLocale, LetterStatus, RevealOutcome, find_first_unused_reveal, guess_statuses,
    locale_aware_upper_case, unicode_length,
};
use crate::daily::DailyPuzzle;
use crate::wordlists::WordList;

/// Input for checking a guess
pub struct CheckConfig {
    pub word: String,
    /// Earlier guesses, oldest first
    pub history: Vec<String>,
    pub hard_mode: bool,
}

/// Everything known about a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// The guess, upper-cased
    pub word: String,
    pub length: usize,
    pub expected_length: usize,
    pub in_word_list: bool,
    pub statuses: Vec<LetterStatus>,
    /// Hard-mode outcome; always `NoViolation` when hard mode is off
    pub reveal: RevealOutcome,
    pub winning: bool,
}

impl CheckResult {
    /// Whether a game would accept this guess
    #[must_use]
    pub fn is_acceptable(&self) -> bool {
        self.length == self.expected_length && self.in_word_list && !self.reveal.is_violation()
    }
}

/// Check a guess against a puzzle
#[must_use]
pub fn check_word(
    config: &CheckConfig,
    puzzle: &DailyPuzzle,
    words: &WordList,
    locale: CaseLocale,
) -> CheckResult {
    let word = locale_aware_upper_case(config.word.trim(), locale);
    let history: Vec<String> = config
        .history
        .iter()
        .map(|guess| locale_aware_upper_case(guess.trim(), locale))
        .collect();

    let reveal = if config.hard_mode {
        find_first_unused_reveal(&puzzle.solution, &word, &history)
    } else {
        RevealOutcome::NoViolation
    };

    CheckResult {
        length: unicode_length(&word),
        expected_length: unicode_length(&puzzle.solution),
        in_word_list: words.is_word_in_word_list(&word, locale),
        statuses: guess_statuses(&puzzle.solution, &word),
        winning: puzzle.is_winning_word(&word),
        reveal,
        word,
    }
}
