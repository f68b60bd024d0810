//! A single day's game session
//!
//! Tracks the guesses made against a [`DailyPuzzle`] and applies the
//! submission rules: length, dictionary, hard mode, win and loss.

use crate::core::messages::{
    GAME_OVER_MESSAGE, HARD_MODE_ALERT_MESSAGE, NOT_ENOUGH_LETTERS_MESSAGE,
    TOO_MANY_LETTERS_MESSAGE, WIN_MESSAGES, WORD_NOT_FOUND_MESSAGE, correct_word_message,
};
use crate::core::{
    CaseLocale, LetterStatus, RevealOutcome, find_first_unused_reveal, guess_statuses,
    keyboard_statuses, locale_aware_upper_case, statuses_to_emoji, unicode_length,
};
use crate::daily::DailyPuzzle;
use crate::wordlists::WordList;
use rustc_hash::FxHashMap;
use std::fmt;
use tracing::debug;

/// Number of guesses allowed per game
pub const MAX_CHALLENGES: usize = 6;

/// Why a guess was not accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessRejection {
    GameOver,
    NotEnoughLetters,
    TooManyLetters,
    WordNotFound,
    /// Hard mode is on and the guess ignores a revealed letter
    HardMode(RevealOutcome),
    /// Hard mode can only be switched on before the first guess
    HardModeLocked,
}

impl fmt::Display for GuessRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => f.write_str(GAME_OVER_MESSAGE),
            Self::NotEnoughLetters => f.write_str(NOT_ENOUGH_LETTERS_MESSAGE),
            Self::TooManyLetters => f.write_str(TOO_MANY_LETTERS_MESSAGE),
            Self::WordNotFound => f.write_str(WORD_NOT_FOUND_MESSAGE),
            Self::HardMode(outcome) => write!(f, "{outcome}"),
            Self::HardModeLocked => f.write_str(HARD_MODE_ALERT_MESSAGE),
        }
    }
}

impl std::error::Error for GuessRejection {}

/// State of the game after an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Won { guesses: usize },
    Lost { solution: String },
    Continue { remaining: usize },
}

/// An accepted guess with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedGuess {
    pub word: String,
    pub statuses: Vec<LetterStatus>,
    pub outcome: GuessOutcome,
}

/// One player's game against one daily puzzle
#[derive(Debug, Clone)]
pub struct Game<'a> {
    puzzle: DailyPuzzle,
    words: &'a WordList,
    locale: CaseLocale,
    hard_mode: bool,
    guesses: Vec<String>,
}

impl<'a> Game<'a> {
    #[must_use]
    pub fn new(puzzle: DailyPuzzle, words: &'a WordList, locale: CaseLocale) -> Self {
        Self {
            puzzle,
            words,
            locale,
            hard_mode: false,
            guesses: Vec::new(),
        }
    }

    #[must_use]
    pub const fn puzzle(&self) -> &DailyPuzzle {
        &self.puzzle
    }

    /// Accepted guesses so far, upper case
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    /// Switch hard mode
    ///
    /// Turning it off is always allowed; turning it on only before the first
    /// guess.
    ///
    /// # Errors
    /// Returns `GuessRejection::HardModeLocked` when enabling mid-game.
    pub fn set_hard_mode(&mut self, enabled: bool) -> Result<(), GuessRejection> {
        if enabled && !self.hard_mode && !self.guesses.is_empty() {
            return Err(GuessRejection::HardModeLocked);
        }
        self.hard_mode = enabled;
        Ok(())
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.guesses
            .last()
            .is_some_and(|guess| self.puzzle.is_winning_word(guess))
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        !self.is_won() && self.guesses.len() >= MAX_CHALLENGES
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    /// Submit a guess
    ///
    /// The guess is trimmed and upper-cased with the game's locale before any
    /// check runs.
    ///
    /// # Errors
    /// Returns a `GuessRejection` describing the first rule the guess breaks.
    /// Rejected guesses do not use up a turn.
    pub fn submit(&mut self, input: &str) -> Result<SubmittedGuess, GuessRejection> {
        if self.is_over() {
            return Err(GuessRejection::GameOver);
        }

        let guess = locale_aware_upper_case(input.trim(), self.locale);
        let length = unicode_length(&guess);
        let target = unicode_length(&self.puzzle.solution);

        if length < target {
            return Err(GuessRejection::NotEnoughLetters);
        }
        if length > target {
            return Err(GuessRejection::TooManyLetters);
        }
        if !self.words.is_word_in_word_list(&guess, self.locale) {
            return Err(GuessRejection::WordNotFound);
        }
        if self.hard_mode {
            let reveal = find_first_unused_reveal(&self.puzzle.solution, &guess, &self.guesses);
            if reveal.is_violation() {
                return Err(GuessRejection::HardMode(reveal));
            }
        }

        let statuses = guess_statuses(&self.puzzle.solution, &guess);
        self.guesses.push(guess.clone());
        debug!(guess = %guess, turn = self.guesses.len(), "guess accepted");

        let outcome = if self.puzzle.is_winning_word(&guess) {
            GuessOutcome::Won {
                guesses: self.guesses.len(),
            }
        } else if self.guesses.len() >= MAX_CHALLENGES {
            GuessOutcome::Lost {
                solution: self.puzzle.solution.clone(),
            }
        } else {
            GuessOutcome::Continue {
                remaining: MAX_CHALLENGES - self.guesses.len(),
            }
        };

        Ok(SubmittedGuess {
            word: guess,
            statuses,
            outcome,
        })
    }

    /// Best known status per letter, for keyboard colouring
    #[must_use]
    pub fn keyboard(&self) -> FxHashMap<String, LetterStatus> {
        keyboard_statuses(&self.puzzle.solution, &self.guesses)
    }

    /// Message for the end of the game, if it has ended
    #[must_use]
    pub fn end_message(&self) -> Option<String> {
        if self.is_won() {
            let pick = (MAX_CHALLENGES - self.guesses.len()) % WIN_MESSAGES.len();
            Some(WIN_MESSAGES[pick].to_string())
        } else if self.is_lost() {
            Some(correct_word_message(&self.puzzle.solution))
        } else {
            None
        }
    }

    /// Spoiler-free summary for sharing
    ///
    /// ```text
    /// Wordle 293 3/6*
    ///
    /// ⬜🟨⬜⬜⬜
    /// 🟩🟩⬜🟩⬜
    /// 🟩🟩🟩🟩🟩
    /// ```
    #[must_use]
    pub fn share_text(&self) -> String {
        let score = if self.is_lost() {
            "X".to_string()
        } else {
            self.guesses.len().to_string()
        };
        let hard = if self.hard_mode { "*" } else { "" };

        let mut text = format!(
            "Wordle {} {score}/{MAX_CHALLENGES}{hard}\n\n",
            self.puzzle.solution_index
        );
        let rows: Vec<String> = self
            .guesses
            .iter()
            .map(|guess| statuses_to_emoji(&guess_statuses(&self.puzzle.solution, guess)))
            .collect();
        text.push_str(&rows.join("\n"));
        text
    }
}
