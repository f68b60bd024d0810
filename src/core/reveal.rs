//! Hard-mode enforcement
//!
//! In hard mode every letter revealed by the previous guess must be reused:
//! greens in the same position, yellows anywhere. Duplicates count, so if two
//! C's were revealed the next guess needs two C's.

use super::graphemes::unicode_split;
use super::messages::{not_contained_message, wrong_spot_message};
use super::status::{LetterStatus, guess_statuses};
use std::fmt;

/// Result of checking a candidate word against the previous guess's reveals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Every revealed letter is reused
    NoViolation,
    /// A green letter is not kept at its position (1-based)
    WrongSpot { letter: String, position: usize },
    /// A revealed letter is missing from the candidate
    NotContained { letter: String },
}

impl RevealOutcome {
    #[inline]
    #[must_use]
    pub const fn is_violation(&self) -> bool {
        !matches!(self, Self::NoViolation)
    }

    /// Player-facing message, or `None` when there is no violation
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::NoViolation => None,
            Self::WrongSpot { letter, position } => Some(wrong_spot_message(letter, *position)),
            Self::NotContained { letter } => Some(not_contained_message(letter)),
        }
    }
}

impl fmt::Display for RevealOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => f.write_str(&message),
            None => f.write_str("No violation"),
        }
    }
}

/// Check `candidate` against the letters `previous_guess` revealed for `solution`
///
/// Greens are checked position by position first and the first moved green
/// is reported. Then each candidate letter consumes one matching revealed
/// letter, and the first revealed letter left over is reported.
///
/// # Examples
/// ```
/// use wordle_mole::core::{RevealOutcome, check_reveal};
///
/// assert_eq!(check_reveal("CRANE", "CRATE", "CRANE"), RevealOutcome::NoViolation);
/// assert_eq!(
///     check_reveal("CRANE", "CRATE", "CRIME"),
///     RevealOutcome::WrongSpot { letter: "A".to_string(), position: 3 }
/// );
/// ```
#[must_use]
pub fn check_reveal(solution: &str, previous_guess: &str, candidate: &str) -> RevealOutcome {
    let statuses = guess_statuses(solution, previous_guess);
    let split_candidate = unicode_split(candidate);
    let split_guess = unicode_split(previous_guess);

    let mut letters_left: Vec<&str> = Vec::new();

    for (i, (&letter, status)) in split_guess.iter().zip(&statuses).enumerate() {
        if status.is_revealed() {
            letters_left.push(letter);
        }
        if *status == LetterStatus::Correct && split_candidate.get(i) != Some(&letter) {
            return RevealOutcome::WrongSpot {
                letter: letter.to_string(),
                position: i + 1,
            };
        }
    }

    // Each candidate letter uses up one revealed copy
    for letter in &split_candidate {
        if let Some(n) = letters_left.iter().position(|left| left == letter) {
            letters_left.remove(n);
        }
    }

    match letters_left.first() {
        Some(letter) => RevealOutcome::NotContained {
            letter: (*letter).to_string(),
        },
        None => RevealOutcome::NoViolation,
    }
}

/// Check `word` against the reveals of the most recent guess in `guesses`
///
/// Earlier guesses were validated when they were submitted, so only the last
/// one is inspected. An empty history never violates.
#[must_use]
pub fn find_first_unused_reveal<S: AsRef<str>>(
    solution: &str,
    word: &str,
    guesses: &[S],
) -> RevealOutcome {
    match guesses.last() {
        Some(guess) => check_reveal(solution, guess.as_ref(), word),
        None => RevealOutcome::NoViolation,
    }
}
