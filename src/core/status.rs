//! Per-letter feedback for a guess
//!
//! Each grapheme of a guess is classified against the solution:
//! - Correct: same letter in the same position
//! - Present: letter appears in an unclaimed position elsewhere
//! - Absent: letter is not in the solution, or all its copies are claimed

use super::graphemes::unicode_split;
use rustc_hash::FxHashMap;

/// Feedback for a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    /// Letter not in the solution (gray)
    Absent,
    /// Letter in the solution at another position (yellow)
    Present,
    /// Letter in the correct position (green)
    Correct,
}

impl LetterStatus {
    /// Whether this status reveals a letter the solution contains
    #[inline]
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Correct | Self::Present)
    }

    /// Emoji tile used in share text
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Calculate the status of every grapheme of `guess` against `solution`
///
/// Duplicate letters are handled the usual way: exact matches claim their
/// solution slot first, then remaining letters claim the leftmost unclaimed
/// matching slot. A guess letter with nothing left to claim is absent.
///
/// # Examples
/// ```
/// use wordle_mole::core::{LetterStatus::*, guess_statuses};
///
/// assert_eq!(
///     guess_statuses("CRANE", "CRATE"),
///     vec![Correct, Correct, Correct, Absent, Correct]
/// );
/// ```
#[must_use]
pub fn guess_statuses(solution: &str, guess: &str) -> Vec<LetterStatus> {
    let split_solution = unicode_split(solution);
    let split_guess = unicode_split(guess);

    let mut statuses: Vec<Option<LetterStatus>> = vec![None; split_guess.len()];
    let mut taken = vec![false; split_solution.len()];

    // First pass: exact position matches
    for (i, letter) in split_guess.iter().enumerate() {
        if split_solution.get(i) == Some(letter) {
            statuses[i] = Some(LetterStatus::Correct);
            taken[i] = true;
        }
    }

    // Second pass: claim the first free matching slot elsewhere
    for (i, letter) in split_guess.iter().enumerate() {
        if statuses[i].is_some() {
            continue;
        }

        let free_slot = split_solution
            .iter()
            .enumerate()
            .position(|(j, candidate)| candidate == letter && !taken[j]);

        statuses[i] = Some(if let Some(j) = free_slot {
            taken[j] = true;
            LetterStatus::Present
        } else {
            LetterStatus::Absent
        });
    }

    statuses
        .into_iter()
        .map(|status| status.unwrap_or(LetterStatus::Absent))
        .collect()
}

/// Render a status row as emoji tiles
#[must_use]
pub fn statuses_to_emoji(statuses: &[LetterStatus]) -> String {
    statuses.iter().map(|s| s.to_emoji()).collect()
}

/// Best status seen so far for every letter guessed, for keyboard colouring
///
/// A letter keeps its strongest status across guesses: once green it stays
/// green even if a later guess places it elsewhere.
#[must_use]
pub fn keyboard_statuses<S: AsRef<str>>(
    solution: &str,
    guesses: &[S],
) -> FxHashMap<String, LetterStatus> {
    let mut keys: FxHashMap<String, LetterStatus> = FxHashMap::default();

    for guess in guesses {
        let guess = guess.as_ref();
        for (letter, status) in unicode_split(guess)
            .into_iter()
            .zip(guess_statuses(solution, guess))
        {
            keys.entry(letter.to_string())
                .and_modify(|best| *best = (*best).max(status))
                .or_insert(status);
        }
    }

    keys
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Correct, Present};
    use super::*;

    #[test]
    fn all_correct() {
        assert_eq!(guess_statuses("CRANE", "CRANE"), vec![Correct; 5]);
    }

    #[test]
    fn all_absent() {
        assert_eq!(guess_statuses("CRANE", "BUILT"), vec![Absent; 5]);
    }

    #[test]
    fn crate_against_crane() {
        assert_eq!(
            guess_statuses("CRANE", "CRATE"),
            vec![Correct, Correct, Correct, Absent, Correct]
        );
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        // FLOOR has two O's; ROBOT's second O is green, first is yellow
        assert_eq!(
            guess_statuses("FLOOR", "ROBOT"),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn duplicate_letters_limited_by_solution_count() {
        // ERASE has two E's; SPEED uses both as yellows
        assert_eq!(
            guess_statuses("ERASE", "SPEED"),
            vec![Present, Absent, Present, Present, Absent]
        );
        // the single L and A of SLATE are already claimed by greens
        assert_eq!(
            guess_statuses("SLATE", "LLAMA"),
            vec![Absent, Correct, Correct, Absent, Absent]
        );
    }

    #[test]
    fn later_green_is_not_stolen_by_earlier_yellow() {
        // the green B at position 2 is claimed first, leaving the B at
        // position 1 for the leading B of BABES
        assert_eq!(
            guess_statuses("ABBEY", "BABES"),
            vec![Present, Present, Correct, Correct, Absent]
        );
    }

    #[test]
    fn grapheme_clusters_compare_as_single_letters() {
        let solution = "E\u{301}TE";
        assert_eq!(guess_statuses(solution, "ETE"), vec![Absent, Correct, Correct]);
        assert_eq!(guess_statuses(solution, "E\u{301}TE"), vec![Correct; 3]);
    }

    #[test]
    fn guess_longer_than_solution() {
        assert_eq!(
            guess_statuses("AB", "ABA"),
            vec![Correct, Correct, Absent]
        );
    }

    #[test]
    fn status_ordering_prefers_correct() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert!(Correct.is_revealed());
        assert!(Present.is_revealed());
        assert!(!Absent.is_revealed());
    }

    #[test]
    fn keyboard_keeps_best_status() {
        let keys = keyboard_statuses("CRANE", &["TRACE", "CRANE"]);
        assert_eq!(keys.get("C"), Some(&Correct));
        assert_eq!(keys.get("R"), Some(&Correct));
        assert_eq!(keys.get("T"), Some(&Absent));
        assert_eq!(keys.get("Z"), None);

        let keys = keyboard_statuses("CRANE", &["NICER"]);
        assert_eq!(keys.get("N"), Some(&Present));
        assert_eq!(keys.get("I"), Some(&Absent));
        assert_eq!(keys.get("E"), Some(&Present));
    }

    #[test]
    fn emoji_row() {
        assert_eq!(
            statuses_to_emoji(&[Correct, Present, Absent]),
            "🟩🟨⬜"
        );
    }
}
