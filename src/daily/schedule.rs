//! Day index arithmetic and daily selection
//!
//! Day 0 starts at the game epoch, 2022-01-01 00:00 UTC. Each later day picks
//! the next answer in the rotation and a mole letter from a fixed table.

use crate::core::{CaseLocale, locale_aware_upper_case, unicode_split};
use crate::wordlists::WordList;
use std::fmt;
use tracing::debug;

/// Game epoch: 2022-01-01T00:00:00Z in milliseconds since the Unix epoch
pub const EPOCH_MS: i64 = 1_640_995_200_000;

/// Milliseconds in one day
pub const MS_IN_DAY: i64 = 86_400_000;

/// Largest stored offset honoured, in days (about 100,000 years)
///
/// Offsets beyond this are clamped, so an offset cannot push the index or the
/// rollover instant outside the range `chrono` timestamps can represent.
pub const MAX_INDEX_OFFSET: i64 = 36_500_000;

/// Mole rotation, one entry per day
pub const MOLES: [&str; 26] = [
    "J", "X", "D", "H", "Q", "E", "Y", "T", "V", "K", "N", "A", "F", "R", "G", "I", "U", "Z", "M",
    "P", "L", "O", "W", "B", "S", "C",
];

/// Day index for an instant, shifted by `offset` days
///
/// Uses floor division, so instants before the epoch give negative indices.
/// The offset is clamped to `±MAX_INDEX_OFFSET`.
///
/// # Examples
/// ```
/// use wordle_mole::daily::{EPOCH_MS, MS_IN_DAY, day_index};
///
/// assert_eq!(day_index(EPOCH_MS, 0), 0);
/// assert_eq!(day_index(EPOCH_MS + MS_IN_DAY + 1, 0), 1);
/// assert_eq!(day_index(EPOCH_MS - 1, 0), -1);
/// assert_eq!(day_index(EPOCH_MS, 5), 5);
/// ```
#[inline]
#[must_use]
pub const fn day_index(now_ms: i64, offset: i64) -> i64 {
    now_ms.saturating_sub(EPOCH_MS).div_euclid(MS_IN_DAY) + clamp_offset(offset)
}

/// Clamp a stored offset to `-MAX_INDEX_OFFSET..=MAX_INDEX_OFFSET`
#[inline]
#[must_use]
pub const fn clamp_offset(offset: i64) -> i64 {
    if offset > MAX_INDEX_OFFSET {
        MAX_INDEX_OFFSET
    } else if offset < -MAX_INDEX_OFFSET {
        -MAX_INDEX_OFFSET
    } else {
        offset
    }
}

/// Instant (ms since the Unix epoch) at which the day after `index` begins
///
/// With a non-zero offset this is the boundary after the effective day, not
/// the next calendar midnight. Saturates instead of overflowing for indices
/// no clock or clamped offset can produce.
#[inline]
#[must_use]
pub const fn tomorrow(index: i64) -> i64 {
    index
        .saturating_add(1)
        .saturating_mul(MS_IN_DAY)
        .saturating_add(EPOCH_MS)
}

/// The solution chosen for a day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordOfDay {
    pub solution: String,
    pub solution_index: i64,
}

/// Pick the upper-cased answer for a day index
#[must_use]
pub fn word_of_day(words: &WordList, index: i64, locale: CaseLocale) -> WordOfDay {
    WordOfDay {
        solution: locale_aware_upper_case(words.answer_for_index(index), locale),
        solution_index: index,
    }
}

/// Error type for mole selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoleError {
    /// Every letter of the rotation appears in the solution
    Exhausted { solution: String },
}

impl fmt::Display for MoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted { solution } => {
                write!(f, "No mole letter is absent from solution {solution}")
            }
        }
    }
}

impl std::error::Error for MoleError {}

/// Pick the mole letter for a day
///
/// Starts at the rotation entry for `index` and moves forward until it finds
/// a letter that is not one of the solution's graphemes. At most one full
/// turn of the rotation is tried.
///
/// # Errors
/// Returns `MoleError::Exhausted` if the solution contains every letter of
/// the rotation.
///
/// # Examples
/// ```
/// use wordle_mole::daily::mole_of_day;
///
/// // Day 0 starts at J
/// assert_eq!(mole_of_day("CRANE", 0).unwrap(), "J");
/// // Day 11 starts at A, which CRANE uses, so F follows
/// assert_eq!(mole_of_day("CRANE", 11).unwrap(), "F");
/// ```
pub fn mole_of_day(solution: &str, index: i64) -> Result<&'static str, MoleError> {
    let split_solution = unicode_split(solution);
    let start = index.rem_euclid(MOLES.len() as i64) as usize;

    for step in 0..MOLES.len() {
        let mole = MOLES[(start + step) % MOLES.len()];
        if !split_solution.contains(&mole) {
            return Ok(mole);
        }
        debug!(index, mole, "mole letter appears in solution, advancing");
    }

    Err(MoleError::Exhausted {
        solution: solution.to_string(),
    })
}
