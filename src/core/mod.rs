//! Core game rules
//!
//! Pure functions over words and guesses: grapheme splitting, case folding,
//! guess feedback and hard-mode checks. Nothing here reads the clock or the
//! environment.

mod casing;
mod graphemes;
pub mod messages;
mod reveal;
mod status;

pub use casing::{CaseLocale, locale_aware_lower_case, locale_aware_upper_case};
pub use graphemes::{unicode_length, unicode_split};
pub use reveal::{RevealOutcome, check_reveal, find_first_unused_reveal};
pub use status::{LetterStatus, guess_statuses, keyboard_statuses, statuses_to_emoji};
