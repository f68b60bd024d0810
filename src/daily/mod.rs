//! Day-indexed selection
//!
//! Turns the wall clock and a stored offset into a day index, and the day
//! index into the solution, mole letter and rollover time for that day.

pub mod clock;
mod puzzle;
mod schedule;

pub use clock::{Clock, FixedClock, IndexOffset, SystemClock};
pub use puzzle::{DailyCache, DailyPuzzle};
pub use schedule::{
    EPOCH_MS, MAX_INDEX_OFFSET, MOLES, MS_IN_DAY, MoleError, WordOfDay, clamp_offset, day_index,
    mole_of_day, tomorrow, word_of_day,
};
