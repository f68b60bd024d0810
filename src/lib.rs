//! Daily word game core
//!
//! Picks the word and "mole" letter of the day and validates guesses against
//! them, including hard-mode reuse of revealed letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_mole::core::{CaseLocale, RevealOutcome, check_reveal};
//! use wordle_mole::daily::DailyPuzzle;
//! use wordle_mole::wordlists::WordList;
//!
//! let words = WordList::embedded().unwrap();
//! let puzzle = DailyPuzzle::for_index(&words, 0, CaseLocale::Default).unwrap();
//! assert!(!puzzle.solution.contains(puzzle.mole.as_str()));
//!
//! // Hard mode: the green A of CRATE must stay in position 3
//! assert_eq!(
//!     check_reveal("CRANE", "CRATE", "CRIME").to_string(),
//!     "Must use A in position 3"
//! );
//! ```

// Core rules (graphemes, casing, feedback)
pub mod core;

// Day index, word of the day and mole letter
pub mod daily;

// Word lists
pub mod wordlists;

// A day's game session
pub mod game;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
