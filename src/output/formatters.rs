//! Formatting utilities for terminal output

use crate::core::{LetterStatus, unicode_split};
use colored::{ColoredString, Colorize};
use rustc_hash::FxHashMap;
use std::time::Duration;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// A single letter tile coloured by its status
#[must_use]
pub fn colored_tile(letter: &str, status: LetterStatus) -> ColoredString {
    let tile = format!(" {letter} ");
    match status {
        LetterStatus::Correct => tile.black().on_green().bold(),
        LetterStatus::Present => tile.black().on_yellow().bold(),
        LetterStatus::Absent => tile.white().on_bright_black(),
    }
}

/// A guess rendered as coloured tiles
#[must_use]
pub fn colored_row(word: &str, statuses: &[LetterStatus]) -> String {
    unicode_split(word)
        .into_iter()
        .zip(statuses)
        .map(|(letter, &status)| colored_tile(letter, status).to_string())
        .collect()
}

/// QWERTY keyboard with each guessed key coloured by its best status
#[must_use]
pub fn keyboard_line(keys: &FxHashMap<String, LetterStatus>) -> String {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys_in_row: String = row
                .chars()
                .map(|key| {
                    let key = key.to_string();
                    match keys.get(&key) {
                        Some(&status) => colored_tile(&key, status).to_string(),
                        None => format!(" {key} "),
                    }
                })
                .collect();
            format!("{}{keys_in_row}", " ".repeat(indent))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Countdown as HH:MM:SS
#[must_use]
pub fn format_countdown(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_formatting() {
        assert_eq!(format_countdown(Duration::ZERO), "00:00:00");
        assert_eq!(format_countdown(Duration::from_secs(3_661)), "01:01:01");
        assert_eq!(format_countdown(Duration::from_millis(86_399_999)), "23:59:59");
    }

    #[test]
    fn row_keeps_every_letter() {
        let row = colored_row(
            "CRATE",
            &[
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Absent,
                LetterStatus::Correct,
            ],
        );
        for letter in ["C", "R", "A", "T", "E"] {
            assert!(row.contains(&format!(" {letter} ")));
        }
    }

    #[test]
    fn keyboard_has_three_rows() {
        let keyboard = keyboard_line(&FxHashMap::default());
        let rows: Vec<&str> = keyboard.lines().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with(" Q "));
        assert!(rows[2].starts_with("   Z "));
    }
}
