//! User-facing message strings

/// Shown after a win, picked by the number of guesses left
pub const WIN_MESSAGES: [&str; 3] = ["Great Job!", "Awesome", "Well done!"];

pub const NOT_ENOUGH_LETTERS_MESSAGE: &str = "Not enough letters";
pub const TOO_MANY_LETTERS_MESSAGE: &str = "Too many letters";
pub const WORD_NOT_FOUND_MESSAGE: &str = "Word not found";
pub const GAME_OVER_MESSAGE: &str = "The game is already over";
pub const HARD_MODE_ALERT_MESSAGE: &str = "Hard Mode can only be enabled at the start!";

/// Revealed solution after a loss
#[must_use]
pub fn correct_word_message(solution: &str) -> String {
    format!("The word was {solution}")
}

/// Hard mode: a green letter was moved or dropped
#[must_use]
pub fn wrong_spot_message(letter: &str, position: usize) -> String {
    format!("Must use {letter} in position {position}")
}

/// Hard mode: a revealed letter is missing from the guess
#[must_use]
pub fn not_contained_message(letter: &str) -> String {
    format!("Guess must contain {letter}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_messages() {
        assert_eq!(wrong_spot_message("A", 3), "Must use A in position 3");
        assert_eq!(not_contained_message("E"), "Guess must contain E");
        assert_eq!(correct_word_message("CRANE"), "The word was CRANE");
    }
}
