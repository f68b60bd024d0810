//! Interactive play mode
//!
//! Text-based game loop: one guess per line, coloured feedback after each.

use crate::game::{Game, GuessOutcome, MAX_CHALLENGES};
use crate::output::formatters::{colored_row, keyboard_line};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How a play session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayEnd {
    Won,
    Lost,
    Quit,
}

/// Run the interactive game loop until the game ends or the player quits
///
/// Reads guesses line by line from `input`. Besides guesses, the loop
/// understands `quit`, `share`, `keys` and `hard`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    game: &mut Game<'_>,
    mut input: R,
    out: &mut W,
) -> io::Result<PlayEnd> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                     Daily Word - Play Mode                   ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;

    writeln!(
        out,
        "Puzzle #{}. Guess the word in {MAX_CHALLENGES} tries.",
        game.puzzle().solution_index
    )?;
    writeln!(
        out,
        "Today's mole is {}: it is never in the answer.",
        game.puzzle().mole.bright_magenta().bold()
    )?;
    if game.hard_mode() {
        writeln!(out, "{}", "Hard mode: revealed letters must be reused.".yellow())?;
    }
    writeln!(out, "Commands: 'quit' to exit, 'keys' for the keyboard, 'share' for results\n")?;

    loop {
        write!(out, "Guess {}/{MAX_CHALLENGES}: ", game.guesses().len() + 1)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(PlayEnd::Quit);
        }

        match line.trim().to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(PlayEnd::Quit);
            }
            "keys" | "k" => {
                writeln!(out, "{}\n", keyboard_line(&game.keyboard()))?;
                continue;
            }
            "share" => {
                writeln!(out, "\n{}\n", game.share_text())?;
                continue;
            }
            "hard" => {
                match game.set_hard_mode(!game.hard_mode()) {
                    Ok(()) if game.hard_mode() => writeln!(out, "Hard mode on\n")?,
                    Ok(()) => writeln!(out, "Hard mode off\n")?,
                    Err(rejection) => writeln!(out, "❌ {rejection}\n")?,
                }
                continue;
            }
            _ => {}
        }

        let submitted = match game.submit(&line) {
            Ok(submitted) => submitted,
            Err(rejection) => {
                writeln!(out, "❌ {rejection}\n")?;
                continue;
            }
        };

        writeln!(out, "   {}", colored_row(&submitted.word, &submitted.statuses))?;

        match submitted.outcome {
            GuessOutcome::Continue { remaining } => {
                writeln!(out, "   {remaining} left\n")?;
            }
            GuessOutcome::Won { .. } | GuessOutcome::Lost { .. } => {
                let won = matches!(submitted.outcome, GuessOutcome::Won { .. });
                let message = game.end_message().unwrap_or_default();

                write_banner(out, &message, won)?;
                writeln!(out, "{}\n", game.share_text())?;

                return Ok(if won { PlayEnd::Won } else { PlayEnd::Lost });
            }
        }
    }
}

fn write_banner<W: Write>(out: &mut W, message: &str, won: bool) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    if won {
        writeln!(out, "    🎉 {}", message.bright_green().bold())?;
    } else {
        writeln!(out, "    {}", message.bright_red().bold())?;
    }
    writeln!(out, "{}\n", "═".repeat(70).bright_cyan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CaseLocale;
    use crate::daily::DailyPuzzle;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn words() -> WordList {
        WordList::new(
            words_from_slice(&["crane"]),
            words_from_slice(&["crate", "block", "plumb", "dough", "fizzy", "jumpy", "wacky"]),
        )
        .unwrap()
    }

    fn play(words: &WordList, script: &str) -> (PlayEnd, String) {
        let puzzle = DailyPuzzle::for_index(words, 0, CaseLocale::Default).unwrap();
        let mut game = Game::new(puzzle, words, CaseLocale::Default);
        let mut out = Vec::new();
        let end = run_play(&mut game, Cursor::new(script.to_string()), &mut out).unwrap();
        (end, String::from_utf8(out).unwrap())
    }

    #[test]
    fn winning_session() {
        let words = words();
        let (end, output) = play(&words, "crate\ncrane\n");

        assert_eq!(end, PlayEnd::Won);
        assert!(output.contains("Wordle 0 2/6"));
    }

    #[test]
    fn rejections_are_reported_and_retried() {
        let words = words();
        let (end, output) = play(&words, "zzzzz\ncran\ncrane\n");

        assert_eq!(end, PlayEnd::Won);
        assert!(output.contains("Word not found"));
        assert!(output.contains("Not enough letters"));
        assert!(output.contains("Wordle 0 1/6"));
    }

    #[test]
    fn losing_session_reveals_word() {
        let words = words();
        let (end, output) = play(&words, "block\nplumb\ndough\nfizzy\njumpy\nwacky\n");

        assert_eq!(end, PlayEnd::Lost);
        assert!(output.contains("The word was CRANE"));
        assert!(output.contains("Wordle 0 X/6"));
    }

    #[test]
    fn quit_and_end_of_input() {
        let words = words();
        assert_eq!(play(&words, "quit\n").0, PlayEnd::Quit);
        assert_eq!(play(&words, "crate\n").0, PlayEnd::Quit);
    }

    #[test]
    fn hard_mode_toggle_locked_after_first_guess() {
        let words = words();
        let (_, output) = play(&words, "crate\nhard\nquit\n");
        assert!(output.contains("Hard Mode can only be enabled at the start!"));
    }
}
