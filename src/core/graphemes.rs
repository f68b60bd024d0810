//! Grapheme-aware string helpers
//!
//! Letters are compared as extended grapheme clusters so that a letter built
//! from several code points (a base letter plus combining marks, for example)
//! counts as one tile on the board.

use unicode_segmentation::UnicodeSegmentation;

/// Split a word into user-perceived characters
///
/// No normalisation is performed; the input is expected to already be in the
/// form the word lists use.
///
/// # Examples
/// ```
/// use wordle_mole::core::unicode_split;
///
/// assert_eq!(unicode_split("crane"), vec!["c", "r", "a", "n", "e"]);
/// assert_eq!(unicode_split("e\u{301}te"), vec!["e\u{301}", "t", "e"]);
/// ```
#[must_use]
pub fn unicode_split(word: &str) -> Vec<&str> {
    word.graphemes(true).collect()
}

/// Number of grapheme clusters in a word
///
/// # Examples
/// ```
/// use wordle_mole::core::unicode_length;
///
/// assert_eq!(unicode_length("crane"), 5);
/// assert_eq!(unicode_length("n\u{303}"), 1);
/// ```
#[must_use]
pub fn unicode_length(word: &str) -> usize {
    word.graphemes(true).count()
}
