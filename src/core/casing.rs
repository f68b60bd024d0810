//! Locale-aware case folding
//!
//! Word lists are stored lower case and solutions are shown upper case. Most
//! languages use the default Unicode mapping for this, but Turkic languages
//! pair dotted and dotless I differently and Lithuanian keeps the dot of i
//! under accents, so the locale is passed explicitly.

use std::fmt;
use std::str::FromStr;

/// Case mapping rules selected from a locale tag
///
/// Honoured tags: `tr`/`az` (Turkic) and `lt` (Lithuanian). Every other tag
/// uses the default mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseLocale {
    /// Default Unicode case mapping
    #[default]
    Default,
    /// Turkish and Azerbaijani: `I`/`ı` and `İ`/`i` are case pairs
    Turkic,
    /// Lithuanian: i keeps an explicit dot above when accented
    Lithuanian,
}

impl CaseLocale {
    /// Select case rules from a BCP-47 style tag such as `tr`, `tr-TR` or `az_AZ`
    ///
    /// Only the primary language subtag matters. Unknown or empty tags fall
    /// back to the default mapping.
    ///
    /// # Examples
    /// ```
    /// use wordle_mole::core::CaseLocale;
    ///
    /// assert_eq!(CaseLocale::from_tag("tr-TR"), CaseLocale::Turkic);
    /// assert_eq!(CaseLocale::from_tag("en-GB"), CaseLocale::Default);
    /// ```
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match language.as_str() {
            "tr" | "tur" | "az" | "aze" => Self::Turkic,
            "lt" | "lit" => Self::Lithuanian,
            _ => Self::Default,
        }
    }

    /// Same as [`CaseLocale::from_tag`], treating a missing tag as the default
    #[must_use]
    pub fn from_optional(tag: Option<&str>) -> Self {
        tag.map_or(Self::Default, Self::from_tag)
    }
}

impl FromStr for CaseLocale {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl fmt::Display for CaseLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Turkic => write!(f, "turkic"),
            Self::Lithuanian => write!(f, "lithuanian"),
        }
    }
}

const COMBINING_DOT_ABOVE: char = '\u{307}';

/// Combining grave, acute and tilde, the accents Lithuanian puts on i
fn is_accent_above(ch: char) -> bool {
    matches!(ch, '\u{300}' | '\u{301}' | '\u{303}')
}

/// Letters whose dot disappears under an accent unless written explicitly
fn is_soft_dotted(ch: char) -> bool {
    matches!(ch, 'i' | 'j' | 'į')
}

/// Lower-case `text` following the rules of `locale`
///
/// # Examples
/// ```
/// use wordle_mole::core::{CaseLocale, locale_aware_lower_case};
///
/// assert_eq!(locale_aware_lower_case("CRANE", CaseLocale::Default), "crane");
/// assert_eq!(locale_aware_lower_case("KIRMIZI", CaseLocale::Turkic), "kırmızı");
/// ```
#[must_use]
pub fn locale_aware_lower_case(text: &str, locale: CaseLocale) -> String {
    match locale {
        CaseLocale::Default => text.to_lowercase(),
        CaseLocale::Turkic => {
            let mut result = String::with_capacity(text.len());
            let mut chars = text.chars().peekable();

            while let Some(ch) = chars.next() {
                match ch {
                    // I followed by a combining dot is a decomposed İ
                    'I' if chars.peek() == Some(&COMBINING_DOT_ABOVE) => {
                        chars.next();
                        result.push('i');
                    }
                    'I' => result.push('ı'),
                    'İ' => result.push('i'),
                    _ => result.extend(ch.to_lowercase()),
                }
            }

            result
        }
        CaseLocale::Lithuanian => {
            let mut result = String::with_capacity(text.len());
            let mut chars = text.chars().peekable();

            while let Some(ch) = chars.next() {
                match ch {
                    'Ì' => result.push_str("i\u{307}\u{300}"),
                    'Í' => result.push_str("i\u{307}\u{301}"),
                    'Ĩ' => result.push_str("i\u{307}\u{303}"),
                    'I' | 'J' | 'Į' if chars.peek().is_some_and(|&next| is_accent_above(next)) => {
                        result.extend(ch.to_lowercase());
                        result.push(COMBINING_DOT_ABOVE);
                    }
                    _ => result.extend(ch.to_lowercase()),
                }
            }

            result
        }
    }
}

/// Upper-case `text` following the rules of `locale`
///
/// # Examples
/// ```
/// use wordle_mole::core::{CaseLocale, locale_aware_upper_case};
///
/// assert_eq!(locale_aware_upper_case("crane", CaseLocale::Default), "CRANE");
/// assert_eq!(locale_aware_upper_case("ikinci", CaseLocale::Turkic), "İKİNCİ");
/// ```
#[must_use]
pub fn locale_aware_upper_case(text: &str, locale: CaseLocale) -> String {
    match locale {
        CaseLocale::Default => text.to_uppercase(),
        CaseLocale::Turkic => {
            let mut result = String::with_capacity(text.len());
            for ch in text.chars() {
                match ch {
                    'i' => result.push('İ'),
                    _ => result.extend(ch.to_uppercase()),
                }
            }
            result
        }
        CaseLocale::Lithuanian => {
            let mut result = String::with_capacity(text.len());
            let mut after_soft_dotted = false;

            for ch in text.chars() {
                if ch == COMBINING_DOT_ABOVE && after_soft_dotted {
                    continue;
                }
                after_soft_dotted = is_soft_dotted(ch);
                result.extend(ch.to_uppercase());
            }
            result
        }
    }
}
