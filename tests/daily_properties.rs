//! Properties of the daily schedule and guess validation, through the public API

use pretty_assertions::assert_eq;
use wordle_mole::core::{
    CaseLocale, LetterStatus, RevealOutcome, find_first_unused_reveal, guess_statuses,
    locale_aware_upper_case, unicode_length, unicode_split,
};
use wordle_mole::daily::{
    DailyCache, DailyPuzzle, EPOCH_MS, FixedClock, MOLES, MS_IN_DAY, day_index, mole_of_day,
    word_of_day,
};
use wordle_mole::wordlists::{ANSWERS, WordList};

#[test]
fn word_of_day_is_an_uppercased_answer() {
    let words = WordList::embedded().unwrap();
    let answers: Vec<String> = ANSWERS.iter().map(|w| w.to_uppercase()).collect();

    for index in -10..(ANSWERS.len() as i64 + 10) {
        let word = word_of_day(&words, index, CaseLocale::Default);
        assert!(answers.contains(&word.solution), "{} not an answer", word.solution);
        assert_eq!(word.solution_index, index);
    }
}

#[test]
fn mole_is_never_in_the_solution() {
    let words = WordList::embedded().unwrap();
    let days = ANSWERS.len().max(MOLES.len()) as i64;

    for index in 0..days {
        let puzzle = DailyPuzzle::for_index(&words, index, CaseLocale::Default).unwrap();
        assert!(
            !unicode_split(&puzzle.solution).contains(&puzzle.mole.as_str()),
            "day {index}: {} in {}",
            puzzle.mole,
            puzzle.solution
        );
        assert_eq!(mole_of_day(&puzzle.solution, index).unwrap(), puzzle.mole);
    }
}

#[test]
fn empty_history_never_violates() {
    let none: [&str; 0] = [];
    for word in ["CRANE", "CRIME", "", "ÉTÉ"] {
        assert_eq!(
            find_first_unused_reveal("CRANE", word, &none),
            RevealOutcome::NoViolation
        );
    }
}

#[test]
fn crate_then_crime_against_crane() {
    use LetterStatus::{Absent, Correct};

    assert_eq!(
        guess_statuses("CRANE", "CRATE"),
        vec![Correct, Correct, Correct, Absent, Correct]
    );

    let outcome = find_first_unused_reveal("CRANE", "CRIME", &["CRATE"]);
    assert_eq!(
        outcome,
        RevealOutcome::WrongSpot {
            letter: "A".to_string(),
            position: 3
        }
    );
    assert_eq!(outcome.message().unwrap(), "Must use A in position 3");

    // Keeping every green but dropping a yellow is reported as missing
    let outcome = find_first_unused_reveal("CRANE", "TRACE", &["NACRE"]);
    assert_eq!(
        outcome,
        RevealOutcome::NotContained {
            letter: "N".to_string()
        }
    );
    assert_eq!(outcome.message().unwrap(), "Guess must contain N");
}

#[test]
fn word_list_membership() {
    let words = WordList::embedded().unwrap();

    assert!(words.is_word_in_word_list("crane", CaseLocale::Default));
    assert!(words.is_word_in_word_list("CRANE", CaseLocale::Default));
    assert!(words.is_word_in_word_list("crate", CaseLocale::Default));
    assert!(!words.is_word_in_word_list("xqzvj", CaseLocale::Default));
}

#[test]
fn graphemes() {
    assert_eq!(unicode_length("n\u{303}"), 1);
    assert_eq!(unicode_length("\u{1f469}\u{200d}\u{1f4bb}"), 1);

    for word in ["crane", "mañana", "e\u{301}le\u{300}ve", "ĞÜNEŞ"] {
        assert_eq!(unicode_split(word).concat(), word);
    }
}

#[test]
fn turkish_solution_casing() {
    let words = WordList::new(vec!["şiir".to_string()], Vec::new()).unwrap();
    let word = word_of_day(&words, 0, CaseLocale::Turkic);

    assert_eq!(word.solution, "ŞİİR");
    assert_eq!(locale_aware_upper_case("şiir", CaseLocale::Default), "ŞIIR");
    assert!(words.is_word_in_word_list("ŞİİR", CaseLocale::Turkic));
}

#[test]
fn long_running_cache_rolls_over() {
    let clock = FixedClock::new(EPOCH_MS + 400 * MS_IN_DAY + 1);
    let mut cache = DailyCache::new(
        WordList::embedded().unwrap(),
        CaseLocale::Default,
        &clock,
        0_i64,
    );

    let today = cache.current().unwrap().clone();
    assert_eq!(today.solution_index, day_index(EPOCH_MS + 400 * MS_IN_DAY, 0));

    clock.set(today.tomorrow);
    let next = cache.current().unwrap();
    assert_eq!(next.solution_index, today.solution_index + 1);
    assert!(next.tomorrow > today.tomorrow);
}
