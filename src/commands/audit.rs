//! Schedule audit - checks the daily invariants over a range of days
//!
//! Every day is independent, so days are evaluated in parallel.

use crate::core::{CaseLocale, locale_aware_upper_case, unicode_split};
use crate::daily::{DailyPuzzle, MoleError};
use crate::wordlists::WordList;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// A day whose puzzle broke an invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditFailure {
    /// The solution is not an answer from the list
    SolutionNotInList { index: i64, solution: String },
    /// The mole letter appears in the solution
    MoleInSolution { index: i64, mole: String, solution: String },
    /// No mole letter could be chosen
    NoMole { index: i64, error: MoleError },
}

/// Statistics from auditing a range of days
#[derive(Debug)]
pub struct AuditStatistics {
    pub first_index: i64,
    pub days_checked: usize,
    pub failures: Vec<AuditFailure>,
    pub mole_distribution: FxHashMap<String, usize>,
    /// Distinct solutions seen in the range
    pub distinct_solutions: usize,
    pub total_time: Duration,
}

impl AuditStatistics {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Check a single day
fn audit_day(words: &WordList, index: i64, locale: CaseLocale) -> Result<DailyPuzzle, AuditFailure> {
    let puzzle = DailyPuzzle::for_index(words, index, locale)
        .map_err(|error| AuditFailure::NoMole { index, error })?;

    // Upper-casing is not reversible (ß becomes SS), so compare upper case
    let listed = words
        .answers()
        .iter()
        .any(|answer| locale_aware_upper_case(answer, locale) == puzzle.solution);
    if !listed {
        return Err(AuditFailure::SolutionNotInList {
            index,
            solution: puzzle.solution,
        });
    }

    if unicode_split(&puzzle.solution).contains(&puzzle.mole.as_str()) {
        return Err(AuditFailure::MoleInSolution {
            index,
            mole: puzzle.mole,
            solution: puzzle.solution,
        });
    }

    Ok(puzzle)
}

/// Audit `days` consecutive days starting at `first_index`
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
#[must_use]
pub fn run_audit(
    words: &WordList,
    locale: CaseLocale,
    first_index: i64,
    days: usize,
    show_progress: bool,
) -> AuditStatistics {
    let pb = if show_progress {
        ProgressBar::new(days as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let results: Vec<Result<DailyPuzzle, AuditFailure>> = (0..days as i64)
        .into_par_iter()
        .map(|day| {
            let result = audit_day(words, first_index.saturating_add(day), locale);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut failures = Vec::new();
    let mut mole_distribution: FxHashMap<String, usize> = FxHashMap::default();
    let mut solutions: Vec<&str> = Vec::new();

    for result in &results {
        match result {
            Ok(puzzle) => {
                *mole_distribution.entry(puzzle.mole.clone()).or_insert(0) += 1;
                solutions.push(&puzzle.solution);
            }
            Err(failure) => failures.push(failure.clone()),
        }
    }

    solutions.sort_unstable();
    solutions.dedup();

    AuditStatistics {
        first_index,
        days_checked: results.len(),
        failures,
        mole_distribution,
        distinct_solutions: solutions.len(),
        total_time: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::ANSWERS_COUNT;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn embedded_rotation_passes() {
        let words = WordList::embedded().unwrap();
        let stats = run_audit(&words, CaseLocale::Default, 0, ANSWERS_COUNT, false);

        assert!(stats.passed(), "failures: {:?}", stats.failures);
        assert_eq!(stats.days_checked, ANSWERS_COUNT);
        assert_eq!(stats.mole_distribution.values().sum::<usize>(), ANSWERS_COUNT);
    }

    #[test]
    fn days_before_epoch_pass() {
        let words = WordList::embedded().unwrap();
        let stats = run_audit(&words, CaseLocale::Default, -30, 60, false);
        assert!(stats.passed());
        assert_eq!(stats.first_index, -30);
    }

    #[test]
    fn lossy_uppercase_answer_is_still_listed() {
        let words = WordList::new(words_from_slice(&["straße"]), Vec::new()).unwrap();
        let stats = run_audit(&words, CaseLocale::Default, 0, 3, false);

        assert!(stats.passed(), "failures: {:?}", stats.failures);
        assert_eq!(stats.distinct_solutions, 1);
    }

    #[test]
    fn exhausted_mole_is_a_failure() {
        let words = WordList::new(
            words_from_slice(&["crane", "abcdefghijklmnopqrstuvwxyz"]),
            Vec::new(),
        )
        .unwrap();
        let stats = run_audit(&words, CaseLocale::Default, 0, 4, false);

        assert_eq!(stats.days_checked, 4);
        assert_eq!(stats.failures.len(), 2);
        assert!(
            stats
                .failures
                .iter()
                .all(|f| matches!(f, AuditFailure::NoMole { .. }))
        );
        assert_eq!(stats.distinct_solutions, 1);
    }
}
