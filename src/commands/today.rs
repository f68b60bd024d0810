//! Today's puzzle summary

use crate::daily::{Clock, DailyCache, IndexOffset, MS_IN_DAY, MoleError};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// What the `today` command reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayReport {
    pub solution_index: i64,
    pub solution: String,
    pub mole: String,
    pub tomorrow: Option<DateTime<Utc>>,
    /// Time left until the next puzzle
    pub remaining: Duration,
}

/// Build the report for the cache's current day
///
/// # Errors
/// Returns `MoleError` if today's mole letter cannot be chosen.
pub fn today_report<C: Clock, O: IndexOffset>(
    cache: &mut DailyCache<C, O>,
    now_ms: i64,
) -> Result<TodayReport, MoleError> {
    let puzzle = cache.current()?;

    // Clamped: with an offset the boundary can lie in the past or days ahead
    let remaining_ms = (puzzle.tomorrow - now_ms).clamp(0, MS_IN_DAY);

    Ok(TodayReport {
        solution_index: puzzle.solution_index,
        solution: puzzle.solution.clone(),
        mole: puzzle.mole.clone(),
        tomorrow: puzzle.tomorrow_utc(),
        remaining: Duration::from_millis(remaining_ms as u64),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CaseLocale;
    use crate::daily::{EPOCH_MS, FixedClock};
    use crate::wordlists::WordList;

    #[test]
    fn report_counts_down_to_rollover() {
        let now = EPOCH_MS + 10 * MS_IN_DAY + MS_IN_DAY / 4;
        let clock = FixedClock::new(now);
        let mut cache = DailyCache::new(
            WordList::embedded().unwrap(),
            CaseLocale::Default,
            &clock,
            0_i64,
        );

        let report = today_report(&mut cache, now).unwrap();
        assert_eq!(report.solution_index, 10);
        assert_eq!(report.remaining, Duration::from_millis((MS_IN_DAY * 3 / 4) as u64));
        assert!(!report.solution.contains(report.mole.as_str()));
    }

    #[test]
    fn remaining_is_clamped_with_offset() {
        let now = EPOCH_MS;
        let clock = FixedClock::new(now);
        let mut cache = DailyCache::new(
            WordList::embedded().unwrap(),
            CaseLocale::Default,
            &clock,
            -5_i64,
        );

        let report = today_report(&mut cache, now).unwrap();
        assert_eq!(report.solution_index, -5);
        assert_eq!(report.remaining, Duration::ZERO);
    }
}
