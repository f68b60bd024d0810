//! Display functions for command results

use super::formatters::{colored_row, format_countdown};
use crate::commands::{AuditFailure, AuditStatistics, CheckResult, TodayReport};
use crate::core::RevealOutcome;
use colored::Colorize;

/// Print today's puzzle summary
///
/// The solution is only shown when `reveal` is set.
pub fn print_today(report: &TodayReport, reveal: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle #{}",
        report.solution_index.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("   Mole:        {}", report.mole.bright_magenta().bold());
    if reveal {
        println!("   Solution:    {}", report.solution.bright_green().bold());
    } else {
        println!("   Solution:    {}", "hidden (use --reveal)".bright_black());
    }
    if let Some(tomorrow) = report.tomorrow {
        println!("   Next puzzle: {}", tomorrow.format("%Y-%m-%d %H:%M UTC"));
    }
    println!("   Time left:   {}", format_countdown(report.remaining));
}

/// Print the result of checking a guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n   {}\n", colored_row(&result.word, &result.statuses));

    let tick = |ok: bool| if ok { "✓".green() } else { "✗".red() };

    println!(
        "   {} Length       {}/{}",
        tick(result.length == result.expected_length),
        result.length,
        result.expected_length
    );
    println!("   {} In word list", tick(result.in_word_list));
    match &result.reveal {
        RevealOutcome::NoViolation => println!("   {} Hard mode", tick(true)),
        violation => println!("   {} Hard mode    {violation}", tick(false)),
    }

    println!();
    if result.winning {
        println!("{}", "✅ That's today's word!".green().bold());
    } else if result.is_acceptable() {
        println!("{}", "Accepted, but not the answer".bright_white());
    } else {
        println!("{}", "❌ This guess would be rejected".red().bold());
    }
}

/// First and last index of a run of `days` days, if there are any
fn day_range(first_index: i64, days: usize) -> Option<(i64, i64)> {
    let span = i64::try_from(days).ok()?.checked_sub(1)?;
    if span < 0 {
        return None;
    }
    Some((first_index, first_index.saturating_add(span)))
}

/// Print audit statistics
pub fn print_audit_statistics(stats: &AuditStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SCHEDULE AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    match day_range(stats.first_index, stats.days_checked) {
        Some((first, last)) => {
            println!("\n📅 Days {first}..={last} ({} days)", stats.days_checked);
        }
        None => println!("\n📅 No days checked"),
    }
    println!("   Distinct solutions: {}", stats.distinct_solutions);
    println!("   Time taken:         {:.2}s", stats.total_time.as_secs_f64());

    println!("\n📈 {}", "Mole distribution:".bright_cyan().bold());
    let mut moles: Vec<(&String, &usize)> = stats.mole_distribution.iter().collect();
    moles.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (mole, count) in moles {
        let pct = (*count as f64 / stats.days_checked.max(1) as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        println!("   {mole}: {} {count:4} ({pct:5.1}%)", "█".repeat(bar_width).green());
    }

    println!();
    if stats.passed() {
        println!("{}", "✅ All invariants hold".green().bold());
        return;
    }

    println!(
        "{}",
        format!("❌ {} failures", stats.failures.len()).red().bold()
    );
    for failure in stats.failures.iter().take(20) {
        match failure {
            AuditFailure::SolutionNotInList { index, solution } => {
                println!("   day {index}: {solution} is not in the answer list");
            }
            AuditFailure::MoleInSolution {
                index,
                mole,
                solution,
            } => println!("   day {index}: mole {mole} appears in {solution}"),
            AuditFailure::NoMole { index, error } => println!("   day {index}: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_range_bounds() {
        assert_eq!(day_range(5, 3), Some((5, 7)));
        assert_eq!(day_range(-2, 1), Some((-2, -2)));
        assert_eq!(day_range(5, 0), None);
        assert_eq!(day_range(i64::MAX, 2), Some((i64::MAX, i64::MAX)));
    }
}
