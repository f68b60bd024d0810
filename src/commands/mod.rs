//! Command implementations

pub mod audit;
pub mod check;
pub mod play;
pub mod today;

pub use audit::{AuditFailure, AuditStatistics, run_audit};
pub use check::{CheckConfig, CheckResult, check_word};
pub use play::{PlayEnd, run_play};
pub use today::{TodayReport, today_report};
