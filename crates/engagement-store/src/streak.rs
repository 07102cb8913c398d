//! The consecutive-day streak rule.
//!
//! One rule serves both counters: the activity streak (fed by quest
//! events) and the conversation streak (fed by chat interactions). Each
//! is a (date, counter) pair that the rule advances independently.

use chrono::NaiveDate;

/// Advance a consecutive-day counter given the prior qualifying day.
///
/// - no prior day recorded: the streak starts at 1
/// - prior day is today: unchanged, already counted
/// - prior day is exactly yesterday: incremented
/// - anything else, including a gap of two or more days or a
///   future-dated prior from clock skew: reset to 1
///
/// The caller stamps the paired date field with the full "now"
/// timestamp after applying this rule.
pub fn advance_streak(prior_day: Option<NaiveDate>, today: NaiveDate, counter: u32) -> u32 {
    match prior_day {
        None => 1,
        Some(prior) if prior == today => counter,
        Some(prior) if prior.succ_opt() == Some(today) => counter.saturating_add(1),
        Some(_) => 1,
    }
}
