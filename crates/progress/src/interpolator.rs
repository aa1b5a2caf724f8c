//! Expected progress by linear interpolation between milestones.

use chrono::NaiveDate;
use leverage_core::{sort_by_date, Milestone};

/// Percentage the ideal path expects to be done on `today`.
///
/// - Between two milestones: linear in days, rounded to a whole percent
/// - On a milestone: that milestone's percentage, unrounded
/// - Before the first milestone (or no milestones): 0
/// - After the last milestone: 100
pub fn expected_progress_today(milestones: &[Milestone], today: NaiveDate) -> f64 {
    let sorted = sort_by_date(milestones);

    let next = sorted.iter().find(|m| m.date >= today);
    let prev = sorted.iter().rev().find(|m| m.date <= today);

    match (prev, next) {
        (Some(prev), Some(next)) => {
            let span = (next.date - prev.date).num_days();
            if span == 0 {
                return next.percentage;
            }
            let elapsed = (today - prev.date).num_days();
            let fraction = elapsed as f64 / span as f64;
            (prev.percentage + (next.percentage - prev.percentage) * fraction).round()
        }
        (None, Some(_)) => 0.0,
        (Some(_), None) => 100.0,
        (None, None) => 0.0,
    }
}
