//! Input range checks at the collaborator boundary.
//!
//! The core scores whatever it is given; these checks only report values
//! outside their intended ranges so a loader can log them.

use std::cmp::Ordering;

use leverage_core::{sort_by_date, Activity, IdealPath};
use serde::{Deserialize, Serialize};
use crate::snapshot::Snapshot;

const RATING_RANGE: std::ops::RangeInclusive<f64> = 1.0..=10.0;
const PERCENT_RANGE: std::ops::RangeInclusive<f64> = 0.0..=100.0;

/// A value outside its intended range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// What the value belongs to (activity description, goal title)
    pub subject: String,
    /// Field name
    pub field: String,
    /// What is wrong
    pub message: String,
}

impl ValidationIssue {
    fn new(subject: &str, field: &str, message: impl Into<String>) -> Self {
        Self {
            subject: subject.to_string(),
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Check impact, effort and duration of an activity.
pub fn validate_activity(activity: &Activity) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let subject = activity.description.as_str();

    if !RATING_RANGE.contains(&activity.impact) {
        issues.push(ValidationIssue::new(
            subject,
            "impact",
            format!("impact {} outside 1-10", activity.impact),
        ));
    }

    if !RATING_RANGE.contains(&activity.effort) {
        issues.push(ValidationIssue::new(
            subject,
            "effort",
            format!("effort {} outside 1-10", activity.effort),
        ));
    }

    // NaN is not greater than zero either
    if activity.duration_minutes.partial_cmp(&0.0) != Some(Ordering::Greater) {
        issues.push(ValidationIssue::new(
            subject,
            "durationMinutes",
            format!("duration {} is not positive; activity will score 0", activity.duration_minutes),
        ));
    }

    issues
}

/// Check milestone percentages and their ordering along the path.
pub fn validate_ideal_path(subject: &str, path: &IdealPath) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for m in &path.milestones {
        if !PERCENT_RANGE.contains(&m.percentage) {
            issues.push(ValidationIssue::new(
                subject,
                "milestones.percentage",
                format!("milestone on {} targets {}%, outside 0-100", m.date, m.percentage),
            ));
        }
    }

    let sorted = sort_by_date(&path.milestones);
    for pair in sorted.windows(2) {
        if pair[1].percentage < pair[0].percentage {
            issues.push(ValidationIssue::new(
                subject,
                "milestones.percentage",
                format!(
                    "target drops from {}% on {} to {}% on {}",
                    pair[0].percentage, pair[0].date, pair[1].percentage, pair[1].date
                ),
            ));
        }
    }

    issues
}

/// Run every check over a snapshot.
pub fn validate_snapshot(snapshot: &Snapshot) -> Vec<ValidationIssue> {
    let pool = snapshot.candidate_pool.iter().flatten();
    let mut issues: Vec<ValidationIssue> = snapshot
        .activities
        .iter()
        .chain(pool)
        .flat_map(validate_activity)
        .collect();

    for goal in &snapshot.goals {
        if let Some(path) = &goal.ideal_path {
            issues.extend(validate_ideal_path(&goal.title, path));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use leverage_core::{Goal, Milestone};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_activity_has_no_issues() {
        assert!(validate_activity(&Activity::new("ok", 5.0, 5.0, 30.0)).is_empty());
    }

    #[test]
    fn test_out_of_range_activity() {
        let issues = validate_activity(&Activity::new("bad", 12.0, 0.0, 0.0));
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["impact", "effort", "durationMinutes"]);
        assert!(issues.iter().all(|i| i.subject == "bad"));
    }

    #[test]
    fn test_nan_duration_is_flagged() {
        let issues = validate_activity(&Activity::new("nan", 5.0, 5.0, f64::NAN));
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_decreasing_path_is_flagged() {
        let path = IdealPath::new(vec![
            Milestone::new(60.0, date(2024, 1, 1), "a"),
            Milestone::new(40.0, date(2024, 2, 1), "b"),
            Milestone::new(120.0, date(2024, 3, 1), "c"),
        ]);

        let issues = validate_ideal_path("goal", &path);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().any(|i| i.message.contains("outside 0-100")));
        assert!(issues.iter().any(|i| i.message.contains("drops from 60%")));
    }

    #[test]
    fn test_validate_snapshot_covers_pool_and_goals() {
        let snapshot = Snapshot {
            activities: vec![Activity::new("ok", 5.0, 5.0, 30.0)],
            candidate_pool: Some(vec![Activity::new("pool", 11.0, 5.0, 30.0)]),
            goals: vec![Goal::new("g").with_ideal_path(IdealPath::new(vec![
                Milestone::new(-5.0, date(2024, 1, 1), "x"),
            ]))],
        };

        let issues = validate_snapshot(&snapshot);
        let subjects: Vec<&str> = issues.iter().map(|i| i.subject.as_str()).collect();
        assert_eq!(subjects, vec!["pool", "g"]);
    }
}
