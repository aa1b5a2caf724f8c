//! Deviation tracking against the next milestone on an ideal path.

use chrono::NaiveDate;
use leverage_core::{Goal, GoalId, IdealPath, Milestone};
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::interpolator::expected_progress_today;

/// Where recorded progress stands relative to the ideal path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviationStatus {
    /// At or above the next milestone's target
    Ahead,
    /// Below the next milestone's target
    Behind,
    /// Every milestone date has passed
    Completed,
}

impl DeviationStatus {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviationStatus::Ahead => "ahead",
            DeviationStatus::Behind => "behind",
            DeviationStatus::Completed => "completed",
        }
    }
}

/// Recorded progress compared with the ideal path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviationReport {
    /// Ahead, behind or completed
    pub status: DeviationStatus,
    /// `current_progress - expected_progress`; positive means ahead
    pub deviation_percentage: f64,
    /// Progress recorded on the goal
    pub current_progress: f64,
    /// Target of the next milestone (100 once completed)
    pub expected_progress: f64,
    /// First milestone dated today or later
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_milestone: Option<Milestone>,
    /// Short human-readable summary
    pub message: String,
}

/// Compare a goal's recorded progress with `ideal_path` on `today`.
///
/// The benchmark is the target of the next milestone (the first one dated
/// today or later), not an interpolated value. Returns `None` when there is
/// no path or it has no milestones.
pub fn deviation(
    goal: &Goal,
    ideal_path: Option<&IdealPath>,
    today: NaiveDate,
) -> Option<DeviationReport> {
    let path = ideal_path.filter(|p| !p.is_empty())?;
    let current = goal.current_progress;

    let Some(next) = path.sorted_milestones().into_iter().find(|m| m.date >= today) else {
        debug!(goal = %goal.id, "All milestones have passed");
        return Some(DeviationReport {
            status: DeviationStatus::Completed,
            deviation_percentage: 0.0,
            current_progress: current,
            expected_progress: 100.0,
            next_milestone: None,
            message: "Ideal path complete: every milestone date has passed".to_string(),
        });
    };

    let expected = next.percentage;
    let deviation_percentage = current - expected;
    let status = if deviation_percentage >= 0.0 {
        DeviationStatus::Ahead
    } else {
        DeviationStatus::Behind
    };

    let message = match status {
        DeviationStatus::Ahead if deviation_percentage == 0.0 => format!(
            "On track for '{}' ({}% by {})",
            next.description, expected, next.date
        ),
        DeviationStatus::Ahead => format!(
            "{}% ahead of '{}' ({}% by {})",
            deviation_percentage, next.description, expected, next.date
        ),
        _ => format!(
            "{}% behind '{}' ({}% by {})",
            -deviation_percentage, next.description, expected, next.date
        ),
    };

    Some(DeviationReport {
        status,
        deviation_percentage,
        current_progress: current,
        expected_progress: expected,
        next_milestone: Some(next.clone()),
        message,
    })
}

/// [`deviation`] against the goal's own ideal path.
pub fn goal_deviation(goal: &Goal, today: NaiveDate) -> Option<DeviationReport> {
    deviation(goal, goal.ideal_path.as_ref(), today)
}

/// Both progress benchmarks for one goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgressReport {
    /// Goal identifier
    pub goal_id: GoalId,
    /// Goal title
    pub title: String,
    /// Interpolated expectation for today; `None` without a path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_progress_today: Option<f64>,
    /// Next-milestone deviation; `None` without a path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deviation: Option<DeviationReport>,
}

/// Build the progress report for a goal.
pub fn goal_report(goal: &Goal, today: NaiveDate) -> GoalProgressReport {
    let expected = goal
        .ideal_path
        .as_ref()
        .filter(|p| !p.is_empty())
        .map(|p| expected_progress_today(&p.milestones, today));

    GoalProgressReport {
        goal_id: goal.id,
        title: goal.title.clone(),
        expected_progress_today: expected,
        deviation: goal_deviation(goal, today),
    }
}
