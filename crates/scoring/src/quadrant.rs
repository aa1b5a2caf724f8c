//! Impact/effort quadrants.

use leverage_core::Activity;
use serde::{Deserialize, Serialize};

/// Impact at or above this is "high impact".
pub const HIGH_IMPACT_MIN: f64 = 5.0;
/// Effort above this is "high effort".
pub const HIGH_EFFORT_ABOVE: f64 = 5.0;

/// Position of an activity on the impact/effort grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// High impact, low effort
    QuickWin,
    /// High impact, high effort
    MajorProject,
    /// Low impact, low effort
    FillIn,
    /// Low impact, high effort
    Drain,
}

impl Quadrant {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Quadrant::QuickWin => "quick_win",
            Quadrant::MajorProject => "major_project",
            Quadrant::FillIn => "fill_in",
            Quadrant::Drain => "drain",
        }
    }
}

/// Place an activity on the impact/effort grid.
pub fn classify_quadrant(activity: &Activity) -> Quadrant {
    let high_impact = activity.impact >= HIGH_IMPACT_MIN;
    let high_effort = activity.effort > HIGH_EFFORT_ABOVE;

    match (high_impact, high_effort) {
        (true, false) => Quadrant::QuickWin,
        (true, true) => Quadrant::MajorProject,
        (false, false) => Quadrant::FillIn,
        (false, true) => Quadrant::Drain,
    }
}
