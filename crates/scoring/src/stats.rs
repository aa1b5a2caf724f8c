//! Distribution statistics over efficiency scores.

use leverage_core::{round_to, Activity, TierDistribution};
use serde::{Deserialize, Serialize};
use crate::formula::score;
use crate::tier::{tier_for, GOOD_THRESHOLD, MODERATE_THRESHOLD};

/// Summary of a collection of activities.
///
/// `total` counts every input. All other figures only consider activities
/// with a non-zero score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyStats {
    /// Number of activities given, including zero scores
    pub total: usize,
    /// Mean non-zero score, rounded to 2 decimals
    pub average: f64,
    /// Element at `n / 2` of the ascending non-zero scores
    pub median: f64,
    /// Best non-zero score
    pub highest: f64,
    /// Worst non-zero score
    pub lowest: f64,
    /// Non-zero scores of 10 or more
    pub high_efficiency_count: usize,
    /// Non-zero scores below 5
    pub low_efficiency_count: usize,
    /// Non-zero scores per tier
    pub distribution: TierDistribution,
}

/// Compute statistics for `activities`. Never fails; empty or all-zero
/// input yields zeros.
pub fn stats(activities: &[Activity]) -> EfficiencyStats {
    let mut scores: Vec<f64> = activities
        .iter()
        .map(score)
        .filter(|s| *s > 0.0)
        .collect();

    if scores.is_empty() {
        return EfficiencyStats {
            total: activities.len(),
            ..Default::default()
        };
    }

    scores.sort_by(|a, b| a.total_cmp(b));

    let n = scores.len();
    let sum: f64 = scores.iter().sum();

    let mut distribution = TierDistribution::default();
    for s in &scores {
        distribution.record(tier_for(*s));
    }

    EfficiencyStats {
        total: activities.len(),
        average: round_to(sum / n as f64, 2),
        median: scores[n / 2],
        highest: scores[n - 1],
        lowest: scores[0],
        high_efficiency_count: scores.iter().filter(|s| **s >= GOOD_THRESHOLD).count(),
        low_efficiency_count: scores.iter().filter(|s| **s < MODERATE_THRESHOLD).count(),
        distribution,
    }
}
