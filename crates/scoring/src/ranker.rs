//! Ranking activities by efficiency.

use leverage_core::{Activity, ScoredActivity};
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::formula::score_activity;

/// Options for [`rank_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankOptions {
    /// Maximum number of ranked activities returned
    pub limit: usize,
}

impl RankOptions {
    /// Create options with the default limit.
    pub fn new() -> Self {
        Self { limit: 10 }
    }

    /// Set the limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl Default for RankOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Rank activities by efficiency, best first.
///
/// Zero-score activities are dropped. Equal scores keep their input order.
/// Ranks run 1..=k with no gaps, k <= `limit`.
pub fn rank(activities: &[Activity], limit: usize) -> Vec<ScoredActivity> {
    let mut scored: Vec<ScoredActivity> = activities
        .iter()
        .map(score_activity)
        .filter(|s| s.efficiency > 0.0)
        .collect();

    let dropped = activities.len() - scored.len();
    if dropped > 0 {
        debug!(dropped, "Skipping activities with zero efficiency");
    }

    // sort_by is stable, so ties stay in input order
    scored.sort_by(|a, b| b.efficiency.total_cmp(&a.efficiency));
    scored.truncate(limit);

    for (i, s) in scored.iter_mut().enumerate() {
        s.rank = Some(i + 1);
    }

    scored
}

/// [`rank`] driven by [`RankOptions`].
pub fn rank_with(activities: &[Activity], options: &RankOptions) -> Vec<ScoredActivity> {
    rank(activities, options.limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(name: &str, impact: f64, minutes: f64) -> Activity {
        Activity::new(name, impact, 5.0, minutes)
    }

    #[test]
    fn test_rank_orders_descending_with_contiguous_ranks() {
        let activities = vec![
            activity("low", 2.0, 120.0),
            activity("high", 9.0, 30.0),
            activity("mid", 6.0, 60.0),
        ];

        let ranked = rank(&activities, 10);
        let names: Vec<&str> = ranked.iter().map(|s| s.activity.description.as_str()).collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
        let ranks: Vec<usize> = ranked.iter().filter_map(|s| s.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_rank_respects_limit() {
        let activities: Vec<Activity> = (1..=8)
            .map(|i| activity(&format!("a{i}"), i as f64, 60.0))
            .collect();

        let ranked = rank(&activities, 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].efficiency, 16.0);
        assert_eq!(ranked[2].rank, Some(3));
    }

    #[test]
    fn test_rank_drops_zero_scores() {
        let activities = vec![
            activity("no time", 8.0, 0.0),
            activity("no impact", 0.0, 60.0),
            activity("real", 5.0, 60.0),
        ];

        let ranked = rank(&activities, 10);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].activity.description, "real");
        assert_eq!(ranked[0].rank, Some(1));
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let activities = vec![
            activity("first", 5.0, 60.0),
            activity("second", 5.0, 60.0),
            activity("third", 5.0, 60.0),
        ];

        let ranked = rank(&activities, 10);
        let names: Vec<&str> = ranked.iter().map(|s| s.activity.description.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_rank_with_default_options() {
        let activities: Vec<Activity> = (0..15)
            .map(|i| activity(&format!("a{i}"), 5.0, 30.0 + i as f64))
            .collect();

        assert_eq!(RankOptions::default().limit, 10);
        assert_eq!(rank_with(&activities, &RankOptions::default()).len(), 10);
        assert_eq!(rank_with(&activities, &RankOptions::new().with_limit(0)).len(), 0);
    }
}
