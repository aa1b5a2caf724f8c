//! Efficiency score: impact delivered per hour spent.

use leverage_core::{round_to, Activity, ScoredActivity};
use crate::tier::tier_for;

/// Impact is doubled before normalizing by hours.
pub const IMPACT_MULTIPLIER: f64 = 2.0;

/// Compute the leverage score of an activity.
///
/// `(impact * 2) / hours`, rounded to 2 decimals. Returns `0.0` when impact
/// or duration is missing, zero, negative or not finite, so the result is
/// always finite and non-negative.
pub fn score(activity: &Activity) -> f64 {
    let impact = activity.impact;
    let minutes = activity.duration_minutes;

    if !impact.is_finite() || !minutes.is_finite() || impact <= 0.0 || minutes <= 0.0 {
        return 0.0;
    }

    let raw = (impact * IMPACT_MULTIPLIER) / (minutes / 60.0);
    if !raw.is_finite() {
        return 0.0;
    }

    round_to(raw, 2)
}

/// Score and classify an activity. The result carries no rank.
pub fn score_activity(activity: &Activity) -> ScoredActivity {
    let efficiency = score(activity);
    ScoredActivity {
        activity: activity.clone(),
        efficiency,
        tier: tier_for(efficiency),
        rank: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leverage_core::Tier;

    fn activity(impact: f64, minutes: f64) -> Activity {
        Activity::new("test", impact, 5.0, minutes)
    }

    #[test]
    fn test_score_known_values() {
        assert_eq!(score(&activity(8.0, 60.0)), 16.0);
        assert_eq!(score(&activity(9.0, 30.0)), 36.0);
        assert_eq!(score(&activity(7.0, 45.0)), 18.67);
    }

    #[test]
    fn test_score_zero_on_missing_inputs() {
        assert_eq!(score(&activity(0.0, 60.0)), 0.0);
        assert_eq!(score(&activity(5.0, 0.0)), 0.0);
        assert_eq!(score(&activity(5.0, -30.0)), 0.0);
        assert_eq!(score(&activity(-3.0, 60.0)), 0.0);
        assert_eq!(score(&activity(f64::NAN, 60.0)), 0.0);
        assert_eq!(score(&activity(5.0, f64::INFINITY)), 0.0);
    }

    #[test]
    fn test_score_monotonic() {
        let mut previous = f64::MAX;
        for minutes in [15.0, 30.0, 45.0, 60.0, 90.0, 240.0] {
            let s = score(&activity(6.0, minutes));
            assert!(s <= previous, "score rose from {previous} to {s} at {minutes} min");
            previous = s;
        }

        let mut previous = 0.0;
        for impact in 1..=10 {
            let s = score(&activity(impact as f64, 60.0));
            assert!(s >= previous);
            previous = s;
        }
    }

    #[test]
    fn test_score_activity_attaches_tier() {
        let scored = score_activity(&activity(8.0, 60.0));
        assert_eq!(scored.efficiency, 16.0);
        assert_eq!(scored.tier, Tier::Excellent);
        assert!(scored.rank.is_none());
    }
}
