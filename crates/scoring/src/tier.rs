//! Tier classification.

use leverage_core::{Tier, TierInfo};

/// Lower bound (inclusive) of [`Tier::Excellent`].
pub const EXCELLENT_THRESHOLD: f64 = 15.0;
/// Lower bound (inclusive) of [`Tier::Good`].
pub const GOOD_THRESHOLD: f64 = 10.0;
/// Lower bound (inclusive) of [`Tier::Moderate`].
pub const MODERATE_THRESHOLD: f64 = 5.0;

/// Map a score to its tier.
pub fn classify(score: f64) -> TierInfo {
    tier_for(score).info()
}

pub(crate) fn tier_for(score: f64) -> Tier {
    if score >= EXCELLENT_THRESHOLD {
        Tier::Excellent
    } else if score >= GOOD_THRESHOLD {
        Tier::Good
    } else if score >= MODERATE_THRESHOLD {
        Tier::Moderate
    } else {
        Tier::Low
    }
}
