//! Leverage tiers - qualitative buckets over the efficiency score.

use serde::{Deserialize, Serialize};

/// Qualitative bucket derived from an efficiency score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    /// Score of 15 or more
    Excellent,
    /// Score in [10, 15)
    Good,
    /// Score in [5, 10)
    Moderate,
    /// Score below 5
    Low,
}

impl Tier {
    /// All tiers, best first.
    pub const ALL: [Tier; 4] = [Tier::Excellent, Tier::Good, Tier::Moderate, Tier::Low];

    /// Stable identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Excellent => "EXCELLENT",
            Tier::Good => "GOOD",
            Tier::Moderate => "MODERATE",
            Tier::Low => "LOW",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent leverage",
            Tier::Good => "Good leverage",
            Tier::Moderate => "Moderate leverage",
            Tier::Low => "Low leverage",
        }
    }

    /// Hint shown next to the tier by presentation layers.
    pub fn description(&self) -> &'static str {
        match self {
            Tier::Excellent => "High impact for the time spent. Do more of this.",
            Tier::Good => "Solid return on time. Worth keeping in the rotation.",
            Tier::Moderate => "Acceptable, but there is room to get more out of the hour.",
            Tier::Low => "Little impact for the time spent. Consider delegating or dropping it.",
        }
    }

    /// Bundle the tier with its presentation data.
    pub fn info(self) -> TierInfo {
        TierInfo {
            tier: self,
            label: self.label().to_string(),
            description: self.description().to_string(),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tier together with its label and descriptive hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierInfo {
    /// The tier
    pub tier: Tier,
    /// Human-readable label
    pub label: String,
    /// Descriptive hint
    pub description: String,
}

/// Per-tier counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierDistribution {
    /// Activities in [`Tier::Excellent`]
    pub excellent: usize,
    /// Activities in [`Tier::Good`]
    pub good: usize,
    /// Activities in [`Tier::Moderate`]
    pub moderate: usize,
    /// Activities in [`Tier::Low`]
    pub low: usize,
}

impl TierDistribution {
    /// Count one more activity in `tier`.
    pub fn record(&mut self, tier: Tier) {
        match tier {
            Tier::Excellent => self.excellent += 1,
            Tier::Good => self.good += 1,
            Tier::Moderate => self.moderate += 1,
            Tier::Low => self.low += 1,
        }
    }

    /// Count for a single tier.
    pub fn get(&self, tier: Tier) -> usize {
        match tier {
            Tier::Excellent => self.excellent,
            Tier::Good => self.good,
            Tier::Moderate => self.moderate,
            Tier::Low => self.low,
        }
    }

    /// Sum over all tiers.
    pub fn total(&self) -> usize {
        self.excellent + self.good + self.moderate + self.low
    }
}
