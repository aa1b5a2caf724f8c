//! Leverage scoring (Layer 2)
//!
//! Efficiency score, tiers, ranking, distribution statistics and
//! opportunity-cost analysis. Every function here is pure and never fails:
//! degenerate input scores as zero.

#![warn(missing_docs)]

pub mod formula;
pub mod tier;
pub mod ranker;
pub mod stats;
pub mod quadrant;
pub mod opportunity;

pub use formula::{score, score_activity, IMPACT_MULTIPLIER};
pub use tier::classify;
pub use ranker::{rank, rank_with, RankOptions};
pub use stats::{stats, EfficiencyStats};
pub use quadrant::{classify_quadrant, Quadrant};
pub use opportunity::{
    analyze, should_alert, Alternative, AnalyzerConfig, OpportunityCostAnalyzer,
    OpportunityCostReport, OpportunityMetrics, MATERIALLY_BETTER_FACTOR,
};
