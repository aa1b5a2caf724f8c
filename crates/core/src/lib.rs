//! Leverage core data models.
//!
//! Activities, their scored form, tiers, goals and the milestone paths
//! that progress is measured against. Everything here is plain data;
//! the computations live in `leverage-scoring` and `leverage-progress`.

#![warn(missing_docs)]

// Core identities
mod id;

// Activities and scoring vocabulary
mod activity;
mod tier;

// Goals and planned trajectories
mod goal;
mod milestone;

// Re-exports
pub use id::*;

pub use activity::{Activity, ScoredActivity};
pub use tier::{Tier, TierInfo, TierDistribution};

pub use goal::Goal;
pub use milestone::{Milestone, IdealPath, PathMetadata, sort_by_date};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;

/// Round half away from zero to `places` decimals.
///
/// Used for every 2-decimal figure the scoring layer reports.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
