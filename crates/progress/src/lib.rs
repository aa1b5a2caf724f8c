//! Progress Tracking (Layer 2)
//!
//! Expected progress along an ideal path, and deviation of recorded
//! progress from it.
//!
//! Two benchmarks live here and are deliberately separate:
//! [`expected_progress_today`] interpolates linearly between milestones,
//! while [`deviation`] compares against the next milestone's target.

#![warn(missing_docs)]

pub mod interpolator;
pub mod tracker;

pub use interpolator::expected_progress_today;
pub use tracker::{
    deviation, goal_deviation, goal_report, DeviationReport, DeviationStatus, GoalProgressReport,
};
