//! The in-memory data set handed to the core.

use std::borrow::Cow;
use leverage_core::{Activity, Goal};
use serde::{Deserialize, Serialize};

/// Activities with at least this impact make up the default candidate pool.
pub const STRONG_IMPACT_MIN: f64 = 7.0;

/// Everything the core needs for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Activities to score
    #[serde(default)]
    pub activities: Vec<Activity>,

    /// Historically strong activities to compare against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_pool: Option<Vec<Activity>>,

    /// Goals with recorded progress and ideal paths
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl Snapshot {
    /// The explicit candidate pool, or else the activities with impact of
    /// at least [`STRONG_IMPACT_MIN`].
    pub fn candidate_pool(&self) -> Cow<'_, [Activity]> {
        match &self.candidate_pool {
            Some(pool) => Cow::Borrowed(pool.as_slice()),
            None => Cow::Owned(
                self.activities
                    .iter()
                    .filter(|a| a.impact >= STRONG_IMPACT_MIN)
                    .cloned()
                    .collect(),
            ),
        }
    }
}
