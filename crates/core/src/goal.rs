//! Goal model - an objective with recorded progress and an optional ideal path.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use crate::id::GoalId;
use crate::milestone::IdealPath;
use crate::Time;

/// A goal the user is working toward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Unique identifier
    #[serde(default)]
    pub id: GoalId,

    /// Goal title
    pub title: String,

    /// Detailed description
    #[serde(default)]
    pub description: String,

    /// Actual progress recorded so far (0-100)
    #[serde(default)]
    pub current_progress: f64,

    /// Planned trajectory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_path: Option<IdealPath>,

    /// When created
    #[serde(default = "Utc::now")]
    pub created_at: Time,
}

impl Goal {
    /// Create a goal with no progress and no path.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: GoalId::new(),
            title: title.into(),
            description: String::new(),
            current_progress: 0.0,
            ideal_path: None,
            created_at: Utc::now(),
        }
    }

    /// Attach an ideal path.
    pub fn with_ideal_path(mut self, path: IdealPath) -> Self {
        self.ideal_path = Some(path);
        self
    }

    /// Set recorded progress.
    pub fn with_progress(mut self, progress: f64) -> Self {
        self.current_progress = progress;
        self
    }
}
