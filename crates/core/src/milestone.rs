//! Milestones and ideal paths - the planned trajectory toward a goal.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use crate::id::ActivityId;
use crate::Time;

/// A single target on an ideal path: be `percentage` done by `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Target completion (0-100)
    pub percentage: f64,

    /// Target date
    pub date: NaiveDate,

    /// What should be done by then
    #[serde(default)]
    pub description: String,

    /// Activity that fulfilled this milestone, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<ActivityId>,
}

impl Milestone {
    /// Create a milestone.
    pub fn new(percentage: f64, date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            percentage,
            date,
            description: description.into(),
            activity_id: None,
        }
    }
}

/// Where an ideal path came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathMetadata {
    /// Generator that produced the path (planner name, "manual", ...)
    #[serde(default)]
    pub generated_by: String,

    /// Generator confidence (0.0-1.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    /// When the path was created
    #[serde(default = "Utc::now")]
    pub created_at: Time,
}

impl Default for PathMetadata {
    fn default() -> Self {
        Self {
            generated_by: "manual".to_string(),
            confidence: None,
            created_at: Utc::now(),
        }
    }
}

/// Planned trajectory toward a goal.
///
/// Milestones are expected to be non-decreasing in percentage as dates
/// advance. That is assumed, not checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdealPath {
    /// Milestones, in any order
    #[serde(default)]
    pub milestones: Vec<Milestone>,

    /// Provenance
    #[serde(default)]
    pub metadata: PathMetadata,
}

impl IdealPath {
    /// Create a path from milestones.
    pub fn new(milestones: Vec<Milestone>) -> Self {
        Self {
            milestones,
            metadata: PathMetadata::default(),
        }
    }

    /// Milestones sorted ascending by date. Same-day milestones keep their
    /// stored order.
    pub fn sorted_milestones(&self) -> Vec<&Milestone> {
        sort_by_date(&self.milestones)
    }

    /// Whether there is anything to compare against.
    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty()
    }
}

/// Sort milestone references ascending by date (stable).
pub fn sort_by_date(milestones: &[Milestone]) -> Vec<&Milestone> {
    let mut sorted: Vec<&Milestone> = milestones.iter().collect();
    sorted.sort_by_key(|m| m.date);
    sorted
}
