//! Activity model - a unit of work the user reports, plus its scored form.

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};
use crate::id::ActivityId;
use crate::tier::Tier;
use crate::Time;

/// An activity submitted by the user.
///
/// `impact` and `effort` are meant to be in 1..=10 and `duration_minutes`
/// positive, but nothing here enforces that. Missing or `null` numeric
/// fields deserialize as zero, which scores as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Unique identifier
    #[serde(default)]
    pub id: ActivityId,

    /// Free-text description
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Impact rating
    #[serde(default, deserialize_with = "null_as_default")]
    pub impact: f64,

    /// Effort rating
    #[serde(default, deserialize_with = "null_as_default")]
    pub effort: f64,

    /// Time spent, in minutes
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_minutes: f64,

    /// When recorded
    #[serde(default = "Utc::now", deserialize_with = "null_as_now")]
    pub created_at: Time,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_now<'de, D>(deserializer: D) -> Result<Time, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Time>::deserialize(deserializer)?.unwrap_or_else(Utc::now))
}

impl Activity {
    /// Create a new activity recorded now.
    pub fn new(
        description: impl Into<String>,
        impact: f64,
        effort: f64,
        duration_minutes: f64,
    ) -> Self {
        Self {
            id: ActivityId::new(),
            description: description.into(),
            impact,
            effort,
            duration_minutes,
            created_at: Utc::now(),
        }
    }

    /// Duration in hours.
    pub fn duration_hours(&self) -> f64 {
        self.duration_minutes / 60.0
    }
}

/// An activity with its efficiency score and tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredActivity {
    /// The underlying activity
    #[serde(flatten)]
    pub activity: Activity,

    /// Leverage score, rounded to 2 decimals
    pub efficiency: f64,

    /// Tier of `efficiency`
    pub tier: Tier,

    /// 1-based position, set only by ranking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_fields_deserialize_as_defaults() {
        let json = r#"{
            "description": null,
            "impact": null,
            "effort": null,
            "durationMinutes": null,
            "createdAt": null
        }"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.description, "");
        assert_eq!(activity.impact, 0.0);
        assert_eq!(activity.effort, 0.0);
        assert_eq!(activity.duration_minutes, 0.0);
    }

    #[test]
    fn test_missing_fields_deserialize_as_defaults() {
        let activity: Activity = serde_json::from_str(r#"{"impact": 6}"#).unwrap();
        assert_eq!(activity.impact, 6.0);
        assert_eq!(activity.duration_minutes, 0.0);
        assert_eq!(activity.duration_hours(), 0.0);
    }
}
