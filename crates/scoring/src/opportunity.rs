//! Opportunity-cost analysis.
//!
//! Compares a low-leverage activity against a pool of stronger ones and
//! estimates how much impact was left on the table:
//! - Alternatives must beat the current score by more than 1.5x
//! - Forgone impact assumes the best alternative repeated in the same time
//! - Each alternative explains itself with a short reasoning string

use leverage_core::{round_to, Activity, Tier};
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::formula::{score, IMPACT_MULTIPLIER};
use crate::quadrant::{classify_quadrant, Quadrant};
use crate::tier::tier_for;

/// An alternative must score strictly above `current * MATERIALLY_BETTER_FACTOR`.
pub const MATERIALLY_BETTER_FACTOR: f64 = 1.5;

/// Efficiency multiple at which the reasoning calls an alternative out as
/// much more efficient.
const STRONG_MULTIPLE: f64 = 2.0;

/// Configuration for the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerConfig {
    /// Maximum alternatives reported
    pub max_alternatives: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self { max_alternatives: 3 }
    }
}

/// A better use of the same time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    /// The candidate activity
    pub activity: Activity,
    /// Its efficiency score
    pub efficiency: f64,
    /// Its tier
    pub tier: Tier,
    /// `efficiency - current_efficiency`, 2 decimals
    pub improvement_potential: f64,
    /// `efficiency / current_efficiency`; `None` when the current score is zero
    pub efficiency_multiple: Option<f64>,
    /// Why this is better
    pub reasoning: String,
}

/// Figures behind the opportunity cost.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityMetrics {
    /// Efficiency of the top alternative
    pub best_alternative_efficiency: f64,
    /// Best alternative minus current efficiency
    pub efficiency_gap: f64,
    /// Hours spent on the current activity
    pub time_invested_hours: f64,
    /// Times the best alternative fits into that time
    pub repetitions: u32,
    /// Impact had the best alternative been repeated
    pub potential_impact: f64,
    /// Impact actually delivered
    pub actual_impact: f64,
}

/// Result of [`analyze`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityCostReport {
    /// Score of the activity under review
    pub current_efficiency: f64,
    /// Better candidates, best first
    pub alternatives: Vec<Alternative>,
    /// Impact forgone, never negative, 2 decimals
    pub opportunity_cost: f64,
    /// `alternatives` non-empty and `opportunity_cost > 0`
    pub has_opportunity_cost: bool,
    /// Supporting figures; absent when no alternative qualified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<OpportunityMetrics>,
}

/// Compare `current` against `pool` and estimate the impact forgone.
pub fn analyze(
    current: &Activity,
    pool: &[Activity],
    max_alternatives: usize,
) -> OpportunityCostReport {
    let current_efficiency = score(current);
    let threshold = current_efficiency * MATERIALLY_BETTER_FACTOR;

    let mut better: Vec<(&Activity, f64)> = pool
        .iter()
        .map(|candidate| (candidate, score(candidate)))
        .filter(|(_, efficiency)| *efficiency > threshold)
        .collect();

    better.sort_by(|a, b| b.1.total_cmp(&a.1));
    better.truncate(max_alternatives);

    let Some(&(best, best_efficiency)) = better.first() else {
        debug!(current_efficiency, pool = pool.len(), "No materially better alternatives");
        return OpportunityCostReport {
            current_efficiency,
            ..Default::default()
        };
    };

    let time_invested_hours = current.duration_hours();
    let repetitions = (time_invested_hours / best.duration_hours()).floor().max(0.0);
    let potential_impact = repetitions * best.impact * IMPACT_MULTIPLIER;
    let actual_impact = current.impact * IMPACT_MULTIPLIER;
    let opportunity_cost = round_to((potential_impact - actual_impact).max(0.0), 2);

    let alternatives: Vec<Alternative> = better
        .into_iter()
        .map(|(candidate, efficiency)| build_alternative(current, current_efficiency, candidate, efficiency))
        .collect();

    debug!(
        current_efficiency,
        best_efficiency,
        opportunity_cost,
        alternatives = alternatives.len(),
        "Opportunity cost estimated"
    );

    OpportunityCostReport {
        current_efficiency,
        has_opportunity_cost: opportunity_cost > 0.0,
        opportunity_cost,
        metrics: Some(OpportunityMetrics {
            best_alternative_efficiency: best_efficiency,
            efficiency_gap: round_to(best_efficiency - current_efficiency, 2),
            time_invested_hours: round_to(time_invested_hours, 2),
            repetitions: repetitions as u32,
            potential_impact: round_to(potential_impact, 2),
            actual_impact: round_to(actual_impact, 2),
        }),
        alternatives,
    }
}

/// Whether an activity is worth running through [`analyze`] at all.
///
/// True for LOW-tier activities, and for low-impact/high-effort ones
/// whatever their tier.
pub fn should_alert(activity: &Activity) -> bool {
    tier_for(score(activity)) == Tier::Low || classify_quadrant(activity) == Quadrant::Drain
}

fn build_alternative(
    current: &Activity,
    current_efficiency: f64,
    candidate: &Activity,
    efficiency: f64,
) -> Alternative {
    let efficiency_multiple = if current_efficiency > 0.0 {
        Some(round_to(efficiency / current_efficiency, 2))
    } else {
        None
    };

    Alternative {
        activity: candidate.clone(),
        efficiency,
        tier: tier_for(efficiency),
        improvement_potential: round_to(efficiency - current_efficiency, 2),
        efficiency_multiple,
        reasoning: reasoning(current, candidate, efficiency_multiple),
    }
}

fn reasoning(current: &Activity, candidate: &Activity, multiple: Option<f64>) -> String {
    let mut clauses = Vec::new();

    match multiple {
        Some(m) if m >= STRONG_MULTIPLE => clauses.push(format!("{m:.1}x more efficient")),
        None => clauses.push("delivers leverage where the current activity delivers none".to_string()),
        _ => {}
    }

    if candidate.impact > current.impact {
        clauses.push(format!("higher impact ({} vs {})", candidate.impact, current.impact));
    }

    if candidate.effort < current.effort {
        clauses.push(format!("lower effort ({} vs {})", candidate.effort, current.effort));
    }

    if candidate.duration_minutes < current.duration_minutes {
        clauses.push(format!(
            "takes less time ({} min vs {} min)",
            candidate.duration_minutes, current.duration_minutes
        ));
    }

    if clauses.is_empty() {
        return "Better return on the time invested".to_string();
    }

    let mut text = clauses.join(", ");
    if let Some(first) = text.get(0..1) {
        let upper = first.to_uppercase();
        text.replace_range(0..1, &upper);
    }
    text
}

/// Gated analyzer: only reviews activities that [`should_alert`] flags.
#[derive(Debug, Clone, Default)]
pub struct OpportunityCostAnalyzer {
    config: AnalyzerConfig,
}

impl OpportunityCostAnalyzer {
    /// Create an analyzer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze `current` if it warrants an alert, otherwise `None`.
    pub fn review(&self, current: &Activity, pool: &[Activity]) -> Option<OpportunityCostReport> {
        if !should_alert(current) {
            return None;
        }
        Some(analyze(current, pool, self.config.max_alternatives))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn act(name: &str, impact: f64, effort: f64, minutes: f64) -> Activity {
        Activity::new(name, impact, effort, minutes)
    }

    #[test]
    fn test_candidate_above_threshold_qualifies() {
        let current = act("meeting", 5.0, 5.0, 60.0);
        let pool = vec![act("deep work", 9.0, 2.0, 60.0)];

        let report = analyze(&current, &pool, 3);
        assert_eq!(report.current_efficiency, 10.0);
        assert_eq!(report.alternatives.len(), 1);

        let alt = &report.alternatives[0];
        assert_eq!(alt.efficiency, 18.0);
        assert_eq!(alt.improvement_potential, 8.0);
        assert_eq!(alt.tier, Tier::Excellent);

        // one repetition of 9 * 2 vs 5 * 2
        assert_eq!(report.opportunity_cost, 8.0);
        assert!(report.has_opportunity_cost);
        let metrics = report.metrics.unwrap();
        assert_eq!(metrics.repetitions, 1);
        assert_eq!(metrics.potential_impact, 18.0);
        assert_eq!(metrics.actual_impact, 10.0);
        assert_eq!(metrics.efficiency_gap, 8.0);
    }

    #[test]
    fn test_threshold_is_strict() {
        // current 10, candidate exactly 15
        let current = act("current", 5.0, 5.0, 60.0);
        let pool = vec![act("equalish", 7.5, 5.0, 60.0)];

        let report = analyze(&current, &pool, 3);
        assert!(report.alternatives.is_empty());
        assert!(!report.has_opportunity_cost);
        assert_eq!(report.opportunity_cost, 0.0);
        assert!(report.metrics.is_none());
    }

    #[test]
    fn test_alternatives_sorted_and_truncated() {
        let current = act("slow", 2.0, 6.0, 120.0); // 2.0
        let pool = vec![
            act("a", 4.0, 5.0, 60.0),  // 8
            act("b", 9.0, 5.0, 30.0),  // 36
            act("c", 6.0, 5.0, 60.0),  // 12
            act("d", 1.0, 5.0, 120.0), // 1, not better
        ];

        let report = analyze(&current, &pool, 2);
        let effs: Vec<f64> = report.alternatives.iter().map(|a| a.efficiency).collect();
        assert_eq!(effs, vec![36.0, 12.0]);

        // 2h / 0.5h = 4 repetitions of impact 9
        let metrics = report.metrics.unwrap();
        assert_eq!(metrics.repetitions, 4);
        assert_eq!(report.opportunity_cost, 4.0 * 18.0 - 4.0);
    }

    #[test]
    fn test_longer_alternative_yields_no_cost() {
        // best alternative takes longer than the current activity
        let current = act("quick", 2.0, 6.0, 30.0); // 8
        let pool = vec![act("long", 9.0, 3.0, 45.0)]; // 24

        let report = analyze(&current, &pool, 3);
        assert_eq!(report.alternatives.len(), 1);
        assert_eq!(report.opportunity_cost, 0.0);
        assert!(!report.has_opportunity_cost);
        assert_eq!(report.metrics.unwrap().repetitions, 0);
    }

    #[test]
    fn test_empty_pool() {
        let report = analyze(&act("x", 3.0, 7.0, 90.0), &[], 3);
        assert!(report.alternatives.is_empty());
        assert!(!report.has_opportunity_cost);
    }

    #[test]
    fn test_reasoning_clauses_in_order() {
        let current = act("meeting", 5.0, 5.0, 60.0);
        let pool = vec![act("deep work", 9.0, 2.0, 30.0)]; // 36

        let report = analyze(&current, &pool, 1);
        assert_eq!(
            report.alternatives[0].reasoning,
            "3.6x more efficient, higher impact (9 vs 5), lower effort (2 vs 5), takes less time (30 min vs 60 min)"
        );
    }

    #[test]
    fn test_reasoning_fallback() {
        // better only because of the ratio, which stays under 2x
        let current = act("current", 6.0, 3.0, 60.0); // 12
        let pool = vec![act("alt", 6.0, 3.0, 39.0)];  // 18.46

        let report = analyze(&current, &pool, 1);
        assert_eq!(report.alternatives.len(), 1);
        assert_eq!(
            report.alternatives[0].reasoning,
            "Takes less time (39 min vs 60 min)"
        );

        let clone = act("same", 6.0, 3.0, 60.0);
        let text = reasoning(&current, &clone, Some(1.0));
        assert_eq!(text, "Better return on the time invested");
    }

    #[test]
    fn test_zero_efficiency_current() {
        let current = act("untimed", 4.0, 8.0, 0.0);
        let pool = vec![act("alt", 5.0, 5.0, 60.0)];

        let report = analyze(&current, &pool, 3);
        assert_eq!(report.current_efficiency, 0.0);
        assert_eq!(report.alternatives.len(), 1);
        assert!(report.alternatives[0].efficiency_multiple.is_none());
        assert!(!report.has_opportunity_cost);
    }

    #[test]
    fn test_should_alert_quadrant_rule() {
        // 2 * 2 / 0.25h = 16, EXCELLENT tier, but low impact + high effort
        let activity = act("busywork", 2.0, 8.0, 15.0);
        assert_eq!(tier_for(score(&activity)), Tier::Excellent);
        assert!(should_alert(&activity));
    }

    #[test]
    fn test_should_alert_low_tier() {
        assert!(should_alert(&act("long", 6.0, 3.0, 240.0))); // 3.0
        assert!(!should_alert(&act("good", 8.0, 3.0, 60.0)));
    }

    #[test]
    fn test_analyzer_gates_on_should_alert() {
        let analyzer = OpportunityCostAnalyzer::new()
            .with_config(AnalyzerConfig { max_alternatives: 1 });
        let pool = vec![act("a", 9.0, 2.0, 30.0), act("b", 8.0, 2.0, 30.0)];

        assert!(analyzer.review(&act("good", 8.0, 3.0, 60.0), &pool).is_none());

        let report = analyzer.review(&act("drain", 2.0, 8.0, 60.0), &pool).unwrap();
        assert_eq!(report.alternatives.len(), 1);
        assert_eq!(analyzer.config().max_alternatives, 1);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = analyze(&act("m", 5.0, 5.0, 60.0), &[act("d", 9.0, 2.0, 60.0)], 3);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["currentEfficiency"], 10.0);
        assert_eq!(json["hasOpportunityCost"], true);
        assert_eq!(json["alternatives"][0]["improvementPotential"], 8.0);
    }
}
