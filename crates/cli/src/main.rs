//! Leverage CLI - score activities and track progress from a JSON snapshot.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use leverage_core::{ScoredActivity, Tier};
use leverage_progress::{goal_report, DeviationStatus, GoalProgressReport};
use leverage_scoring::{
    rank_with, score_activity, stats, AnalyzerConfig, EfficiencyStats, OpportunityCostAnalyzer,
    OpportunityCostReport, RankOptions,
};
use leverage_storage::{JsonSnapshotSource, SnapshotSource};

#[derive(Parser)]
#[command(name = "leverage")]
#[command(about = "Activity leverage scoring and ideal-path tracking", long_about = None)]
struct Cli {
    /// Snapshot file to read
    #[arg(long, short, global = true, env = "LEVERAGE_SNAPSHOT", default_value = "leverage.json")]
    snapshot: PathBuf,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank activities by efficiency
    Rank {
        /// Maximum activities shown
        #[arg(long, default_value = "10")]
        limit: usize,
    },
    /// Efficiency statistics
    Stats,
    /// Opportunity cost of low-leverage activities
    Alerts {
        /// Alternatives listed per activity
        #[arg(long, default_value = "3")]
        max_alternatives: usize,
    },
    /// Progress against each goal's ideal path
    Progress {
        /// Evaluate as of this date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Alert {
    activity: ScoredActivity,
    report: OpportunityCostReport,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("Invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let source = JsonSnapshotSource::new(&cli.snapshot);
    let snapshot = source
        .load_snapshot()
        .await
        .with_context(|| format!("Failed to load snapshot {}", cli.snapshot.display()))?;

    match cli.command {
        Commands::Rank { limit } => {
            let ranked = rank_with(&snapshot.activities, &RankOptions::new().with_limit(limit));
            debug!(ranked = ranked.len(), "Ranking complete");

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                print_ranking(&ranked);
            }
        }
        Commands::Stats => {
            let summary = stats(&snapshot.activities);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_stats(&summary);
            }
        }
        Commands::Alerts { max_alternatives } => {
            let analyzer = OpportunityCostAnalyzer::new()
                .with_config(AnalyzerConfig { max_alternatives });
            let pool = snapshot.candidate_pool();

            let alerts: Vec<Alert> = snapshot
                .activities
                .iter()
                .filter_map(|activity| {
                    analyzer.review(activity, &pool).map(|report| Alert {
                        activity: score_activity(activity),
                        report,
                    })
                })
                .collect();
            info!(alerts = alerts.len(), pool = pool.len(), "Opportunity review complete");

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&alerts)?);
            } else {
                print_alerts(&alerts);
            }
        }
        Commands::Progress { today } => {
            let today = today.unwrap_or_else(|| Utc::now().date_naive());
            let reports: Vec<GoalProgressReport> =
                snapshot.goals.iter().map(|goal| goal_report(goal, today)).collect();

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                print_progress(&reports, today);
            }
        }
    }

    Ok(())
}

fn print_ranking(ranked: &[ScoredActivity]) {
    println!("Ranked activities ({})", ranked.len());
    for s in ranked {
        println!(
            "  #{:<3} {:>7.2} | {:<9} | {}",
            s.rank.unwrap_or_default(),
            s.efficiency,
            s.tier.as_str(),
            s.activity.description,
        );
    }
}

fn print_stats(summary: &EfficiencyStats) {
    println!("Efficiency statistics");
    println!("  Total activities: {}", summary.total);
    println!("  Average: {:.2}", summary.average);
    println!("  Median: {:.2}", summary.median);
    println!("  Highest: {:.2}", summary.highest);
    println!("  Lowest: {:.2}", summary.lowest);
    println!("  High efficiency (>= 10): {}", summary.high_efficiency_count);
    println!("  Low efficiency (< 5): {}", summary.low_efficiency_count);
    println!("  Distribution:");
    for tier in Tier::ALL {
        println!("    {:<9} {}", tier.as_str(), summary.distribution.get(tier));
    }
}

fn print_alerts(alerts: &[Alert]) {
    if alerts.is_empty() {
        println!("No low-leverage activities");
        return;
    }

    for alert in alerts {
        let report = &alert.report;
        println!(
            "{} ({:.2}, {})",
            alert.activity.activity.description,
            report.current_efficiency,
            alert.activity.tier.as_str(),
        );
        if report.has_opportunity_cost {
            println!("  Opportunity cost: {:.2} impact", report.opportunity_cost);
        }
        if report.alternatives.is_empty() {
            println!("  No materially better alternatives on record");
        }
        for alt in &report.alternatives {
            println!(
                "  -> {} ({:.2}, +{:.2}): {}",
                alt.activity.description, alt.efficiency, alt.improvement_potential, alt.reasoning,
            );
        }
    }
}

fn print_progress(reports: &[GoalProgressReport], today: NaiveDate) {
    println!("Goal progress as of {}", today);
    for report in reports {
        println!("  {}", report.title);
        match (&report.expected_progress_today, &report.deviation) {
            (Some(expected), Some(deviation)) => {
                println!("    Expected today (interpolated): {}%", expected);
                println!("    Current: {}%", deviation.current_progress);
                let status = match deviation.status {
                    DeviationStatus::Ahead => "AHEAD",
                    DeviationStatus::Behind => "BEHIND",
                    DeviationStatus::Completed => "COMPLETED",
                };
                println!("    Status: {} ({:+})", status, deviation.deviation_percentage);
                println!("    {}", deviation.message);
            }
            _ => println!("    No ideal path"),
        }
    }
}
