//! Analyze command implementation

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use outlay_core::{format_money, AnalysisResult, Analyzer, Period, Transaction};

use super::{load_config, load_source, truncate};
use crate::cli::SourceArgs;

/// Parse the --period argument
pub fn parse_period(period: &str) -> Result<Period> {
    period.parse().map_err(|e: String| anyhow::anyhow!(e))
}

/// Parse the --now argument
pub fn parse_now(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .context("Invalid --now date format (use YYYY-MM-DD)")
}

/// Run the analysis without printing; no --now means today's local date
pub fn run_analysis(
    analyzer: &Analyzer,
    transactions: &[Transaction],
    period: &str,
    now: Option<&str>,
) -> Result<AnalysisResult> {
    let period = parse_period(period)?;
    match now {
        Some(raw) => Ok(analyzer.analyze(transactions, parse_now(raw)?, period)),
        None => Ok(analyzer.analyze_today(transactions, period)),
    }
}

pub async fn cmd_analyze(
    config_path: Option<&Path>,
    source: &SourceArgs,
    period: &str,
    now: Option<&str>,
    json: bool,
) -> Result<()> {
    let analyzer = Analyzer::new(load_config(config_path)?);
    let transactions = load_source(source).await?;
    let result = run_analysis(&analyzer, &transactions, period, now)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_analysis(&result, &analyzer.config().currency);
    }

    Ok(())
}

fn print_analysis(result: &AnalysisResult, currency: &str) {
    let range = result.period.range(result.as_of);

    println!();
    println!("📊 Spending Analysis");
    println!("   As of {}", result.as_of);
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   This month:  {}",
        format_money(result.current_month_total, currency)
    );
    println!(
        "   Last month:  {}",
        format_money(result.last_month_total, currency)
    );
    if result.last_month_total > 0.0 {
        let arrow = if result.percentage_change > 0.0 { "↑" } else { "↓" };
        println!(
            "   Change:      {} {:.1}%",
            arrow,
            result.percentage_change.abs()
        );
    } else {
        println!("   Change:      \x1b[2mno spending last month\x1b[0m");
    }

    println!();
    println!(
        "🥧 Categories - {} ({} to {})",
        result.period.label(),
        range.start,
        range.end
    );
    println!("   ─────────────────────────────────────────────────────────────");

    if result.slices.is_empty() {
        println!("   No spending found in this period.");
    } else {
        println!("   {:28} │ {:>16} │ {:7}", "Category", "Amount", "Color");
        println!("   ─────────────────────────────┼──────────────────┼────────");
        for slice in &result.slices {
            println!(
                "   {:28} │ {:>16} │ {}",
                truncate(&slice.name, 28),
                format!("{} {}", slice.amount, currency),
                slice.color
            );
        }
    }

    println!();
    println!("💡 Insights");
    println!("   ─────────────────────────────────────────────────────────────");

    if result.insights.is_empty() {
        println!("   No specific recommendations, keep up the good work!");
    } else {
        for insight in &result.insights {
            println!("   [{}] {}", insight.icon, insight.period);
            println!("      {}", insight.text);
        }
    }
}
