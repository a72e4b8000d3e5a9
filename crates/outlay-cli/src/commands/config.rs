//! Config command implementation

use std::path::{Path, PathBuf};

use anyhow::Result;
use outlay_core::config::default_config_path;
use outlay_core::{InsightEngine, RuleKind};

use super::load_config;

/// The config file that would be read, if any location is known
pub fn config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(default_config_path)
}

/// Built-in rules in evaluation order: (config key, display name)
pub fn rule_rows() -> Vec<(RuleKind, &'static str)> {
    let engine = InsightEngine::new();
    engine
        .rule_kinds()
        .into_iter()
        .zip(engine.rule_names())
        .collect()
}

pub fn cmd_config(config_path: Option<&Path>, path_only: bool) -> Result<()> {
    let file = config_file(config_path);

    if path_only {
        match file {
            Some(path) => println!("{}", path.display()),
            None => println!("No config location available on this platform."),
        }
        return Ok(());
    }

    let config = load_config(config_path)?;

    println!();
    println!("⚙️  Analytics Configuration");
    match &file {
        Some(path) if path.exists() => println!("   Source: {}", path.display()),
        Some(path) => println!(
            "   Source: embedded defaults (no file at {})",
            path.display()
        ),
        None => println!("   Source: embedded defaults"),
    }
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Currency:  {}", config.currency);
    println!("   Palette:   {}", config.palette.join(", "));
    println!("   Taxonomy:  {} categories", config.taxonomy.len());

    println!();
    println!("   Rules:");
    for (kind, name) in rule_rows() {
        let status = if config.is_enabled(kind) {
            "\x1b[32menabled\x1b[0m"
        } else {
            "\x1b[2mdisabled\x1b[0m"
        };
        println!("     {:20} {:24} {}", kind.as_str(), name, status);
    }

    let t = &config.thresholds;
    println!();
    println!("   Thresholds:");
    println!("     {:20} {}", "pace_daily_limit", t.pace_daily_limit);
    println!("     {:20} {}", "skew_ratio", t.skew_ratio);
    println!("     {:20} {}", "dominant_share_pct", t.dominant_share_pct);
    println!("     {:20} {}", "trend_min_day", t.trend_min_day);
    println!("     {:20} {}", "trend_growth_ratio", t.trend_growth_ratio);
    println!("     {:20} {}", "trend_min_projected", t.trend_min_projected);

    Ok(())
}
