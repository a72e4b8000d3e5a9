//! Outlay CLI - Expense analytics
//!
//! Usage:
//!   outlay analyze --file tx.json               Category breakdown and insights
//!   outlay categories --file tx.json            Distinct categories
//!   outlay transactions --file tx.csv --kind all
//!   outlay config                               Effective configuration

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Analyze {
            source,
            period,
            now,
            json,
        } => {
            commands::cmd_analyze(config_path, &source, &period, now.as_deref(), json).await
        }
        Commands::Categories { source } => commands::cmd_categories(config_path, &source).await,
        Commands::Transactions {
            source,
            category,
            kind,
            limit,
        } => {
            commands::cmd_transactions(&source, category.as_deref(), &kind, limit).await
        }
        Commands::Config { path } => commands::cmd_config(config_path, path),
    }
}
