//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Outlay - See where your money goes
#[derive(Parser)]
#[command(name = "outlay")]
#[command(about = "Expense analytics over exported bank transactions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Analytics config file (defaults to ~/.local/share/outlay/config/analytics.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where transactions come from
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Transaction file (bank-connections JSON, transaction list JSON, or CSV)
    #[arg(short, long)]
    pub file: PathBuf,

    /// File format: bank_connections, transactions, csv (auto-detected if not specified)
    #[arg(long)]
    pub format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Category breakdown, month comparison and insights
    Analyze {
        #[command(flatten)]
        source: SourceArgs,

        /// Period for the category breakdown: current-month, previous-month, last-7-days, last-30-days
        #[arg(short, long, default_value = "current-month")]
        period: String,

        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        now: Option<String>,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// List distinct categories with their group and icon
    Categories {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// List transactions, optionally filtered
    Transactions {
        #[command(flatten)]
        source: SourceArgs,

        /// Only this category (exact match)
        #[arg(long)]
        category: Option<String>,

        /// Direction: debit, credit or all
        #[arg(short, long, default_value = "debit")]
        kind: String,

        /// Maximum number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show the effective analytics configuration
    Config {
        /// Only print the config file path
        #[arg(long)]
        path: bool,
    },
}
