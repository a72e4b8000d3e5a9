//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analyze` - Category breakdown, month comparison and insights
//! - `config` - Effective configuration
//! - `transactions` - Transaction and category listings
//!
//! Shared helpers for loading config and transaction files live here.

pub mod analyze;
pub mod config;
pub mod transactions;

// Re-export command functions for main.rs
pub use analyze::*;
pub use config::*;
pub use transactions::*;

use std::path::Path;

use anyhow::{Context, Result};
use outlay_core::{
    AnalyticsConfig, FileFormat, FileSource, Transaction, TransactionSource,
};

use crate::cli::SourceArgs;

/// Load config from an explicit path or the default override location
pub fn load_config(path: Option<&Path>) -> Result<AnalyticsConfig> {
    match path {
        Some(path) => AnalyticsConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => AnalyticsConfig::load().context("Failed to load config"),
    }
}

/// Read transactions from the file named on the command line
pub async fn load_source(source: &SourceArgs) -> Result<Vec<Transaction>> {
    let file_source = match source.format.as_deref() {
        Some(format) => {
            let format: FileFormat = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            FileSource::with_format(&source.file, format)
        }
        None => FileSource::new(&source.file),
    };

    file_source.fetch().await.with_context(|| {
        format!(
            "Failed to read transactions from {}",
            file_source.path().display()
        )
    })
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
