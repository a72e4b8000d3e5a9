//! Outlay Core Library
//!
//! Client-side expense analytics over a list of bank transactions:
//! - Period boundaries (current/previous month, last 7/30 days)
//! - Expense aggregation per period and per category
//! - Pie-chart slices with stable palette colors
//! - Rule-based spending insights
//! - Category taxonomy for semantic grouping
//! - Transaction sources (bank-connection JSON, flat JSON, CSV)
//! - TOML configuration with embedded defaults

pub mod aggregate;
pub mod analysis;
pub mod config;
pub mod error;
pub mod insights;
pub mod models;
pub mod periods;
pub mod slices;
pub mod source;
pub mod taxonomy;

pub use aggregate::{Aggregator, CategoryTotals, WeekdaySplit};
pub use analysis::{analyze, Analyzer};
pub use config::{AnalyticsConfig, Thresholds};
pub use error::{Error, Result};
pub use insights::{InsightEngine, Rule, RuleContext, RuleKind};
pub use models::{
    AnalysisResult, CategorySlice, InsightIcon, InsightItem, MonthComparison, Transaction,
    TransactionKind,
};
pub use periods::{DateRange, Period};
pub use slices::{build_slices, format_amount, format_money};
pub use source::{
    distinct_categories, load_transactions, FileFormat, FileSource, StaticSource,
    TransactionFilter, TransactionSource,
};
pub use taxonomy::{CategoryGroup, CategoryTaxonomy};
