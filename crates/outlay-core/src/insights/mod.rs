//! Insight Engine - heuristic spending recommendations
//!
//! A small rule-based system over the aggregated expenses. Each rule looks
//! at one pattern and contributes at most one insight; rules run in a fixed
//! order and the output keeps that order.
//!
//! ## Built-in Rules
//!
//! - **Spending Pace** - 7-day total and daily average vs a daily limit
//! - **Weekday/Weekend** - per-day spend skew over the last 30 days
//! - **Dominant Category** - one category taking most of the month
//! - **Month Trend** - category projected well above last month
//!
//! ## Usage
//!
//! ```rust,ignore
//! use outlay_core::insights::{InsightEngine, RuleContext};
//!
//! let aggregator = Aggregator::new(&transactions);
//! let ctx = RuleContext::new(today, &aggregator, &config);
//! let insights = InsightEngine::new().generate(&ctx);
//! ```

pub mod dominant_category;
pub mod engine;
pub mod month_trend;
pub mod spending_pace;
pub mod types;
pub mod weekday_weekend;

pub use dominant_category::DominantCategoryRule;
pub use engine::{InsightEngine, Rule, RuleContext};
pub use month_trend::MonthTrendRule;
pub use spending_pace::SpendingPaceRule;
pub use types::RuleKind;
pub use weekday_weekend::WeekdayWeekendRule;
