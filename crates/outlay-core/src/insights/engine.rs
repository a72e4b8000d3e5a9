//! Insight Engine - runs the rules in order and collects their output

use chrono::NaiveDate;

use crate::aggregate::Aggregator;
use crate::config::AnalyticsConfig;
use crate::models::InsightItem;

use super::types::RuleKind;
use super::{DominantCategoryRule, MonthTrendRule, SpendingPaceRule, WeekdayWeekendRule};

/// Inputs shared by every rule in one pass
pub struct RuleContext<'a> {
    /// Reference date for all periods
    pub now: NaiveDate,
    /// Expenses of the pass
    pub aggregator: &'a Aggregator<'a>,
    pub config: &'a AnalyticsConfig,
}

impl<'a> RuleContext<'a> {
    pub fn new(now: NaiveDate, aggregator: &'a Aggregator<'a>, config: &'a AnalyticsConfig) -> Self {
        Self {
            now,
            aggregator,
            config,
        }
    }

    /// Amount followed by the configured currency
    pub fn money(&self, amount: f64) -> String {
        crate::slices::format_money(amount, &self.config.currency)
    }
}

/// A single heuristic that may contribute one insight
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn kind(&self) -> RuleKind;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Inspect the aggregates and maybe produce an insight
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<InsightItem>;
}

/// Evaluates registered rules in registration order
pub struct InsightEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create a new insight engine with the built-in rules
    pub fn new() -> Self {
        let mut engine = Self::empty();

        engine.register(Box::new(SpendingPaceRule));
        engine.register(Box::new(WeekdayWeekendRule));
        engine.register(Box::new(DominantCategoryRule));
        engine.register(Box::new(MonthTrendRule));

        engine
    }

    /// Create an engine with no rules, for custom rule sets
    pub fn empty() -> Self {
        Self { rules: vec![] }
    }

    /// Register a rule; it runs after those already registered
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Run every enabled rule and collect insights in rule order
    pub fn generate(&self, ctx: &RuleContext<'_>) -> Vec<InsightItem> {
        let mut insights = Vec::new();

        for rule in &self.rules {
            if !ctx.config.is_enabled(rule.kind()) {
                tracing::debug!(
                    rule = rule.name(),
                    key = rule.kind().as_str(),
                    "Rule disabled by config"
                );
                continue;
            }

            let insight = rule.evaluate(ctx);
            tracing::debug!(
                rule = rule.name(),
                triggered = insight.is_some(),
                "Rule evaluated"
            );
            insights.extend(insight);
        }

        insights
    }

    /// Get list of registered rules
    pub fn rule_kinds(&self) -> Vec<RuleKind> {
        self.rules.iter().map(|r| r.kind()).collect()
    }

    /// Display names of registered rules, in evaluation order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }
}
