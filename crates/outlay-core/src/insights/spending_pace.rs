//! Spending Pace Rule
//!
//! Reports the last 7 days of spending and its daily average, and suggests
//! a daily limit when the average runs above the configured threshold.

use crate::models::{InsightIcon, InsightItem};
use crate::periods::Period;
use crate::slices::round2;

use super::engine::{Rule, RuleContext};
use super::types::RuleKind;

/// Days the pace is averaged over
const PACE_DAYS: f64 = 7.0;

pub struct SpendingPaceRule;

impl Rule for SpendingPaceRule {
    fn kind(&self) -> RuleKind {
        RuleKind::SpendingPace
    }

    fn name(&self) -> &'static str {
        "Spending Pace"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<InsightItem> {
        let period = Period::Last7Days;
        let total = ctx.aggregator.total_expense(period.range(ctx.now));
        if total <= 0.0 {
            return None;
        }

        let daily = total / PACE_DAYS;
        let limit = ctx.config.thresholds.pace_daily_limit;
        let summary = format!(
            "You spent {} in the last 7 days, about {} per day.",
            ctx.money(round2(total)),
            ctx.money(round2(daily))
        );

        let insight = if daily > limit {
            InsightItem::new(
                period.label(),
                format!(
                    "{} Consider setting a daily spending limit of {} to slow down.",
                    summary,
                    ctx.money(limit)
                ),
                InsightIcon::Warning,
            )
        } else {
            InsightItem::new(
                period.label(),
                format!("{} Your spending pace looks healthy, keep it up!", summary),
                InsightIcon::CheckCircle,
            )
        };

        Some(insight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Aggregator;
    use crate::config::AnalyticsConfig;
    use crate::models::Transaction;
    use chrono::NaiveDate;

    fn tx(amount: f64, value_date: &str) -> Transaction {
        Transaction {
            id: 1,
            amount,
            currency: "EUR".to_string(),
            value_date: value_date.to_string(),
            transaction_date: None,
            category: "Food".to_string(),
            description: String::new(),
            kind_label: None,
        }
    }

    fn evaluate(txs: &[Transaction]) -> Option<InsightItem> {
        let now = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let aggregator = Aggregator::new(txs);
        let config = AnalyticsConfig::default();
        SpendingPaceRule.evaluate(&RuleContext::new(now, &aggregator, &config))
    }

    #[test]
    fn test_high_pace_warns() {
        // 420 / 7 = 60 per day
        let insight = evaluate(&[tx(-420.0, "2024-03-18")]).unwrap();
        assert_eq!(insight.icon, InsightIcon::Warning);
        assert_eq!(insight.period, "Last 7 days");
        assert!(insight.text.contains("420 EUR"));
        assert!(insight.text.contains("60 EUR per day"));
        assert!(insight.text.contains("daily spending limit"));
    }

    #[test]
    fn test_low_pace_affirms() {
        let insight = evaluate(&[tx(-70.0, "2024-03-20")]).unwrap();
        assert_eq!(insight.icon, InsightIcon::CheckCircle);
        assert!(insight.text.contains("10 EUR per day"));
    }

    #[test]
    fn test_exactly_at_limit_is_not_a_warning() {
        let insight = evaluate(&[tx(-350.0, "2024-03-19")]).unwrap();
        assert_eq!(insight.icon, InsightIcon::CheckCircle);
    }

    #[test]
    fn test_no_recent_spending() {
        assert!(evaluate(&[]).is_none());
        assert!(evaluate(&[tx(500.0, "2024-03-19")]).is_none());
        assert!(evaluate(&[tx(-500.0, "2024-03-01")]).is_none());
    }
}
