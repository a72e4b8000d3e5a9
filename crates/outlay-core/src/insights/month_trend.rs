//! Month Trend Rule
//!
//! Projects each current-month category linearly to a full month and
//! compares it with the same category last month. Only the first category
//! (in descending current-month order) that clears both the growth ratio
//! and the absolute floor is reported.
//!
//! Projections from the first days of a month are too noisy, so the rule
//! waits until `trend_min_day`.

use chrono::Datelike;

use crate::models::{InsightIcon, InsightItem};
use crate::periods::{days_in_month, Period};
use crate::slices::round2;

use super::engine::{Rule, RuleContext};
use super::types::RuleKind;

pub struct MonthTrendRule;

impl Rule for MonthTrendRule {
    fn kind(&self) -> RuleKind {
        RuleKind::MonthTrend
    }

    fn name(&self) -> &'static str {
        "Month Trend"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<InsightItem> {
        let thresholds = &ctx.config.thresholds;
        let day = ctx.now.day();
        if day < thresholds.trend_min_day {
            return None;
        }

        let current = ctx
            .aggregator
            .expense_by_category(Period::CurrentMonth.range(ctx.now));
        let previous = ctx
            .aggregator
            .expense_by_category(Period::PreviousMonth.range(ctx.now));
        let (day_f, month_days) = (f64::from(day), f64::from(days_in_month(ctx.now)));

        current.sorted_desc().into_iter().find_map(|(name, amount)| {
            let last = previous.get(name).filter(|last| *last > 0.0)?;
            let projected = amount / day_f * month_days;
            let increase = (projected / last - 1.0) * 100.0;
            if !increase.is_finite()
                || projected <= thresholds.trend_growth_ratio * last
                || projected <= thresholds.trend_min_projected
            {
                return None;
            }

            Some(InsightItem::new(
                Period::CurrentMonth.label(),
                format!(
                    "At this pace your {} spending will reach about {} this month, \
                     {:.0}% more than the {} you spent last month.",
                    name,
                    ctx.money(round2(projected)),
                    increase,
                    ctx.money(round2(last))
                ),
                InsightIcon::TrendingUp,
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Aggregator;
    use crate::config::AnalyticsConfig;
    use crate::models::Transaction;
    use chrono::NaiveDate;

    fn tx(amount: f64, category: &str, value_date: &str) -> Transaction {
        Transaction {
            id: 1,
            amount,
            currency: "EUR".to_string(),
            value_date: value_date.to_string(),
            transaction_date: None,
            category: category.to_string(),
            description: String::new(),
            kind_label: None,
        }
    }

    // April has 30 days; on the 15th the projection doubles the amount so far.
    fn evaluate_on(day: u32, txs: &[Transaction]) -> Option<InsightItem> {
        let now = NaiveDate::from_ymd_opt(2024, 4, day).unwrap();
        let aggregator = Aggregator::new(txs);
        let config = AnalyticsConfig::default();
        MonthTrendRule.evaluate(&RuleContext::new(now, &aggregator, &config))
    }

    #[test]
    fn test_projected_rise_fires() {
        // projected 150 * 2 = 300 > 1.3 * 200 and > 100
        let txs = [
            tx(-150.0, "Food", "2024-04-03"),
            tx(-200.0, "Food", "2024-03-10"),
        ];
        let insight = evaluate_on(15, &txs).unwrap();
        assert_eq!(insight.icon, InsightIcon::TrendingUp);
        assert!(insight.text.contains("Food spending will reach about 300 EUR"));
        assert!(insight.text.contains("50% more than the 200 EUR"));
    }

    #[test]
    fn test_before_min_day_is_silent() {
        let txs = [
            tx(-150.0, "Food", "2024-04-03"),
            tx(-20.0, "Food", "2024-03-10"),
        ];
        assert!(evaluate_on(9, &txs).is_none());
        assert!(evaluate_on(10, &txs).is_some());
    }

    #[test]
    fn test_small_projection_is_silent() {
        // projected 40 * 2 = 80 is below the 100 floor
        let txs = [tx(-40.0, "Fun", "2024-04-02"), tx(-10.0, "Fun", "2024-03-02")];
        assert!(evaluate_on(15, &txs).is_none());
    }

    #[test]
    fn test_growth_below_ratio_is_silent() {
        // projected 300 vs last 250: 1.2x
        let txs = [
            tx(-150.0, "Food", "2024-04-03"),
            tx(-250.0, "Food", "2024-03-10"),
        ];
        assert!(evaluate_on(15, &txs).is_none());
    }

    #[test]
    fn test_new_category_is_ignored() {
        let txs = [tx(-500.0, "Travel", "2024-04-03")];
        assert!(evaluate_on(15, &txs).is_none());
    }

    #[test]
    fn test_only_first_trigger_is_reported() {
        let txs = [
            tx(-400.0, "Rent", "2024-04-01"),
            tx(-100.0, "Rent", "2024-03-01"),
            tx(-200.0, "Food", "2024-04-05"),
            tx(-50.0, "Food", "2024-03-05"),
        ];
        let insight = evaluate_on(15, &txs).unwrap();
        assert!(insight.text.contains("your Rent spending"));
    }

    #[test]
    fn test_overflowing_projection_is_silent() {
        // 1e308 / 15 * 30 overflows to infinity
        let txs = [
            tx(-1e308, "Food", "2024-04-03"),
            tx(-200.0, "Food", "2024-03-10"),
        ];
        assert!(evaluate_on(15, &txs).is_none());
    }

    #[test]
    fn test_skips_non_trigger_and_takes_next() {
        // Rent is flat, Food rises
        let txs = [
            tx(-500.0, "Rent", "2024-04-01"),
            tx(-1000.0, "Rent", "2024-03-01"),
            tx(-200.0, "Food", "2024-04-05"),
            tx(-100.0, "Food", "2024-03-05"),
        ];
        let insight = evaluate_on(15, &txs).unwrap();
        assert!(insight.text.contains("your Food spending"));
    }
}
