//! Weekday/Weekend Rule
//!
//! Compares per-day spending on weekends and weekdays over the last 30 days.
//! Fires for whichever side exceeds the other by the configured ratio,
//! weekend checked first.

use crate::models::{InsightIcon, InsightItem};
use crate::periods::Period;
use crate::slices::round2;

use super::engine::{Rule, RuleContext};
use super::types::RuleKind;

pub struct WeekdayWeekendRule;

impl Rule for WeekdayWeekendRule {
    fn kind(&self) -> RuleKind {
        RuleKind::WeekdayWeekend
    }

    fn name(&self) -> &'static str {
        "Weekday/Weekend Habits"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<InsightItem> {
        let period = Period::Last30Days;
        let split = ctx
            .aggregator
            .weekday_vs_weekend_average(period.range(ctx.now));
        let (weekday, weekend) = (split.weekday_avg?, split.weekend_avg?);
        let ratio = ctx.config.thresholds.skew_ratio;

        if weekend > ratio * weekday {
            Some(InsightItem::new(
                period.label(),
                format!(
                    "You spend {} per day on weekends versus {} on weekdays. \
                     Planning weekend activities ahead could help you cut back.",
                    ctx.money(round2(weekend)),
                    ctx.money(round2(weekday))
                ),
                InsightIcon::Calendar,
            ))
        } else if weekday > ratio * weekend {
            Some(InsightItem::new(
                period.label(),
                format!(
                    "You spend {} per day on weekdays versus {} on weekends. \
                     Small daily habits such as lunches out may be adding up.",
                    ctx.money(round2(weekday)),
                    ctx.money(round2(weekend))
                ),
                InsightIcon::Calendar,
            ))
        } else {
            None
        }
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
            category: "Fun".to_string(),
            description: String::new(),
            kind_label: None,
        }
    }

    // 2024-03-31 is a Sunday; the 30-day window is 2024-03-01..=2024-03-31,
    // 21 weekdays and 10 weekend days.
    fn evaluate(txs: &[Transaction]) -> Option<InsightItem> {
        let now = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let aggregator = Aggregator::new(txs);
        let config = AnalyticsConfig::default();
        WeekdayWeekendRule.evaluate(&RuleContext::new(now, &aggregator, &config))
    }

    #[test]
    fn test_weekend_skew() {
        // weekend 200/10 = 20, weekday 210/21 = 10
        let insight = evaluate(&[tx(-200.0, "2024-03-02"), tx(-210.0, "2024-03-05")]).unwrap();
        assert!(insight.text.contains("on weekends versus"));
        assert!(insight.text.starts_with("You spend 20 EUR per day on weekends"));
        assert_eq!(insight.period, "Last 30 days");
    }

    #[test]
    fn test_weekday_skew() {
        // weekday 630/21 = 30, weekend 100/10 = 10
        let insight = evaluate(&[tx(-630.0, "2024-03-05"), tx(-100.0, "2024-03-02")]).unwrap();
        assert!(insight.text.starts_with("You spend 30 EUR per day on weekdays"));
    }

    #[test]
    fn test_balanced_spending_is_silent() {
        // weekday 210/21 = 10, weekend 140/10 = 14 (ratio 1.4)
        assert!(evaluate(&[tx(-210.0, "2024-03-05"), tx(-140.0, "2024-03-02")]).is_none());
        // both zero
        assert!(evaluate(&[]).is_none());
    }

    #[test]
    fn test_only_weekend_spending() {
        let insight = evaluate(&[tx(-50.0, "2024-03-16")]).unwrap();
        assert!(insight.text.contains("on weekends versus 0 EUR on weekdays"));
    }
}
