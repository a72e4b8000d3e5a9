//! One-call analysis pass
//!
//! `analyze` is a pure function of its inputs: same transactions, date,
//! period and config always give the same result. Callers re-run it
//! whenever the transaction list or selected period changes.

use chrono::NaiveDate;
use tracing::debug;

use crate::aggregate::Aggregator;
use crate::config::AnalyticsConfig;
use crate::insights::{InsightEngine, RuleContext};
use crate::models::{AnalysisResult, MonthComparison, Transaction};
use crate::periods::Period;
use crate::slices::build_slices;

/// Analyze with the built-in rules
pub fn analyze(
    transactions: &[Transaction],
    now: NaiveDate,
    period: Period,
    config: &AnalyticsConfig,
) -> AnalysisResult {
    Analyzer::new(config.clone()).analyze(transactions, now, period)
}

/// Reusable analyzer holding config and rule set
pub struct Analyzer {
    config: AnalyticsConfig,
    engine: InsightEngine,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyticsConfig::default())
    }
}

impl Analyzer {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            config,
            engine: InsightEngine::new(),
        }
    }

    /// Use a custom rule set
    pub fn with_engine(config: AnalyticsConfig, engine: InsightEngine) -> Self {
        Self { config, engine }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Month totals for the current and previous month
    pub fn month_comparison(&self, aggregator: &Aggregator<'_>, now: NaiveDate) -> MonthComparison {
        MonthComparison::new(
            aggregator.total_expense(Period::CurrentMonth.range(now)),
            aggregator.total_expense(Period::PreviousMonth.range(now)),
        )
    }

    pub fn analyze(
        &self,
        transactions: &[Transaction],
        now: NaiveDate,
        period: Period,
    ) -> AnalysisResult {
        let aggregator = Aggregator::new(transactions);
        if aggregator.skipped() > 0 {
            debug!(
                skipped = aggregator.skipped(),
                "Ignored expenses with unusable dates or amounts"
            );
        }

        let months = self.month_comparison(&aggregator, now);
        let slices = build_slices(
            &aggregator.expense_by_category(period.range(now)),
            &self.config.palette,
        );
        let insights = self
            .engine
            .generate(&RuleContext::new(now, &aggregator, &self.config));

        debug!(
            period = period.as_str(),
            slices = slices.len(),
            insights = insights.len(),
            "Analysis complete"
        );

        AnalysisResult {
            period,
            as_of: now,
            current_month_total: months.current_month_total,
            last_month_total: months.last_month_total,
            percentage_change: months.percentage_change,
            slices,
            insights,
        }
    }

    /// Analyze as of the local wall-clock date
    pub fn analyze_today(&self, transactions: &[Transaction], period: Period) -> AnalysisResult {
        self.analyze(transactions, chrono::Local::now().date_naive(), period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InsightIcon;

    fn tx(id: i64, amount: f64, category: &str, value_date: &str) -> Transaction {
        Transaction {
            id,
            amount,
            currency: "EUR".to_string(),
            value_date: value_date.to_string(),
            transaction_date: None,
            category: category.to_string(),
            description: String::new(),
            kind_label: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_food_and_shopping_today() {
        let now = date(2024, 3, 5);
        let txs = vec![
            tx(1, -100.0, "Food", "2024-03-05"),
            tx(2, -20.0, "Shopping", "2024-03-05"),
        ];
        let result = analyze(&txs, now, Period::CurrentMonth, &AnalyticsConfig::default());

        let names: Vec<&str> = result.slices.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Food", "Shopping"]);
        assert_eq!(result.slices[0].value, 100.0);
        assert_eq!(result.slices[1].value, 20.0);
        assert_eq!(result.current_month_total, 120.0);

        let dominant = result
            .insights
            .iter()
            .find(|i| i.icon == InsightIcon::Restaurant)
            .unwrap();
        assert!(dominant.text.contains("83%"));
    }

    #[test]
    fn test_empty_transactions() {
        let result = analyze(
            &[],
            date(2024, 3, 15),
            Period::CurrentMonth,
            &AnalyticsConfig::default(),
        );
        assert_eq!(result.current_month_total, 0.0);
        assert_eq!(result.last_month_total, 0.0);
        assert_eq!(result.percentage_change, 0.0);
        assert!(result.slices.is_empty());
        assert!(result.insights.is_empty());
    }

    #[test]
    fn test_percentage_change_without_last_month() {
        let txs = vec![tx(1, -50.0, "Food", "2024-03-02")];
        let result = analyze(
            &txs,
            date(2024, 3, 15),
            Period::CurrentMonth,
            &AnalyticsConfig::default(),
        );
        assert_eq!(result.current_month_total, 50.0);
        assert_eq!(result.last_month_total, 0.0);
        assert_eq!(result.percentage_change, 0.0);
    }

    #[test]
    fn test_selected_period_drives_slices() {
        let txs = vec![
            tx(1, -80.0, "Travel", "2024-02-20"),
            tx(2, -10.0, "Food", "2024-03-02"),
        ];
        let now = date(2024, 3, 15);
        let analyzer = Analyzer::default();

        let previous = analyzer.analyze(&txs, now, Period::PreviousMonth);
        assert_eq!(previous.slices.len(), 1);
        assert_eq!(previous.slices[0].name, "Travel");
        assert_eq!(previous.period, Period::PreviousMonth);

        let last30 = analyzer.analyze(&txs, now, Period::Last30Days);
        assert_eq!(last30.slices.len(), 2);

        // Month totals do not depend on the selected period
        assert_eq!(previous.current_month_total, last30.current_month_total);
        assert!((previous.percentage_change - (10.0 - 80.0) / 80.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_with_engine_uses_given_rules() {
        let txs = vec![tx(1, -500.0, "Rent", "2024-03-02")];
        let now = date(2024, 3, 5);

        let silent = Analyzer::with_engine(AnalyticsConfig::default(), InsightEngine::empty());
        let result = silent.analyze(&txs, now, Period::CurrentMonth);
        assert!(result.insights.is_empty());
        assert_eq!(result.slices.len(), 1);

        let mut engine = InsightEngine::empty();
        engine.register(Box::new(crate::insights::DominantCategoryRule));
        let result = Analyzer::with_engine(AnalyticsConfig::default(), engine).analyze(
            &txs,
            now,
            Period::CurrentMonth,
        );
        assert_eq!(result.insights.len(), 1);
        assert_eq!(result.insights[0].icon, InsightIcon::PieChart);
    }

    #[test]
    fn test_analyze_today_uses_local_date() {
        let before = chrono::Local::now().date_naive();
        let result = Analyzer::default().analyze_today(&[], Period::Last7Days);
        let after = chrono::Local::now().date_naive();
        assert!(result.as_of == before || result.as_of == after);
        assert_eq!(result.period, Period::Last7Days);
    }

    #[test]
    fn test_overflowing_expenses_yield_no_data() {
        let txs = vec![
            tx(1, -1e308, "Food", "2024-03-05"),
            tx(2, -1e308, "Food", "2024-03-05"),
        ];
        let result = analyze(
            &txs,
            date(2024, 3, 5),
            Period::CurrentMonth,
            &AnalyticsConfig::default(),
        );
        assert_eq!(result.current_month_total, 0.0);
        assert!(result.percentage_change.is_finite());
        assert!(result.slices.is_empty());
        assert!(result.insights.is_empty());
        assert!(serde_json::to_string(&result).is_ok());
    }

    #[test]
    fn test_disabled_month_trend() {
        let txs = vec![
            tx(1, -150.0, "Food", "2024-04-03"),
            tx(2, -200.0, "Food", "2024-03-10"),
        ];
        let now = date(2024, 4, 15);

        let with_trend = analyze(&txs, now, Period::CurrentMonth, &AnalyticsConfig::default());
        assert!(with_trend
            .insights
            .iter()
            .any(|i| i.icon == InsightIcon::TrendingUp));

        let mut config = AnalyticsConfig::default();
        config.set_enabled(crate::insights::RuleKind::MonthTrend, false);
        let without = analyze(&txs, now, Period::CurrentMonth, &config);
        assert!(!without.insights.iter().any(|i| i.icon == InsightIcon::TrendingUp));
    }
}
