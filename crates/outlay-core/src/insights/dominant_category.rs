//! Dominant Category Rule
//!
//! Flags the largest category of the current month when it takes more than
//! the configured share of total spending. Food categories (per the
//! taxonomy) get cooking advice instead of the generic budget advice.

use crate::models::{InsightIcon, InsightItem};
use crate::periods::Period;
use crate::slices::round2;

use super::engine::{Rule, RuleContext};
use super::types::RuleKind;

pub struct DominantCategoryRule;

impl Rule for DominantCategoryRule {
    fn kind(&self) -> RuleKind {
        RuleKind::DominantCategory
    }

    fn name(&self) -> &'static str {
        "Dominant Category"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<InsightItem> {
        let period = Period::CurrentMonth;
        let range = period.range(ctx.now);
        let total = ctx.aggregator.total_expense(range);
        if total <= 0.0 {
            return None;
        }

        let by_category = ctx.aggregator.expense_by_category(range);
        let (name, amount) = by_category.top()?;
        let percentage = (amount / total * 100.0).round();
        if percentage <= ctx.config.thresholds.dominant_share_pct {
            return None;
        }

        let lead = format!(
            "{} makes up {:.0}% of your spending this month ({}).",
            name,
            percentage,
            ctx.money(round2(amount))
        );

        let insight = if ctx.config.taxonomy.is_food(name) {
            InsightItem::new(
                period.label(),
                format!(
                    "{} Cooking at home and planning meals ahead could bring this down.",
                    lead
                ),
                InsightIcon::Restaurant,
            )
        } else {
            InsightItem::new(
                period.label(),
                format!(
                    "{} Consider setting a monthly budget for this category.",
                    lead
                ),
                InsightIcon::PieChart,
            )
        };

        Some(insight)
    }
}
