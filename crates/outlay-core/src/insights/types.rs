//! Core types for the insight rules

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Built-in insight rules, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Recent 7-day spending pace
    SpendingPace,
    /// Weekend vs weekday per-day spending skew
    WeekdayWeekend,
    /// One category dominating the month's spending
    DominantCategory,
    /// Category projected to outgrow last month
    MonthTrend,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::SpendingPace => "spending_pace",
            RuleKind::WeekdayWeekend => "weekday_weekend",
            RuleKind::DominantCategory => "dominant_category",
            RuleKind::MonthTrend => "month_trend",
        }
    }

    /// Position in the fixed evaluation order
    pub fn order(&self) -> u8 {
        match self {
            RuleKind::SpendingPace => 1,
            RuleKind::WeekdayWeekend => 2,
            RuleKind::DominantCategory => 3,
            RuleKind::MonthTrend => 4,
        }
    }

    pub fn all() -> &'static [RuleKind] {
        &[
            RuleKind::SpendingPace,
            RuleKind::WeekdayWeekend,
            RuleKind::DominantCategory,
            RuleKind::MonthTrend,
        ]
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spending_pace" => Ok(RuleKind::SpendingPace),
            "weekday_weekend" => Ok(RuleKind::WeekdayWeekend),
            "dominant_category" => Ok(RuleKind::DominantCategory),
            "month_trend" => Ok(RuleKind::MonthTrend),
            _ => Err(format!("Unknown insight rule: {}", s)),
        }
    }
}
