//! Data models for Outlay

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::periods::Period;

/// A bank transaction as delivered by the transaction source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    /// Negative = expense, positive = income
    pub amount: f64,
    #[serde(default)]
    pub currency: String,
    /// Economically effective date, used for all period bucketing
    pub value_date: String,
    /// Posting date (not used in aggregation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Bank-provided transaction type label
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind_label: Option<String>,
}

impl Transaction {
    /// Parse `value_date` into a calendar date.
    ///
    /// Accepts a bare `YYYY-MM-DD` date or any date-time string that starts
    /// with one (e.g. `2024-03-05T10:00:00Z`). Returns `None` otherwise.
    pub fn parsed_value_date(&self) -> Option<NaiveDate> {
        parse_value_date(&self.value_date)
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    pub fn kind(&self) -> Option<TransactionKind> {
        if self.amount > 0.0 {
            Some(TransactionKind::Credit)
        } else if self.amount < 0.0 {
            Some(TransactionKind::Debit)
        } else {
            None
        }
    }
}

/// Parse a value date string, see [`Transaction::parsed_value_date`]
pub fn parse_value_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    // Date-time: the date part must be followed by a time separator
    let (head, rest) = (raw.get(..10)?, raw.get(10..)?);
    if !rest.starts_with(['T', 't', ' ']) {
        return None;
    }
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Direction of money flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money in (amount > 0)
    Credit,
    /// Money out (amount < 0)
    Debit,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            _ => Err(format!(
                "Unknown transaction kind: {} (valid: credit, debit)",
                s
            )),
        }
    }
}

/// One category's expense prepared for pie-chart rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub name: String,
    /// Human-readable amount with thousands separators
    pub amount: String,
    /// Amount rounded to 2 decimal places
    pub value: f64,
    /// Hex color from the palette
    pub color: String,
}

/// Symbolic icon name consumed by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightIcon {
    TrendingUp,
    Warning,
    CheckCircle,
    Calendar,
    Restaurant,
    PieChart,
}

impl InsightIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TrendingUp => "trending-up",
            Self::Warning => "warning",
            Self::CheckCircle => "check-circle",
            Self::Calendar => "calendar",
            Self::Restaurant => "restaurant",
            Self::PieChart => "pie-chart",
        }
    }
}

impl std::fmt::Display for InsightIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A heuristic recommendation tied to a detected spending pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightItem {
    /// Label of the period the insight is about (e.g. "Last 7 days")
    pub period: String,
    pub text: String,
    pub icon: InsightIcon,
}

impl InsightItem {
    pub fn new(period: impl Into<String>, text: impl Into<String>, icon: InsightIcon) -> Self {
        Self {
            period: period.into(),
            text: text.into(),
            icon,
        }
    }
}

/// Current vs previous month expense totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthComparison {
    pub current_month_total: f64,
    pub last_month_total: f64,
    /// (current - last) / last * 100, or 0 when last month had no expenses
    pub percentage_change: f64,
}

impl MonthComparison {
    pub fn new(current_month_total: f64, last_month_total: f64) -> Self {
        let percentage_change = if last_month_total > 0.0 {
            (current_month_total - last_month_total) / last_month_total * 100.0
        } else {
            0.0
        };
        // A tiny previous month can still blow the ratio up
        let percentage_change = if percentage_change.is_finite() {
            percentage_change
        } else {
            0.0
        };
        Self {
            current_month_total,
            last_month_total,
            percentage_change,
        }
    }
}

/// Everything one analysis pass produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Period the slices were computed for
    pub period: Period,
    pub as_of: NaiveDate,
    pub current_month_total: f64,
    pub last_month_total: f64,
    pub percentage_change: f64,
    pub slices: Vec<CategorySlice>,
    pub insights: Vec<InsightItem>,
}
