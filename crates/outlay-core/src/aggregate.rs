//! Expense aggregation
//!
//! Reduces a transaction list to per-period totals. Only expenses
//! (`amount < 0`) are counted, as positive magnitudes. Records whose value
//! date cannot be parsed are dropped up front so they never reach a bucket.
//!
//! Sums that overflow to infinity are reported as "no data" (zero totals,
//! empty category maps) so no NaN or infinite value leaves this module.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::Transaction;
use crate::periods::{is_weekend, DateRange};

/// An expense with its parsed date
#[derive(Debug, Clone)]
struct Expense<'a> {
    date: NaiveDate,
    category: &'a str,
    amount: f64,
}

/// Per-category expense sums in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    entries: Vec<(String, f64)>,
}

/// Accumulates category sums, keeping first-seen order
#[derive(Debug, Default)]
struct CategoryTotalsBuilder {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl CategoryTotalsBuilder {
    fn add(&mut self, category: &str, amount: f64) {
        match self.index.get(category) {
            Some(&i) => self.entries[i].1 += amount,
            None => {
                self.index.insert(category.to_string(), self.entries.len());
                self.entries.push((category.to_string(), amount));
            }
        }
    }

    fn finish(self) -> CategoryTotals {
        CategoryTotals {
            entries: self.entries,
        }
    }
}

impl CategoryTotals {
    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, amount)| *amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, amount)| (name.as_str(), *amount))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, amount)| amount).sum()
    }

    /// Entries sorted by descending amount; ties keep first-seen order
    pub fn sorted_desc(&self) -> Vec<(&str, f64)> {
        let mut sorted: Vec<(&str, f64)> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.total_cmp(&a.1));
        sorted
    }

    /// Largest category, first-seen wins on ties
    pub fn top(&self) -> Option<(&str, f64)> {
        self.sorted_desc().into_iter().next()
    }
}

/// Average daily spend on weekdays vs weekend days
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekdaySplit {
    /// `None` when the range holds no weekday
    pub weekday_avg: Option<f64>,
    /// `None` when the range holds no weekend day
    pub weekend_avg: Option<f64>,
}

/// Expense aggregator over one transaction list
#[derive(Debug, Clone)]
pub struct Aggregator<'a> {
    expenses: Vec<Expense<'a>>,
    skipped: usize,
}

impl<'a> Aggregator<'a> {
    pub fn new(transactions: &'a [Transaction]) -> Self {
        let mut expenses = Vec::new();
        let mut skipped = 0;

        for tx in transactions {
            if !tx.is_expense() {
                continue;
            }
            if !tx.amount.is_finite() {
                debug!(id = tx.id, "Skipping transaction with non-finite amount");
                skipped += 1;
                continue;
            }
            let Some(date) = tx.parsed_value_date() else {
                debug!(
                    id = tx.id,
                    value_date = tx.value_date.as_str(),
                    "Skipping transaction with unparseable value date"
                );
                skipped += 1;
                continue;
            };
            expenses.push(Expense {
                date,
                category: tx.category.as_str(),
                amount: tx.amount.abs(),
            });
        }

        Self { expenses, skipped }
    }

    /// Number of expenses dropped for bad dates or amounts
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn in_range(&self, range: DateRange) -> impl Iterator<Item = &Expense<'a>> {
        self.expenses.iter().filter(move |e| range.contains(e.date))
    }

    /// Sum of expense magnitudes dated within the range, 0 on overflow
    pub fn total_expense(&self, range: DateRange) -> f64 {
        finite_or_zero(self.in_range(range).map(|e| e.amount).sum())
    }

    /// Expense sums grouped by category for the range.
    ///
    /// Empty when the range total overflows, so the entries always add up
    /// to [`Aggregator::total_expense`].
    pub fn expense_by_category(&self, range: DateRange) -> CategoryTotals {
        let mut builder = CategoryTotalsBuilder::default();
        for expense in self.in_range(range) {
            builder.add(expense.category, expense.amount);
        }
        let totals = builder.finish();

        if totals.total().is_finite() && totals.iter().all(|(_, amount)| amount.is_finite()) {
            totals
        } else {
            debug!("Category sums overflowed, treating range as empty");
            CategoryTotals::default()
        }
    }

    /// Per-day averages for weekday and weekend spending.
    ///
    /// Each side divides by the number of matching calendar days in the
    /// range, not by the number of transactions.
    pub fn weekday_vs_weekend_average(&self, range: DateRange) -> WeekdaySplit {
        let (weekday_days, weekend_days) = range.day_counts();
        let (weekday_sum, weekend_sum) =
            self.in_range(range)
                .fold((0.0, 0.0), |(weekday, weekend), e| {
                    if is_weekend(e.date) {
                        (weekday, weekend + e.amount)
                    } else {
                        (weekday + e.amount, weekend)
                    }
                });

        let average =
            |sum: f64, days: u32| (days > 0).then(|| finite_or_zero(sum) / f64::from(days));

        WeekdaySplit {
            weekday_avg: average(weekday_sum, weekday_days),
            weekend_avg: average(weekend_sum, weekend_days),
        }
    }
}

fn finite_or_zero(sum: f64) -> f64 {
    if sum.is_finite() {
        sum
    } else {
        debug!("Expense sum overflowed, treating range as empty");
        0.0
    }
}
