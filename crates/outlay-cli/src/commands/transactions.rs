//! Transaction and category listing commands

use std::path::Path;

use anyhow::Result;
use outlay_core::{
    distinct_categories, format_amount, CategoryTaxonomy, Transaction, TransactionFilter,
    TransactionKind,
};

use super::{load_config, load_source, truncate};
use crate::cli::SourceArgs;

/// Build a filter from the --category and --kind arguments.
///
/// `kind` is `debit`, `credit` or `all`.
pub fn build_filter(category: Option<&str>, kind: &str) -> Result<TransactionFilter> {
    let kind = if kind.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(
            kind.parse::<TransactionKind>()
                .map_err(|e| anyhow::anyhow!("{} (or all)", e))?,
        )
    };

    Ok(TransactionFilter {
        category: category.map(|c| c.to_string()),
        kind,
    })
}

pub async fn cmd_transactions(
    source: &SourceArgs,
    category: Option<&str>,
    kind: &str,
    limit: usize,
) -> Result<()> {
    let filter = build_filter(category, kind)?;
    let transactions = load_source(source).await?;
    let matching = filter.apply(&transactions);

    if matching.is_empty() {
        println!("No transactions match.");
        return Ok(());
    }

    println!();
    println!(
        "📝 Transactions ({} of {})",
        matching.len().min(limit),
        matching.len()
    );
    println!("   ─────────────────────────────────────────────────────────────");

    for tx in matching.into_iter().take(limit) {
        println!(
            "   {:10} │ {:>14} │ {:20} │ {}",
            truncate(&tx.value_date, 10),
            amount_cell(tx),
            truncate(&tx.category, 20),
            truncate(&tx.description, 35)
        );
    }

    Ok(())
}

fn amount_cell(tx: &Transaction) -> String {
    let amount = format!("{} {}", format_amount(tx.amount.abs()), tx.currency);
    if tx.amount < 0.0 {
        format!("\x1b[31m-{}\x1b[0m", amount) // Red for expenses
    } else {
        format!("\x1b[32m+{}\x1b[0m", amount) // Green for income
    }
}

/// Category listing rows: (name, group, icon, transaction count)
pub fn category_rows<'t>(
    transactions: &[Transaction],
    taxonomy: &'t CategoryTaxonomy,
) -> Vec<(String, &'static str, &'t str, usize)> {
    distinct_categories(transactions)
        .into_iter()
        .map(|name| {
            let count = transactions.iter().filter(|tx| tx.category == name).count();
            let group = taxonomy.group_of(&name).as_str();
            let icon = taxonomy.icon_for(&name);
            (name, group, icon, count)
        })
        .collect()
}

pub async fn cmd_categories(config_path: Option<&Path>, source: &SourceArgs) -> Result<()> {
    let config = load_config(config_path)?;
    let transactions = load_source(source).await?;
    let rows = category_rows(&transactions, &config.taxonomy);

    if rows.is_empty() {
        println!("No categories found.");
        return Ok(());
    }

    println!();
    println!("🏷️  Categories");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:28} │ {:13} │ {:16} │ {:>5}",
        "Category", "Group", "Icon", "Count"
    );
    println!("   ─────────────────────────────┼───────────────┼──────────────────┼──────");

    for (name, group, icon, count) in rows {
        println!(
            "   {:28} │ {:13} │ {:16} │ {:>5}",
            truncate(&name, 28),
            group,
            icon,
            count
        );
    }

    Ok(())
}
