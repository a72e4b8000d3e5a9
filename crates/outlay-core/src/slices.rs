//! Pie-chart slice building and amount formatting

use crate::aggregate::CategoryTotals;
use crate::models::CategorySlice;

/// Default cyclic slice palette
pub const DEFAULT_PALETTE: &[&str] = &[
    "#667eea", "#764ba2", "#10B981", "#F59E0B", "#3B82F6", "#EF4444", "#8B5CF6", "#EC4899",
    "#14B8A6", "#F97316",
];

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format an amount with `,` thousands separators and at most two fraction
/// digits, trailing zeros dropped: `1234.5` -> `1,234.5`, `100.0` -> `100`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (digits, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let fraction = fraction.trim_end_matches('0');
    let is_zero = digits.bytes().all(|b| b == b'0') && fraction.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    if fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, fraction)
    }
}

/// Format an amount followed by a currency code, e.g. `1,234.5 EUR`
pub fn format_money(value: f64, currency: &str) -> String {
    if currency.is_empty() {
        format_amount(value)
    } else {
        format!("{} {}", format_amount(value), currency)
    }
}

/// Turn category totals into ordered, colored slices.
///
/// Slices are sorted by descending amount (stable on ties) and colored by
/// position, so the largest category always gets the first palette color.
/// An empty palette falls back to [`DEFAULT_PALETTE`].
pub fn build_slices<S: AsRef<str>>(totals: &CategoryTotals, palette: &[S]) -> Vec<CategorySlice> {
    let color_at = |i: usize| -> String {
        if palette.is_empty() {
            DEFAULT_PALETTE[i % DEFAULT_PALETTE.len()].to_string()
        } else {
            palette[i % palette.len()].as_ref().to_string()
        }
    };

    totals
        .sorted_desc()
        .into_iter()
        .enumerate()
        .map(|(i, (name, amount))| CategorySlice {
            name: name.to_string(),
            amount: format_amount(amount),
            value: round2(amount),
            color: color_at(i),
        })
        .collect()
}
