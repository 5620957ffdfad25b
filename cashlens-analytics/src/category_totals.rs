//! Per-category debit and credit totals.

use std::collections::BTreeMap;

use cashlens_core::{CategorizedTransaction, round_half_even};
use serde::Serialize;

/// One category with its summed amount for one side (debit or credit).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

fn totals_by<F>(txns: &[CategorizedTransaction], amount: F) -> Vec<CategoryTotal>
where
    F: Fn(&CategorizedTransaction) -> f64,
{
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for txn in txns {
        *sums.entry(txn.category.as_str()).or_insert(0.0) += amount(txn);
    }

    let mut totals: Vec<CategoryTotal> = sums
        .into_iter()
        .filter(|(_, amount)| *amount > 0.0)
        .map(|(category, amount)| CategoryTotal {
            category: category.to_string(),
            amount,
        })
        .collect();

    // Ascending by amount, the order the bar charts expect.
    totals.sort_by(|a, b| a.amount.total_cmp(&b.amount));
    totals
}

/// Debit sum per category, zero-total categories dropped, ascending by amount.
pub fn debit_totals(txns: &[CategorizedTransaction]) -> Vec<CategoryTotal> {
    totals_by(txns, |t| t.transaction.debit_or_zero())
}

/// Credit sum per category, zero-total categories dropped, ascending by amount.
pub fn credit_totals(txns: &[CategorizedTransaction]) -> Vec<CategoryTotal> {
    totals_by(txns, |t| t.transaction.credit_or_zero())
}

/// Whole-currency grand total across category totals (banker's rounding).
pub fn grand_total(totals: &[CategoryTotal]) -> i64 {
    round_half_even(totals.iter().map(|t| t.amount).sum())
}
