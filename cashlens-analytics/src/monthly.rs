//! Monthly credit/debit/net trend.

use std::collections::BTreeMap;

use cashlens_core::Transaction;
use chrono::Datelike;
use serde::Serialize;

/// Aggregate for one calendar month. Months are keyed by index alone, so the
/// same month from different years lands in one row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthTotal {
    pub month: String,
    pub month_index: u32,
    pub credit: f64,
    pub debit: f64,
    pub net_cash_flow: f64,
}

fn month_name(index: u32) -> &'static str {
    match index {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

/// Sum credit/debit per month, ascending by month index, with per-month net
/// cash flow (credit − debit, exact, unrounded).
pub fn monthly_trend(txns: &[Transaction]) -> Vec<MonthTotal> {
    let mut per_month: BTreeMap<u32, (f64, f64)> = BTreeMap::new();
    for txn in txns {
        let entry = per_month.entry(txn.date.month()).or_insert((0.0, 0.0));
        entry.0 += txn.credit_or_zero();
        entry.1 += txn.debit_or_zero();
    }

    per_month
        .into_iter()
        .map(|(month_index, (credit, debit))| MonthTotal {
            month: month_name(month_index).to_string(),
            month_index,
            credit,
            debit,
            net_cash_flow: credit - debit,
        })
        .collect()
}
