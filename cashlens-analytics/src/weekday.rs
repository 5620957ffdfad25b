//! Credit/debit totals bucketed by day of week.

use std::collections::BTreeMap;

use cashlens_core::Transaction;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// Summed amounts for one weekday. Rows are ordered Monday→Sunday; weekdays
/// with no transactions in the period do not appear.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayOfWeekTotal {
    pub day: String,
    pub credit: f64,
    pub debit: f64,
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Aggregate credit/debit by weekday name.
///
/// Two passes, deliberately: amounts are first summed per calendar date, and
/// the per-date sums are then re-bucketed by weekday. A date can repeat
/// across rows, so collapsing per-date first is what keeps repeated dates
/// from being weighted per-row when the daily table feeds the heatmap.
pub fn day_of_week_totals(txns: &[Transaction]) -> Vec<DayOfWeekTotal> {
    // Pass 1: per calendar date.
    let mut per_date: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
    for txn in txns {
        let entry = per_date.entry(txn.date).or_insert((0.0, 0.0));
        entry.0 += txn.credit_or_zero();
        entry.1 += txn.debit_or_zero();
    }

    // Pass 2: per weekday, keyed by days-from-Monday so iteration order is
    // Monday(0)→Sunday(6).
    let mut per_weekday: BTreeMap<u32, (Weekday, f64, f64)> = BTreeMap::new();
    for (date, (credit, debit)) in per_date {
        let weekday = date.weekday();
        let entry = per_weekday
            .entry(weekday.num_days_from_monday())
            .or_insert((weekday, 0.0, 0.0));
        entry.1 += credit;
        entry.2 += debit;
    }

    per_weekday
        .into_values()
        .map(|(weekday, credit, debit)| DayOfWeekTotal {
            day: weekday_name(weekday).to_string(),
            credit,
            debit,
        })
        .collect()
}
