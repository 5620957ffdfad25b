//! Inclusive date-range filtering.

use cashlens_core::Transaction;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user-selected date range. Both endpoints inclusive.
///
/// Either endpoint may be `None` (the user has picked only one end of the
/// range, or none at all); filtering then passes the data through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Unbounded range: everything passes.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// True when the range is fully selected (both endpoints present).
    pub fn is_selected(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => date >= start && date <= end,
            _ => true,
        }
    }
}

/// Restrict `txns` to the selected range. A half-selected range returns the
/// input unchanged; an empty result is not an error.
pub fn filter_by_date(txns: &[Transaction], range: &DateRange) -> Vec<Transaction> {
    if !range.is_selected() {
        return txns.to_vec();
    }
    txns.iter()
        .filter(|t| range.contains(t.date))
        .cloned()
        .collect()
}

/// Min/max transaction dates, for bounding the date picker. `None` when the
/// statement is empty.
pub fn date_bounds(txns: &[Transaction]) -> Option<(NaiveDate, NaiveDate)> {
    let min = txns.iter().map(|t| t.date).min()?;
    let max = txns.iter().map(|t| t.date).max()?;
    Some((min, max))
}
