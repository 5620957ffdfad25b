//! One full dashboard pass over a loaded statement.

use cashlens_core::{Transaction, categorize};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::cashflow::CashFlowSummary;
use crate::category_totals::{CategoryTotal, credit_totals, debit_totals};
use crate::filter::{DateRange, date_bounds, filter_by_date};
use crate::monthly::{MonthTotal, monthly_trend};
use crate::weekday::{DayOfWeekTotal, day_of_week_totals};

/// Everything the presenter renders: KPIs, the two category tables, the
/// weekday table, and the monthly trend, plus the unfiltered data's date
/// bounds for the range picker.
///
/// Rebuilt from scratch on every call; holds no state between runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementReport {
    /// Min/max dates of the *unfiltered* statement; `None` when it is empty.
    pub bounds: Option<(NaiveDate, NaiveDate)>,
    /// The range the report was filtered to.
    pub range: DateRange,
    /// Rows that survived the filter.
    pub row_count: usize,
    pub cash_flow: CashFlowSummary,
    pub debit_by_category: Vec<CategoryTotal>,
    pub credit_by_category: Vec<CategoryTotal>,
    pub by_day_of_week: Vec<DayOfWeekTotal>,
    pub monthly_trend: Vec<MonthTotal>,
}

impl StatementReport {
    /// Run Filter → Categorize → Aggregate over `txns`.
    pub fn build(txns: &[Transaction], range: &DateRange) -> Self {
        let bounds = date_bounds(txns);
        let filtered = filter_by_date(txns, range);
        let categorized: Vec<_> = filtered.iter().map(categorize).collect();

        let debit_by_category = debit_totals(&categorized);
        let credit_by_category = credit_totals(&categorized);
        let cash_flow =
            CashFlowSummary::from_category_totals(&debit_by_category, &credit_by_category);

        debug!(
            total = txns.len(),
            kept = filtered.len(),
            categories = debit_by_category.len() + credit_by_category.len(),
            "built statement report"
        );

        Self {
            bounds,
            range: *range,
            row_count: filtered.len(),
            cash_flow,
            debit_by_category,
            credit_by_category,
            by_day_of_week: day_of_week_totals(&filtered),
            monthly_trend: monthly_trend(&filtered),
        }
    }
}
