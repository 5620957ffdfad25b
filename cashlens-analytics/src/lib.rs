//! cashlens-analytics: the statement dashboard pipeline.
//!
//! Filter → Categorize → Aggregate, run in full on every call. Each stage is
//! a pure transform; nothing is cached between runs.

pub mod cashflow;
pub mod category_totals;
pub mod filter;
pub mod monthly;
pub mod report;
pub mod weekday;

pub use cashflow::{CashFlowDirection, CashFlowSummary};
pub use category_totals::{CategoryTotal, credit_totals, debit_totals, grand_total};
pub use filter::{DateRange, date_bounds, filter_by_date};
pub use monthly::{MonthTotal, monthly_trend};
pub use report::StatementReport;
pub use weekday::{DayOfWeekTotal, day_of_week_totals};
