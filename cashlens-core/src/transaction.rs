//! Normalized bank-statement rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of a bank statement.
///
/// `None` in `debit` or `credit` means the cell was blank in the source file;
/// every aggregation treats it as zero. Statements are expected to fill at
/// most one of the two per row, but that is a property of the source data and
/// is not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub debit: Option<f64>,
    pub credit: Option<f64>,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        debit: Option<f64>,
        credit: Option<f64>,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            debit,
            credit,
        }
    }

    /// Debit amount with a blank cell read as zero.
    pub fn debit_or_zero(&self) -> f64 {
        self.debit.unwrap_or(0.0)
    }

    /// Credit amount with a blank cell read as zero.
    pub fn credit_or_zero(&self) -> f64 {
        self.credit.unwrap_or(0.0)
    }
}
