//! CSV statement loader.
//!
//! Expected shape (the template this crate also exports):
//!   Transaction Date,Particulars,Debit,Credit
//!   05/01/2024,UPI/xyz/grocer,,500.00
//!
//! An optional `Value Date` column is tolerated and dropped. Blank amount
//! cells mean zero. Any unparseable date or amount rejects the whole file;
//! rows are never silently zero-filled.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use crate::error::{Result, StatementError};
use cashlens_core::Transaction;

const COL_DATE: &str = "Transaction Date";
const COL_PARTICULARS: &str = "Particulars";
const COL_DEBIT: &str = "Debit";
const COL_CREDIT: &str = "Credit";

/// Parse a statement date. Accepts `DD/MM/YYYY`, `DD-MM-YYYY`, and ISO
/// `YYYY-MM-DD`.
pub fn parse_statement_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    for fmt in ["%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(d);
        }
    }
    None
}

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\s]+").expect("separator pattern is valid"));

/// Parse an amount cell. Blank means the amount is absent; otherwise strip
/// thousands separators and inner whitespace ("1,234.56", "1 234.56") and
/// require the rest to be a number.
fn parse_amount(raw: &str) -> std::result::Result<Option<f64>, ()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let cleaned = SEPARATORS.replace_all(raw, "");
    cleaned.parse::<f64>().map(Some).map_err(|_| ())
}

/// Load a statement CSV from disk.
pub fn load_statement(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| StatementError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let txns = load_statement_from_reader(file)?;
    debug!(rows = txns.len(), path = %path.display(), "loaded statement");
    Ok(txns)
}

/// Load a statement CSV from any reader. Input order is preserved.
pub fn load_statement_from_reader<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| StatementError::MissingColumn(name.to_string()))
    };

    let date_idx = column(COL_DATE)?;
    let particulars_idx = column(COL_PARTICULARS)?;
    let debit_idx = column(COL_DEBIT)?;
    let credit_idx = column(COL_CREDIT)?;

    let mut txns = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        // 1-based data record number for error messages.
        let record_no = i + 1;

        // Exported statements often end with an all-blank row.
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        let date_raw = record.get(date_idx).unwrap_or("");
        let date = parse_statement_date(date_raw).ok_or_else(|| StatementError::InvalidDate {
            record: record_no,
            value: date_raw.to_string(),
        })?;

        let amount_at = |idx: usize, name: &str| -> Result<Option<f64>> {
            let raw = record.get(idx).unwrap_or("");
            parse_amount(raw).map_err(|_| StatementError::InvalidAmount {
                record: record_no,
                column: name.to_string(),
                value: raw.to_string(),
            })
        };

        txns.push(Transaction {
            date,
            description: record.get(particulars_idx).unwrap_or("").to_string(),
            debit: amount_at(debit_idx, COL_DEBIT)?,
            credit: amount_at(credit_idx, COL_CREDIT)?,
        });
    }

    Ok(txns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn load(csv_text: &str) -> Result<Vec<Transaction>> {
        load_statement_from_reader(csv_text.as_bytes())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_load_basic_statement() {
        let txns = load(
            "Transaction Date,Particulars,Debit,Credit\n\
             05/01/2024,UPI/xyz,,500.00\n\
             06/01/2024,ATM/123,200.00,\n",
        )
        .unwrap();

        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].date, date(2024, 1, 5));
        assert_eq!(txns[0].description, "UPI/xyz");
        assert_eq!(txns[0].debit, None);
        assert_eq!(txns[0].credit, Some(500.0));
        assert_eq!(txns[1].debit, Some(200.0));
        assert_eq!(txns[1].credit, None);
    }

    #[test]
    fn test_value_date_column_is_ignored() {
        let txns = load(
            "Transaction Date,Value Date,Particulars,Debit,Credit\n\
             05/01/2024,07/01/2024,NEFT inward,,1000\n",
        )
        .unwrap();

        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].date, date(2024, 1, 5));
        assert_eq!(txns[0].description, "NEFT inward");
    }

    #[test]
    fn test_accepts_multiple_date_formats() {
        let txns = load(
            "Transaction Date,Particulars,Debit,Credit\n\
             05/01/2024,UPI/a,,1\n\
             06-01-2024,UPI/b,,1\n\
             2024-01-07,UPI/c,,1\n",
        )
        .unwrap();

        assert_eq!(txns[0].date, date(2024, 1, 5));
        assert_eq!(txns[1].date, date(2024, 1, 6));
        assert_eq!(txns[2].date, date(2024, 1, 7));
    }

    #[test]
    fn test_thousands_separators_in_amounts() {
        let txns = load(
            "Transaction Date,Particulars,Debit,Credit\n\
             05/01/2024,NEFT salary,,\"1,23,456.78\"\n",
        )
        .unwrap();

        assert_eq!(txns[0].credit, Some(123456.78));
    }

    #[test]
    fn test_missing_column_rejected() {
        let err = load("Transaction Date,Debit,Credit\n05/01/2024,200,\n").unwrap_err();
        match err {
            StatementError::MissingColumn(col) => assert_eq!(col, "Particulars"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_date_rejects_file() {
        let err = load(
            "Transaction Date,Particulars,Debit,Credit\n\
             05/01/2024,UPI/a,,1\n\
             not-a-date,UPI/b,,1\n",
        )
        .unwrap_err();

        match err {
            StatementError::InvalidDate { record, value } => {
                assert_eq!(record, 2);
                assert_eq!(value, "not-a-date");
            }
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_amount_rejects_file() {
        let err = load(
            "Transaction Date,Particulars,Debit,Credit\n\
             05/01/2024,POS 1234,two hundred,\n",
        )
        .unwrap_err();

        match err {
            StatementError::InvalidAmount {
                record,
                column,
                value,
            } => {
                assert_eq!(record, 1);
                assert_eq!(column, "Debit");
                assert_eq!(value, "two hundred");
            }
            other => panic!("expected InvalidAmount, got {other:?}"),
        }
    }

    #[test]
    fn test_trailing_blank_row_skipped() {
        let txns = load(
            "Transaction Date,Particulars,Debit,Credit\n\
             05/01/2024,UPI/a,,1\n\
             ,,,\n",
        )
        .unwrap();

        assert_eq!(txns.len(), 1);
    }

    #[test]
    fn test_header_only_statement_is_empty() {
        let txns = load("Transaction Date,Particulars,Debit,Credit\n").unwrap();
        assert!(txns.is_empty());
    }

    #[test]
    fn test_load_from_path() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(
            tmp,
            "Transaction Date,Particulars,Debit,Credit\n05/01/2024,UPI/xyz,,500\n"
        )
        .unwrap();

        let txns = load_statement(tmp.path()).unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].credit, Some(500.0));
    }

    #[test]
    fn test_open_error_carries_path() {
        let err = load_statement("/definitely/not/here.csv").unwrap_err();
        match err {
            StatementError::Open { path, .. } => {
                assert!(path.to_string_lossy().contains("not/here.csv"));
            }
            other => panic!("expected Open, got {other:?}"),
        }
    }
}
