use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while reading a statement file.
///
/// A statement is rejected whole: the first missing column or unparseable
/// cell aborts the load so that no partially-zeroed dashboard is rendered.
#[derive(Error, Debug)]
pub enum StatementError {
    /// The statement file could not be opened.
    #[error("failed to open statement {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required column is absent from the header row.
    #[error("statement is missing required column '{0}'")]
    MissingColumn(String),

    /// A date cell did not match any accepted format.
    #[error("record {record}: unparseable transaction date '{value}'")]
    InvalidDate { record: usize, value: String },

    /// A debit/credit cell was non-blank but not a number.
    #[error("record {record}: unparseable {column} amount '{value}'")]
    InvalidAmount {
        record: usize,
        column: String,
        value: String,
    },

    /// Malformed CSV (unbalanced quotes, ragged rows, ...).
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Raw I/O failure without a path attached.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StatementError>;
