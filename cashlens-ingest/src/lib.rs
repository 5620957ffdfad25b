//! cashlens-ingest: bank-statement CSV loading and the fill-in template.

pub mod error;
pub mod loader;
pub mod template;

pub use error::{Result, StatementError};
pub use loader::{load_statement, load_statement_from_reader, parse_statement_date};
pub use template::{TEMPLATE_HEADER, template_csv, write_template};
