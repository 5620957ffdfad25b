//! Downloadable input template: the header row users fill in, nothing else.

use std::path::Path;

use crate::error::Result;

/// Column names of the expected input, in order.
pub const TEMPLATE_HEADER: [&str; 4] = ["Transaction Date", "Particulars", "Debit", "Credit"];

/// Template contents as a CSV string: exactly one header row, no data rows.
pub fn template_csv() -> String {
    let mut out = TEMPLATE_HEADER.join(",");
    out.push('\n');
    out
}

/// Write the template to `path`.
pub fn write_template(path: impl AsRef<Path>) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(TEMPLATE_HEADER)?;
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_statement_from_reader;

    #[test]
    fn test_template_is_header_only() {
        assert_eq!(template_csv(), "Transaction Date,Particulars,Debit,Credit\n");
    }

    #[test]
    fn test_template_round_trips_through_loader() {
        // A freshly downloaded template is a valid, empty statement.
        let txns = load_statement_from_reader(template_csv().as_bytes()).unwrap();
        assert!(txns.is_empty());
    }

    #[test]
    fn test_write_template_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.csv");
        write_template(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, template_csv());
    }
}
