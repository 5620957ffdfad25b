//! Deterministic category rules mapping description prefixes to labels.
//!
//! Bank narration fields open with a short transaction-type code ("UPI/...",
//! "ATM/...", "NEFT-..."), so the first three characters are enough to bucket
//! a personal statement. Unknown prefixes pass through as their own category
//! rather than erroring.

use crate::transaction::Transaction;
use serde::{Deserialize, Serialize};

/// Fixed prefix → label table. Case-sensitive, exact match on the trimmed
/// three-character prefix. Not user-editable.
pub const PREFIX_RULES: &[(&str, &str)] = &[
    ("ATM", "ATM Withdrawal"),
    ("UPI", "UPI Transaction"),
    ("NEF", "NEFT"),
    ("Non", "Non maintenance charges"),
    ("CGS", "Non maintenance charges"),
    ("SGS", "Non maintenance charges"),
    ("FD", "FD Maturity Interest"),
    ("BIL", "Bill Payment"),
    ("Rev", "Reverse Non maintenance charges"),
    ("IFT", "IFT"),
    ("MON", "Monthly Interest"),
    ("EMI", "EMI deduction"),
    ("POS", "Card Payment"),
];

/// A transaction with its derived category label attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizedTransaction {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub category: String,
}

/// First three characters of `description`, trimmed of surrounding
/// whitespace. Taking characters before trimming matters: `"FD 123"` must
/// yield `"FD"`, not `"FD "` or `"FD1"`.
pub fn description_prefix(description: &str) -> String {
    let prefix: String = description.chars().take(3).collect();
    prefix.trim().to_string()
}

/// Category label for a description: the mapped label when the prefix is in
/// [`PREFIX_RULES`], otherwise the raw prefix itself.
pub fn category_for(description: &str) -> String {
    let prefix = description_prefix(description);
    PREFIX_RULES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or(prefix)
}

/// Attach the derived category to a transaction.
pub fn categorize(txn: &Transaction) -> CategorizedTransaction {
    CategorizedTransaction {
        category: category_for(&txn.description),
        transaction: txn.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_mapped_prefixes() {
        assert_eq!(category_for("UPI/1234/grocer"), "UPI Transaction");
        assert_eq!(category_for("ATM/WDL/somewhere"), "ATM Withdrawal");
        assert_eq!(category_for("NEFT inward remittance"), "NEFT");
        assert_eq!(category_for("POS 5678 STORE"), "Card Payment");
        assert_eq!(category_for("EMI 04 of 12"), "EMI deduction");
        assert_eq!(category_for("BIL/000123/electricity"), "Bill Payment");
    }

    #[test]
    fn test_two_char_prefix_trims_before_lookup() {
        // "FD " trims down to the two-character rule key.
        assert_eq!(category_for("FD 123456 maturity"), "FD Maturity Interest");
    }

    #[test]
    fn test_gst_charges_share_one_label() {
        assert_eq!(category_for("CGST on charges"), "Non maintenance charges");
        assert_eq!(category_for("SGST on charges"), "Non maintenance charges");
        assert_eq!(category_for("Non maint fee Q2"), "Non maintenance charges");
        assert_eq!(
            category_for("Rev:Non maint fee Q2"),
            "Reverse Non maintenance charges"
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // "upi" does not match the "UPI" rule; the raw prefix passes through.
        assert_eq!(category_for("upi/1234/grocer"), "upi");
    }

    #[test]
    fn test_unmapped_prefix_passes_through() {
        assert_eq!(category_for("XYZ something"), "XYZ");
    }

    #[test]
    fn test_short_description() {
        assert_eq!(category_for("AB"), "AB");
        assert_eq!(category_for(""), "");
    }

    #[test]
    fn test_categorize_keeps_transaction_fields() {
        let txn = Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            "UPI/xyz",
            None,
            Some(500.0),
        );
        let cat = categorize(&txn);
        assert_eq!(cat.category, "UPI Transaction");
        assert_eq!(cat.transaction, txn);
    }
}
