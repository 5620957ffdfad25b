//! cashlens-core: transaction model, category rules, and money rounding
//! shared by the ingest and analytics crates.

pub mod category;
pub mod money;
pub mod transaction;

pub use category::{CategorizedTransaction, categorize, category_for, description_prefix};
pub use money::round_half_even;
pub use transaction::Transaction;
