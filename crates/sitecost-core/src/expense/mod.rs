//! Expense document normalization.

mod extractor;
pub mod rules;

pub use extractor::parse_expense_document;
pub use rules::{parse_amount, parse_date};
