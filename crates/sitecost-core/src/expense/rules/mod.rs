//! Normalization rules: alias tables and the amount/date parsers.
//!
//! Each parser is a pure function over a single raw string; failure is an
//! absent value, never an error or a default.

pub mod aliases;
pub mod amounts;
pub mod dates;

pub use aliases::{line_item_field_for, summary_field_for};
pub use amounts::parse_amount;
pub use dates::parse_date;
