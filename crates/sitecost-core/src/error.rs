//! Error types for the sitecost-core library.
//!
//! Normalization failures are not errors: an amount or date that cannot be
//! parsed degrades to an absent field in the extraction result. The variants
//! here cover the crate boundary only - malformed response payloads and
//! configuration file handling.

use thiserror::Error;

/// Main error type for the sitecost library.
#[derive(Error, Debug)]
pub enum SitecostError {
    /// The analysis response payload is not valid JSON for the expected shape.
    #[error("invalid analysis response: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while reading or writing a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the sitecost library.
pub type Result<T> = std::result::Result<T, SitecostError>;
