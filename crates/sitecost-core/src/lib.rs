//! Core library for construction expense tracking OCR.
//!
//! This crate provides:
//! - Data models for the document-analysis service's receipt output
//! - Locale-aware amount and date normalization
//! - Canonical expense field extraction with per-field confidence scores
//!
//! The document-analysis call itself, image handling, and expense persistence
//! live outside this crate; it takes the service's semi-structured response
//! and turns it into a typed record the expense workflow can store safely.

pub mod error;
pub mod expense;
pub mod models;

pub use error::{Result, SitecostError};
pub use expense::{parse_amount, parse_date, parse_expense_document};
pub use models::{
    AnalysisResponse, AnalyzedDocument, CanonicalField, ExtractionConfig, ExtractionResult,
    FieldValue, LineItem, LineItemGroup, RawLineItem, TypedField, ValueKind,
};
