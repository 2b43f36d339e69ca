//! Data models: the analysis-service input boundary, the canonical extraction
//! output, and consumer configuration.

pub mod config;
pub mod document;
pub mod extraction;

pub use config::ExtractionConfig;
pub use document::{AnalysisResponse, AnalyzedDocument, LineItemGroup, RawLineItem, TypedField};
pub use extraction::{
    CanonicalField, ExtractionResult, FieldValue, LineItem, ValueKind, LINE_ITEM_FIELDS,
    SUMMARY_FIELDS,
};
