//! Data models for the document-analysis service response.
//!
//! The analysis service runs its own vision pipeline over a photographed or
//! scanned receipt and returns the structure modeled here: a list of analyzed
//! documents, each carrying typed summary fields and line-item groups. This
//! crate only reads that structure; it is produced and owned by the service.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Raw response from the document-analysis service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    /// Documents recognized in the submitted image. Often a single entry;
    /// empty when recognition found nothing usable.
    #[serde(default)]
    pub documents: Vec<AnalyzedDocument>,
}

impl AnalysisResponse {
    /// Deserialize a raw service payload.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// One recognized document within the response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedDocument {
    /// Document-level fields (totals, vendor, dates, identifiers).
    #[serde(default)]
    pub summary_fields: Vec<TypedField>,

    /// Groups of itemized entries detected on the document.
    #[serde(default)]
    pub line_item_groups: Vec<LineItemGroup>,
}

/// A group of line items, as segmented by the analysis service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemGroup {
    #[serde(default)]
    pub line_items: Vec<RawLineItem>,
}

/// One itemized entry, a flat list of typed fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLineItem {
    #[serde(default)]
    pub fields: Vec<TypedField>,
}

/// A single detected field with the service's type label and confidence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedField {
    /// Service-specific type label (e.g. `TOTAL`, `VENDOR_NAME`).
    pub type_name: String,

    /// Detected text, verbatim from the service.
    pub raw_text: String,

    /// Detection confidence (0 - 100).
    pub confidence: f32,
}

impl TypedField {
    /// Convenience constructor, mainly for building test fixtures.
    pub fn new(type_name: impl Into<String>, raw_text: impl Into<String>, confidence: f32) -> Self {
        Self {
            type_name: type_name.into(),
            raw_text: raw_text.into(),
            confidence,
        }
    }
}
