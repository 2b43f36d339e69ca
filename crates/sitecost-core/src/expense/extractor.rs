//! Expense document field extraction.
//!
//! Walks the analysis-service response and produces the canonical
//! [`ExtractionResult`]: alias-normalized field names, typed values, and
//! verbatim confidence scores. Pure and total - identical input yields an
//! identical result, and no malformed field can panic or surface an error;
//! everything unparseable is simply absent from the output.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::document::{AnalysisResponse, TypedField};
use crate::models::extraction::{
    CanonicalField, ExtractionResult, FieldValue, LineItem, ValueKind,
};

use super::rules::{line_item_field_for, parse_amount, parse_date, summary_field_for};

/// Normalize one analysis response into a canonical expense record.
///
/// Only the first document in the response is processed; a response with no
/// documents (a receipt the service failed to recognize) yields an empty
/// result, not an error. Line items are emitted in input order, one per
/// detected item, including items where nothing was extractable.
pub fn parse_expense_document(response: &AnalysisResponse) -> ExtractionResult {
    let mut result = ExtractionResult::default();

    let Some(document) = response.documents.first() else {
        debug!("analysis response contains no documents");
        return result;
    };
    if response.documents.len() > 1 {
        debug!(
            skipped = response.documents.len() - 1,
            "multi-document response, processing the first document only"
        );
    }

    for field in &document.summary_fields {
        apply_field(
            field,
            summary_field_for,
            &mut result.fields,
            &mut result.confidence,
        );
    }

    for group in &document.line_item_groups {
        for raw_item in &group.line_items {
            let mut item = LineItem::default();
            for field in &raw_item.fields {
                apply_field(
                    field,
                    line_item_field_for,
                    &mut item.fields,
                    &mut item.confidence,
                );
            }
            result.line_items.push(item);
        }
    }

    debug!(
        fields = result.fields.len(),
        line_items = result.line_items.len(),
        "normalized expense document"
    );

    result
}

/// Normalize one typed field into the value/confidence maps.
fn apply_field(
    field: &TypedField,
    lookup: fn(&str) -> Option<CanonicalField>,
    values: &mut BTreeMap<CanonicalField, FieldValue>,
    confidence: &mut BTreeMap<CanonicalField, f32>,
) {
    let Some(canonical) = lookup(&field.type_name) else {
        return;
    };

    // Confidence is recorded verbatim on every recognized label, parse or no
    // parse. When several labels collapse onto one canonical field, the later
    // occurrence in input order wins.
    confidence.insert(canonical, field.confidence);

    let parsed = match canonical.kind() {
        ValueKind::Amount => parse_amount(&field.raw_text).map(FieldValue::Number),
        ValueKind::Date => parse_date(&field.raw_text).map(FieldValue::Date),
        ValueKind::Text => {
            let trimmed = field.raw_text.trim();
            (!trimmed.is_empty()).then(|| FieldValue::Text(trimmed.to_string()))
        }
    };

    // Last occurrence wins even when it fails to parse: an unparseable later
    // occurrence leaves the field absent rather than keeping the stale value
    // from an earlier alias.
    match parsed {
        Some(value) => {
            values.insert(canonical, value);
        }
        None => {
            values.remove(&canonical);
        }
    }
}
