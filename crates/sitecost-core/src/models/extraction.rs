//! Canonical expense extraction models.
//!
//! Every vendor-specific field label the analysis service emits is normalized
//! onto the closed [`CanonicalField`] vocabulary, and every extracted value is
//! carried as a typed [`FieldValue`] rather than raw OCR text.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Application-level expense attributes that raw field labels normalize into.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalField {
    /// Total amount due on the receipt or invoice.
    Amount,
    /// Issue/transaction date.
    Date,
    /// Vendor or merchant name.
    Vendor,
    /// Invoice or receipt identifier.
    InvoiceNumber,
    /// Pre-tax subtotal.
    Subtotal,
    /// Tax amount.
    Tax,
    /// Line item: product or service description.
    Description,
    /// Line item: quantity.
    Quantity,
    /// Line item: price per unit.
    UnitPrice,
}

/// How a canonical field's raw text is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Monetary or numeric value, parsed with the amount parser.
    Amount,
    /// Calendar date, parsed with the date parser.
    Date,
    /// Free text, stored trimmed.
    Text,
}

/// Summary-level vocabulary, in canonical order.
pub const SUMMARY_FIELDS: [CanonicalField; 6] = [
    CanonicalField::Amount,
    CanonicalField::Date,
    CanonicalField::Vendor,
    CanonicalField::InvoiceNumber,
    CanonicalField::Subtotal,
    CanonicalField::Tax,
];

/// Line-item vocabulary, in canonical order.
pub const LINE_ITEM_FIELDS: [CanonicalField; 3] = [
    CanonicalField::Description,
    CanonicalField::Quantity,
    CanonicalField::UnitPrice,
];

impl CanonicalField {
    /// Parser used for this field's raw text.
    pub fn kind(&self) -> ValueKind {
        match self {
            CanonicalField::Amount
            | CanonicalField::Subtotal
            | CanonicalField::Tax
            | CanonicalField::Quantity
            | CanonicalField::UnitPrice => ValueKind::Amount,
            CanonicalField::Date => ValueKind::Date,
            CanonicalField::Vendor
            | CanonicalField::InvoiceNumber
            | CanonicalField::Description => ValueKind::Text,
        }
    }

    /// Whether the field belongs to the document-summary vocabulary.
    pub fn is_summary(&self) -> bool {
        SUMMARY_FIELDS.contains(self)
    }

    /// Whether the field belongs to the line-item vocabulary.
    pub fn is_line_item(&self) -> bool {
        LINE_ITEM_FIELDS.contains(self)
    }

    /// Canonical name as it appears in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::Amount => "amount",
            CanonicalField::Date => "date",
            CanonicalField::Vendor => "vendor",
            CanonicalField::InvoiceNumber => "invoiceNumber",
            CanonicalField::Subtotal => "subtotal",
            CanonicalField::Tax => "tax",
            CanonicalField::Description => "description",
            CanonicalField::Quantity => "quantity",
            CanonicalField::UnitPrice => "unitPrice",
        }
    }
}

/// A normalized field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Monetary amount or quantity, rounded to 2 decimal places.
    Number(Decimal),
    /// Calendar date; serializes as ISO `YYYY-MM-DD`.
    Date(NaiveDate),
    /// Trimmed text, never empty.
    Text(String),
}

impl FieldValue {
    /// Numeric value, if this is a number.
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Date value, if this is a date.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Text value, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// One extracted line item: a partial map over the line-item vocabulary plus
/// the service's confidence for each detected field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Normalized values. Absent key = not detected or unparseable.
    #[serde(default)]
    pub fields: BTreeMap<CanonicalField, FieldValue>,

    /// Detection confidence (0 - 100) per canonical field, recorded verbatim
    /// on every recognized label, whether or not the value parsed.
    #[serde(default)]
    pub confidence: BTreeMap<CanonicalField, f32>,
}

impl LineItem {
    /// Whether nothing was extracted for this item.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.confidence.is_empty()
    }
}

/// Canonical result of normalizing one analysis response.
///
/// Constructed fresh on every extraction call and never mutated afterwards by
/// this crate. Absent keys mean "not found in input": an unparseable amount or
/// date is absent, never `0` or a placeholder date, so a missing value can
/// never masquerade as a real one in a stored expense record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Normalized summary values.
    #[serde(default)]
    pub fields: BTreeMap<CanonicalField, FieldValue>,

    /// Detection confidence (0 - 100) per canonical summary field, recorded
    /// verbatim on every recognized label, whether or not the value parsed.
    #[serde(default)]
    pub confidence: BTreeMap<CanonicalField, f32>,

    /// Extracted line items, in the exact order the service reported them.
    /// Items with no recognizable fields are kept as empty entries so the
    /// count always matches the input.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

impl ExtractionResult {
    /// Whether nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.confidence.is_empty() && self.line_items.is_empty()
    }

    /// Summary fields with no extracted value.
    pub fn missing_summary_fields(&self) -> Vec<CanonicalField> {
        SUMMARY_FIELDS
            .iter()
            .copied()
            .filter(|field| !self.fields.contains_key(field))
            .collect()
    }

    /// Summary fields whose confidence falls below `cutoff`.
    ///
    /// The threshold itself is caller policy (see `ExtractionConfig`); this
    /// is a pure query over the recorded scores.
    pub fn fields_below(&self, cutoff: f32) -> Vec<CanonicalField> {
        self.confidence
            .iter()
            .filter(|(_, score)| **score < cutoff)
            .map(|(field, _)| *field)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_field_kinds() {
        assert_eq!(CanonicalField::Amount.kind(), ValueKind::Amount);
        assert_eq!(CanonicalField::Subtotal.kind(), ValueKind::Amount);
        assert_eq!(CanonicalField::Tax.kind(), ValueKind::Amount);
        assert_eq!(CanonicalField::UnitPrice.kind(), ValueKind::Amount);
        assert_eq!(CanonicalField::Quantity.kind(), ValueKind::Amount);
        assert_eq!(CanonicalField::Date.kind(), ValueKind::Date);
        assert_eq!(CanonicalField::Vendor.kind(), ValueKind::Text);
        assert_eq!(CanonicalField::InvoiceNumber.kind(), ValueKind::Text);
        assert_eq!(CanonicalField::Description.kind(), ValueKind::Text);
    }

    #[test]
    fn test_field_scopes() {
        assert!(CanonicalField::Amount.is_summary());
        assert!(!CanonicalField::Amount.is_line_item());
        assert!(CanonicalField::UnitPrice.is_line_item());
        assert!(!CanonicalField::UnitPrice.is_summary());
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_string(&CanonicalField::InvoiceNumber).unwrap();
        assert_eq!(json, "\"invoiceNumber\"");
        let json = serde_json::to_string(&CanonicalField::UnitPrice).unwrap();
        assert_eq!(json, "\"unitPrice\"");
    }

    #[test]
    fn test_date_value_serializes_as_iso() {
        let value = FieldValue::Date(NaiveDate::from_ymd_opt(2025, 12, 15).unwrap());
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"2025-12-15\"");
    }

    #[test]
    fn test_missing_summary_fields() {
        let mut result = ExtractionResult::default();
        assert_eq!(result.missing_summary_fields(), SUMMARY_FIELDS.to_vec());

        result.fields.insert(
            CanonicalField::Amount,
            FieldValue::Number(Decimal::from_str("10.00").unwrap()),
        );
        let missing = result.missing_summary_fields();
        assert!(!missing.contains(&CanonicalField::Amount));
        assert!(missing.contains(&CanonicalField::Vendor));
    }

    #[test]
    fn test_fields_below_cutoff() {
        let mut result = ExtractionResult::default();
        result.confidence.insert(CanonicalField::Amount, 97.5);
        result.confidence.insert(CanonicalField::Vendor, 45.0);
        result.confidence.insert(CanonicalField::Tax, 80.0);

        // Cutoff is exclusive: a score equal to it does not need review.
        assert_eq!(result.fields_below(80.0), vec![CanonicalField::Vendor]);
        assert!(result.fields_below(10.0).is_empty());
    }
}
