//! Type-alias tables mapping service field labels to canonical fields.
//!
//! The analysis service labels the same logical field differently depending on
//! document layout and vendor (`TOTAL` vs `AMOUNT_DUE`, `ITEM` vs
//! `DESCRIPTION`). These tables collapse that many-to-one. Labels with no
//! entry are ignored by the extractor. The maps are built once and read-only
//! for the process lifetime.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::models::extraction::CanonicalField;

lazy_static! {
    /// Document-summary labels.
    static ref SUMMARY_ALIASES: HashMap<&'static str, CanonicalField> = HashMap::from([
        ("TOTAL", CanonicalField::Amount),
        ("AMOUNT_DUE", CanonicalField::Amount),
        ("TOTAL_DUE", CanonicalField::Amount),
        ("GRAND_TOTAL", CanonicalField::Amount),
        ("SUBTOTAL", CanonicalField::Subtotal),
        ("SUB_TOTAL", CanonicalField::Subtotal),
        ("TAX", CanonicalField::Tax),
        ("TOTAL_TAX", CanonicalField::Tax),
        ("SALES_TAX", CanonicalField::Tax),
        ("VAT", CanonicalField::Tax),
        ("VENDOR_NAME", CanonicalField::Vendor),
        ("SUPPLIER_NAME", CanonicalField::Vendor),
        ("MERCHANT_NAME", CanonicalField::Vendor),
        ("INVOICE_RECEIPT_DATE", CanonicalField::Date),
        ("ORDER_DATE", CanonicalField::Date),
        ("DATE", CanonicalField::Date),
        ("INVOICE_RECEIPT_ID", CanonicalField::InvoiceNumber),
        ("INVOICE_NUMBER", CanonicalField::InvoiceNumber),
        ("RECEIPT_NUMBER", CanonicalField::InvoiceNumber),
        ("ORDER_ID", CanonicalField::InvoiceNumber),
    ]);

    /// Line-item labels.
    static ref LINE_ITEM_ALIASES: HashMap<&'static str, CanonicalField> = HashMap::from([
        ("ITEM", CanonicalField::Description),
        ("DESCRIPTION", CanonicalField::Description),
        ("PRODUCT_NAME", CanonicalField::Description),
        ("QUANTITY", CanonicalField::Quantity),
        ("QTY", CanonicalField::Quantity),
        ("PRICE", CanonicalField::UnitPrice),
        ("UNIT_PRICE", CanonicalField::UnitPrice),
        ("UNIT_COST", CanonicalField::UnitPrice),
    ]);
}

/// Canonical summary field for a service label, if one is mapped.
pub fn summary_field_for(type_name: &str) -> Option<CanonicalField> {
    SUMMARY_ALIASES
        .get(normalize(type_name).as_str())
        .copied()
}

/// Canonical line-item field for a service label, if one is mapped.
pub fn line_item_field_for(type_name: &str) -> Option<CanonicalField> {
    LINE_ITEM_ALIASES
        .get(normalize(type_name).as_str())
        .copied()
}

fn normalize(type_name: &str) -> String {
    type_name.trim().to_ascii_uppercase()
}
