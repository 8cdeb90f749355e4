//! Receipt field extraction
//!
//! Selects the best-confidence fields (merchant, total, date, line items)
//! from a document-analysis response and normalizes them into ledger values.
//! Extraction never fabricates data: an absent field is `None`, and low
//! overall confidence is a warning for the caller, never an error.

pub mod document;

pub use document::{AnalyzeExpenseResponse, ExpenseDocument, LineItem, SummaryField};

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Money;
use crate::normalize::{date_to_iso, money_to_minor_units};

/// Below this overall confidence the caller should ask a human to confirm
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.70;

/// Type labels that carry the true amount owed
const TOTAL_LABELS: &[&str] = &["TOTAL", "AMOUNT_DUE"];
/// Fallback only: a subtotal excludes tax and under-reports the amount
const SUBTOTAL_LABELS: &[&str] = &["SUBTOTAL"];

const VENDOR_LABELS: &[&str] = &["VENDOR_NAME"];
const DATE_LABELS: &[&str] = &["INVOICE_RECEIPT_DATE", "TRANSACTION_DATE"];

const ITEM_DESCRIPTION_LABELS: &[&str] = &["ITEM", "DESCRIPTION"];
const ITEM_PRICE_LABELS: &[&str] = &["PRICE", "AMOUNT"];
const ITEM_QUANTITY_LABELS: &[&str] = &["QUANTITY"];

/// The winning candidate for one wanted field
#[derive(Debug, Clone, PartialEq)]
pub struct BestField {
    pub type_text: String,
    pub value_text: String,
    /// Raw service confidence, 0-100
    pub confidence: f64,
}

/// One extracted line item
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReceiptLineItem {
    pub description: Option<String>,
    pub price: Option<Money>,
    pub quantity: Option<u32>,
}

/// The normalized result of scanning one receipt
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReceiptExtraction {
    pub merchant_name: Option<String>,
    pub total: Option<Money>,
    pub date: Option<NaiveDate>,
    /// Aggregate confidence, 0-1
    pub confidence: f64,
    pub line_items: Vec<ReceiptLineItem>,
}

impl ReceiptExtraction {
    /// True when the caller should ask for human confirmation
    pub fn needs_confirmation(&self) -> bool {
        self.confidence < LOW_CONFIDENCE_THRESHOLD
    }
}

/// Pick the highest-confidence field whose type label is in the wanted set
///
/// Ties are broken by input order: the first field seen at the winning
/// confidence wins. Fields without a value text never qualify.
pub fn pick_best_field(fields: &[SummaryField], wanted: &[&str]) -> Option<BestField> {
    let mut best: Option<BestField> = None;

    for field in fields {
        let Some(type_text) = field.type_text() else {
            continue;
        };
        if !wanted.contains(&type_text.as_str()) {
            continue;
        }
        let Some(value_text) = field.value_text() else {
            continue;
        };

        let confidence = field.confidence();
        let is_better = match &best {
            Some(current) => confidence > current.confidence,
            None => true,
        };
        if is_better {
            best = Some(BestField {
                type_text,
                value_text: value_text.to_string(),
                confidence,
            });
        }
    }

    best
}

/// Pick the total, preferring a real total over a subtotal
///
/// A subtotal is only accepted when no total-type field exists at all, even
/// if the subtotal was detected with higher confidence: a subtotal excludes
/// tax and would systematically under-report what is owed.
pub fn pick_best_total(fields: &[SummaryField]) -> Option<BestField> {
    pick_best_field(fields, TOTAL_LABELS).or_else(|| pick_best_field(fields, SUBTOTAL_LABELS))
}

/// Extract normalized receipt fields from a document-analysis response
pub fn extract(response: &AnalyzeExpenseResponse) -> ReceiptExtraction {
    let Some(document) = response.expense_documents.first() else {
        return ReceiptExtraction::default();
    };

    let fields = &document.summary_fields;
    let total = pick_best_total(fields);
    let vendor = pick_best_field(fields, VENDOR_LABELS);
    let date = pick_best_field(fields, DATE_LABELS);

    // Average confidence over the fields that were actually found; missing
    // fields do not drag the average down.
    let found: Vec<f64> = [&total, &vendor, &date]
        .iter()
        .filter_map(|f| f.as_ref().map(|b| b.confidence))
        .collect();
    let confidence = if found.is_empty() {
        0.0
    } else {
        found.iter().sum::<f64>() / found.len() as f64 / 100.0
    };

    let line_items = document
        .line_item_groups
        .iter()
        .flat_map(|group| &group.line_items)
        .filter_map(extract_line_item)
        .collect();

    ReceiptExtraction {
        merchant_name: vendor.map(|v| v.value_text),
        total: total.and_then(|t| money_to_minor_units(&t.value_text)),
        date: date.and_then(|d| date_to_iso(&d.value_text)),
        confidence,
        line_items,
    }
}

/// Extract one line item; items with neither a description nor a parseable
/// price are dropped
fn extract_line_item(item: &LineItem) -> Option<ReceiptLineItem> {
    let fields = &item.line_item_expense_fields;

    let description =
        pick_best_field(fields, ITEM_DESCRIPTION_LABELS).map(|f| f.value_text);
    let price = pick_best_field(fields, ITEM_PRICE_LABELS)
        .and_then(|f| money_to_minor_units(&f.value_text));
    let quantity = pick_best_field(fields, ITEM_QUANTITY_LABELS)
        .and_then(|f| parse_quantity(&f.value_text));

    if description.is_none() && price.is_none() {
        return None;
    }

    Some(ReceiptLineItem {
        description,
        price,
        quantity,
    })
}

/// Quantities are floored to non-negative integers
fn parse_quantity(text: &str) -> Option<u32> {
    let value: f64 = text.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(value.floor() as u32)
}
