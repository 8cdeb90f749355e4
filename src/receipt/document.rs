//! Typed schema for the external document-analysis response
//!
//! The OCR service returns a deeply nested structure over which we have no
//! control. Every field is optional by construction: absent data deserializes
//! to `None` or an empty list, and accessors never panic. Wire names are
//! PascalCase.

use serde::Deserialize;

/// Top-level analyze-expense response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AnalyzeExpenseResponse {
    pub expense_documents: Vec<ExpenseDocument>,
}

/// One analyzed document (receipts produce exactly one in practice)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ExpenseDocument {
    pub summary_fields: Vec<SummaryField>,
    pub line_item_groups: Vec<LineItemGroup>,
}

/// A labeled field with a detected value and confidence
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SummaryField {
    #[serde(rename = "Type")]
    pub field_type: Option<FieldType>,
    pub value_detection: Option<Detection>,
}

/// The service's classification of a field (e.g. `TOTAL`, `VENDOR_NAME`)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FieldType {
    pub text: Option<String>,
    pub confidence: Option<f64>,
}

/// Detected text with a confidence score (0-100)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Detection {
    pub text: Option<String>,
    pub confidence: Option<f64>,
}

/// A group of detected line items
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LineItemGroup {
    pub line_items: Vec<LineItem>,
}

/// One line item, itself a bag of labeled sub-fields
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LineItem {
    pub line_item_expense_fields: Vec<SummaryField>,
}

impl SummaryField {
    /// The upper-cased type label, if the service provided one
    pub fn type_text(&self) -> Option<String> {
        self.field_type
            .as_ref()
            .and_then(|t| t.text.as_deref())
            .map(|t| t.trim().to_uppercase())
            .filter(|t| !t.is_empty())
    }

    /// The detected value text, if any
    pub fn value_text(&self) -> Option<&str> {
        self.value_detection
            .as_ref()
            .and_then(|v| v.text.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Field confidence: value confidence, falling back to type confidence
    pub fn confidence(&self) -> f64 {
        self.value_detection
            .as_ref()
            .and_then(|v| v.confidence)
            .or_else(|| self.field_type.as_ref().and_then(|t| t.confidence))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes() {
        let resp: AnalyzeExpenseResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.expense_documents.is_empty());
    }

    #[test]
    fn test_partial_field_is_null_safe() {
        let json = r#"{"Type": {"Text": "total"}}"#;
        let field: SummaryField = serde_json::from_str(json).unwrap();
        assert_eq!(field.type_text().as_deref(), Some("TOTAL"));
        assert_eq!(field.value_text(), None);
        assert_eq!(field.confidence(), 0.0);
    }

    #[test]
    fn test_confidence_prefers_value_detection() {
        let json = r#"{
            "Type": {"Text": "TOTAL", "Confidence": 40.0},
            "ValueDetection": {"Text": "$12.34", "Confidence": 95.5}
        }"#;
        let field: SummaryField = serde_json::from_str(json).unwrap();
        assert_eq!(field.confidence(), 95.5);
        assert_eq!(field.value_text(), Some("$12.34"));
    }

    #[test]
    fn test_confidence_falls_back_to_type() {
        let json = r#"{
            "Type": {"Text": "TOTAL", "Confidence": 40.0},
            "ValueDetection": {"Text": "$12.34"}
        }"#;
        let field: SummaryField = serde_json::from_str(json).unwrap();
        assert_eq!(field.confidence(), 40.0);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let json = r#"{
            "ExpenseDocuments": [{
                "SummaryFields": [],
                "LineItemGroups": [],
                "Blocks": [{"weird": true}]
            }],
            "DocumentMetadata": {"Pages": 1}
        }"#;
        let resp: AnalyzeExpenseResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.expense_documents.len(), 1);
    }
}
