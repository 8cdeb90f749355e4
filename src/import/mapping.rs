//! Column-to-field mapping
//!
//! Guesses which spreadsheet column feeds each expense field from the header
//! names, and validates that every required field ended up mapped. Mappings
//! store header names (not indices) so a user-confirmed mapping survives
//! column reordering on re-upload.

use std::collections::HashMap;
use std::fmt;

/// The expense fields a CSV column can feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingField {
    Description,
    Amount,
    Date,
    Category,
    PaidBy,
    Note,
}

impl MappingField {
    /// All fields in display order
    pub const ALL: &'static [MappingField] = &[
        Self::Description,
        Self::Amount,
        Self::Date,
        Self::Category,
        Self::PaidBy,
        Self::Note,
    ];

    /// Whether a row without this field can never produce a draft
    pub const fn is_required(&self) -> bool {
        matches!(self, Self::Description | Self::Amount | Self::Date)
    }

    /// Human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Amount => "Amount",
            Self::Date => "Date",
            Self::Category => "Category",
            Self::PaidBy => "Paid by",
            Self::Note => "Note",
        }
    }

    /// Candidate header names, in priority order
    const fn candidates(&self) -> &'static [&'static str] {
        match self {
            Self::Description => &["description", "merchant", "name", "what", "item", "vendor"],
            Self::Amount => &["amount", "total", "price", "cost", "value"],
            Self::Date => &[
                "date",
                "when",
                "time",
                "purchased",
                "purchase date",
                "transaction date",
            ],
            Self::Category => &["category", "type"],
            Self::PaidBy => &["paid by", "payer", "paid", "who", "owner"],
            Self::Note => &["note", "notes", "memo", "comment", "details"],
        }
    }
}

impl fmt::Display for MappingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A correspondence between spreadsheet columns and expense fields
#[derive(Debug, Clone, Default)]
pub struct ColumnMapping {
    columns: HashMap<MappingField, String>,
}

impl ColumnMapping {
    /// The mapped header name for a field, if any
    pub fn get(&self, field: MappingField) -> Option<&str> {
        self.columns.get(&field).map(String::as_str)
    }

    /// Set or clear the mapped header for a field
    pub fn set(&mut self, field: MappingField, header: Option<String>) {
        match header {
            Some(h) if !h.trim().is_empty() => {
                self.columns.insert(field, h);
            }
            _ => {
                self.columns.remove(&field);
            }
        }
    }

    /// Required fields that are still unmapped
    pub fn missing_required(&self) -> Vec<MappingField> {
        MappingField::ALL
            .iter()
            .copied()
            .filter(|f| f.is_required() && self.get(*f).is_none())
            .collect()
    }

    /// Whether every required field is mapped
    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }
}

/// Lowercase, collapse every non-alphanumeric run into a single space
fn normalize_header(header: &str) -> String {
    let mut out = String::with_capacity(header.len());
    let mut pending_space = false;
    for c in header.trim().to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }
    out
}

/// Best-effort mapping guesses from header names
///
/// For each target field: exact normalized match against the candidate list
/// first, then a contains-either-way substring pass. Unmatched optional
/// fields stay unmapped; unmatched required fields surface through
/// `missing_required`.
pub fn guess_mapping(headers: &[String]) -> ColumnMapping {
    // Header order decides ties, so keep a list rather than a map
    let normed: Vec<(String, &str)> = headers
        .iter()
        .map(|h| (normalize_header(h), h.as_str()))
        .collect();

    let pick = |candidates: &[&str]| -> Option<String> {
        for candidate in candidates {
            let norm = normalize_header(candidate);
            if let Some((_, original)) = normed.iter().find(|(n, _)| *n == norm) {
                return Some((*original).to_string());
            }
        }
        // loose contains match
        for candidate in candidates {
            let norm = normalize_header(candidate);
            if let Some((_, original)) = normed
                .iter()
                .find(|(n, _)| !n.is_empty() && (n.contains(&norm) || norm.contains(n.as_str())))
            {
                return Some((*original).to_string());
            }
        }
        None
    };

    let mut mapping = ColumnMapping::default();
    for field in MappingField::ALL {
        mapping.set(*field, pick(field.candidates()));
    }
    mapping
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  Paid-By  "), "paid by");
        assert_eq!(normalize_header("Transaction_Date"), "transaction date");
        assert_eq!(normalize_header("AMOUNT"), "amount");
    }

    #[test]
    fn test_guess_exact_headers() {
        let mapping = guess_mapping(&headers(&["Description", "Amount", "Date"]));
        assert_eq!(mapping.get(MappingField::Description), Some("Description"));
        assert_eq!(mapping.get(MappingField::Amount), Some("Amount"));
        assert_eq!(mapping.get(MappingField::Date), Some("Date"));
        assert!(mapping.is_complete());
    }

    #[test]
    fn test_guess_alternative_names() {
        let mapping = guess_mapping(&headers(&["Merchant", "Total", "Purchase Date", "Memo"]));
        assert_eq!(mapping.get(MappingField::Description), Some("Merchant"));
        assert_eq!(mapping.get(MappingField::Amount), Some("Total"));
        assert_eq!(mapping.get(MappingField::Date), Some("Purchase Date"));
        assert_eq!(mapping.get(MappingField::Note), Some("Memo"));
    }

    #[test]
    fn test_guess_substring_match() {
        let mapping = guess_mapping(&headers(&["Item description", "Total cost (USD)", "When"]));
        assert_eq!(
            mapping.get(MappingField::Description),
            Some("Item description")
        );
        assert_eq!(mapping.get(MappingField::Amount), Some("Total cost (USD)"));
        assert_eq!(mapping.get(MappingField::Date), Some("When"));
    }

    #[test]
    fn test_unmatched_required_fields_surface() {
        let mapping = guess_mapping(&headers(&["Foo", "Bar"]));
        let missing = mapping.missing_required();
        assert!(missing.contains(&MappingField::Description));
        assert!(missing.contains(&MappingField::Amount));
        assert!(missing.contains(&MappingField::Date));
        assert!(!mapping.is_complete());
    }

    #[test]
    fn test_optional_fields_may_stay_unmapped() {
        let mapping = guess_mapping(&headers(&["Description", "Amount", "Date"]));
        assert_eq!(mapping.get(MappingField::Category), None);
        assert_eq!(mapping.get(MappingField::PaidBy), None);
        assert!(mapping.is_complete());
    }

    #[test]
    fn test_set_and_clear() {
        let mut mapping = ColumnMapping::default();
        mapping.set(MappingField::Amount, Some("Kosten".into()));
        assert_eq!(mapping.get(MappingField::Amount), Some("Kosten"));
        mapping.set(MappingField::Amount, None);
        assert_eq!(mapping.get(MappingField::Amount), None);
    }
}
