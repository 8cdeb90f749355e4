//! Per-row validation
//!
//! Turns one raw spreadsheet row into either a draft expense or a list of
//! human-readable errors. Every applicable error is collected, not just the
//! first, so the preview can show the whole picture for a bad row.

use crate::classify;
use crate::models::{Category, CreateExpenseInput, Party, PartyNames};
use crate::normalize::{date_to_iso, money_to_minor_units};

use super::mapping::{ColumnMapping, MappingField};
use super::table::ParsedTable;

/// User-made corrections for a single row
#[derive(Debug, Clone, Copy, Default)]
pub struct RowOverride {
    pub paid_by: Option<Party>,
    pub category: Option<Category>,
}

/// One row's ingestion result, independent of whether it is committed
#[derive(Debug, Clone)]
pub struct PreviewRow {
    /// 1-based data row number (excluding the header row)
    pub row_number: usize,
    pub raw: Vec<String>,
    pub draft: Option<CreateExpenseInput>,
    pub errors: Vec<String>,
}

impl PreviewRow {
    /// Whether this row produced a draft
    pub fn is_valid(&self) -> bool {
        self.draft.is_some()
    }
}

/// Interpret free-text "paid by" values
///
/// Tries explicit party tokens, then the configured names, then relationship
/// words as a last resort. Defaults to Party A rather than guessing further.
pub fn paid_by_from_text(raw: &str, names: &PartyNames) -> Party {
    let token = classify::normalize_token(raw);
    if token.is_empty() {
        return Party::PartyA;
    }

    if matches!(token.as_str(), "partyb" | "partner2" | "p2" | "b" | "2") {
        return Party::PartyB;
    }
    if matches!(token.as_str(), "partya" | "partner1" | "p1" | "a" | "1") {
        return Party::PartyA;
    }

    let name_b = classify::normalize_token(&names.party_b);
    if !name_b.is_empty() && token.contains(&name_b) {
        return Party::PartyB;
    }
    let name_a = classify::normalize_token(&names.party_a);
    if !name_a.is_empty() && token.contains(&name_a) {
        return Party::PartyA;
    }

    // Relationship words as a last resort; avoid being too clever here.
    if ["her", "wife", "girlfriend"].iter().any(|w| token.contains(w)) {
        return Party::PartyB;
    }
    if ["him", "husband", "boyfriend"].iter().any(|w| token.contains(w)) {
        return Party::PartyA;
    }

    Party::PartyA
}

/// Validate one row against the current mapping and overrides
pub fn validate_row(
    table: &ParsedTable,
    row_index: usize,
    mapping: &ColumnMapping,
    overrides: RowOverride,
    names: &PartyNames,
) -> PreviewRow {
    let row = &table.rows[row_index];
    let mut errors = Vec::new();

    let cell = |field: MappingField| mapped_cell(table, row, mapping, field);

    let description = cell(MappingField::Description).trim().to_string();
    if description.is_empty() {
        errors.push("Missing description".to_string());
    }

    let amount = money_to_minor_units(cell(MappingField::Amount));
    let amount = match amount {
        Some(a) if a.is_positive() => Some(a),
        _ => {
            errors.push("Invalid amount".to_string());
            None
        }
    };

    let date = date_to_iso(cell(MappingField::Date));
    if date.is_none() {
        errors.push("Invalid date".to_string());
    }

    let category = overrides
        .category
        .or_else(|| classify::classify(cell(MappingField::Category)))
        .unwrap_or(Category::Other);

    let paid_by = overrides
        .paid_by
        .unwrap_or_else(|| paid_by_from_text(cell(MappingField::PaidBy), names));

    let note = cell(MappingField::Note).trim();
    let note = if note.is_empty() {
        None
    } else {
        Some(note.to_string())
    };

    let draft = match (amount, date) {
        (Some(amount), Some(date)) if errors.is_empty() => Some(
            CreateExpenseInput::equal_split(description, amount, paid_by, category, date, note),
        ),
        _ => None,
    };

    PreviewRow {
        row_number: row_index + 1,
        raw: row.clone(),
        draft,
        errors,
    }
}

/// The cell feeding a target field, or empty when the field is unmapped
fn mapped_cell<'a>(
    table: &ParsedTable,
    row: &'a [String],
    mapping: &ColumnMapping,
    field: MappingField,
) -> &'a str {
    mapping
        .get(field)
        .map(|header| table.cell(row, header))
        .unwrap_or("")
}
