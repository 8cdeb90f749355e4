//! Receipt scan CLI command
//!
//! Reads a saved document-analysis response (JSON), extracts the best
//! fields, and optionally applies them as a new equal-split expense.

use std::path::Path;

use crate::classify;
use crate::config::Settings;
use crate::display::format_extraction;
use crate::error::{SplitmateError, SplitmateResult};
use crate::import::paid_by_from_text;
use crate::models::{Category, CreateExpenseInput, Party};
use crate::receipt::{self, AnalyzeExpenseResponse};
use crate::storage::{ExpenseStore, Storage};

/// Extract fields from a scanned receipt, optionally creating an expense
pub fn handle_scan_command(
    storage: &Storage,
    settings: &Settings,
    file: &str,
    apply: bool,
    paid_by: Option<String>,
) -> SplitmateResult<()> {
    let text = std::fs::read_to_string(Path::new(file))
        .map_err(|e| SplitmateError::Io(format!("Failed to read {}: {}", file, e)))?;

    let response: AnalyzeExpenseResponse = serde_json::from_str(&text)
        .map_err(|e| SplitmateError::Scan(format!("Not a document-analysis response: {}", e)))?;

    let extraction = receipt::extract(&response);
    print!("{}", format_extraction(&extraction));

    if !apply {
        return Ok(());
    }

    let amount = extraction.total.ok_or_else(|| {
        SplitmateError::Scan("No total was extracted; cannot create an expense".into())
    })?;

    let description = extraction
        .merchant_name
        .clone()
        .unwrap_or_else(|| "Scanned receipt".to_string());

    let date = extraction
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let category = extraction
        .merchant_name
        .as_deref()
        .and_then(classify::suggest_from_merchant)
        .unwrap_or(Category::Other);

    let names = settings.party_names();
    let paid_by = paid_by
        .map(|text| paid_by_from_text(&text, &names))
        .unwrap_or(Party::PartyA);

    let input = CreateExpenseInput::equal_split(description, amount, paid_by, category, date, None);
    let expense = storage.create_expense(input)?;

    println!(
        "\nCreated expense {}: {} {} ({})",
        expense.id,
        expense.description,
        expense.amount,
        expense.category.label()
    );
    Ok(())
}
