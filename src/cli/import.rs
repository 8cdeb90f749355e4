//! CSV import CLI command

use std::path::Path;

use crate::config::Settings;
use crate::display::{format_outcome, format_preview};
use crate::error::{SplitmateError, SplitmateResult};
use crate::import::{CsvImportSession, MappingField};
use crate::storage::Storage;

/// Import expenses from a CSV file
///
/// Runs the full pipeline in one pass: parse, guess the column mapping,
/// preview with per-row status, then commit unless `--dry-run` was given.
pub fn handle_import_command(
    storage: &Storage,
    settings: &Settings,
    file: &str,
    dry_run: bool,
    no_skip_invalid: bool,
) -> SplitmateResult<()> {
    let text = std::fs::read_to_string(Path::new(file))
        .map_err(|e| SplitmateError::Io(format!("Failed to read {}: {}", file, e)))?;

    let names = settings.party_names();
    let mut session = CsvImportSession::new(names.clone());
    session.load(&text)?;

    println!(
        "Parsed {} rows with {} columns.\n",
        session.row_count(),
        session.headers().len()
    );

    println!("Column mapping:");
    for field in MappingField::ALL {
        let mapped = session.mapping().get(*field).unwrap_or("(not mapped)");
        let required = if field.is_required() { " (required)" } else { "" };
        println!("  {:12} -> {}{}", field.label(), mapped, required);
    }
    println!();

    session.set_skip_invalid(!no_skip_invalid);
    let preview = session.preview()?;
    print!("{}", format_preview(&preview, &names));

    if dry_run {
        println!("\nDry run: nothing was imported.");
        return Ok(());
    }

    if preview.valid == 0 {
        println!("\nNo valid rows to import.");
        return Ok(());
    }

    let outcome = session.commit(storage)?;
    print!("\n{}", format_outcome(&outcome));
    Ok(())
}
