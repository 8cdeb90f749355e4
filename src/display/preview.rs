//! Import preview and outcome formatting

use crate::import::{ImportOutcome, ImportPreview, PREVIEW_ROW_LIMIT};
use crate::models::PartyNames;

/// Format the preview table with a per-row status column
pub fn format_preview(preview: &ImportPreview, names: &PartyNames) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:>4} {:20} {:>10} {:10} {:12} {:14} {}\n",
        "Row", "Description", "Amount", "Date", "Paid by", "Category", "Status"
    ));
    output.push_str(&"-".repeat(90));
    output.push('\n');

    for row in &preview.rows {
        match &row.draft {
            Some(draft) => {
                output.push_str(&format!(
                    "{:>4} {:20} {:>10} {:10} {:12} {:14} OK\n",
                    row.row_number,
                    truncate(&draft.description, 20),
                    draft.amount.to_string(),
                    draft.date.format("%Y-%m-%d"),
                    truncate(names.name_of(draft.paid_by), 12),
                    draft.category.label(),
                ));
            }
            None => {
                output.push_str(&format!(
                    "{:>4} {:20} {:>10} {:10} {:12} {:14} {}\n",
                    row.row_number,
                    "",
                    "",
                    "",
                    "",
                    "",
                    row.errors.join("; ")
                ));
            }
        }
    }

    if preview.total > preview.rows.len() {
        output.push_str(&format!(
            "\nShowing first {} rows. Import will still use all {} parsed rows.\n",
            PREVIEW_ROW_LIMIT, preview.total
        ));
    }

    output.push_str(&format!(
        "\nTotal: {}  Valid: {}  Invalid: {}\n",
        preview.total, preview.valid, preview.invalid
    ));

    output
}

/// Format the commit outcome summary
pub fn format_outcome(outcome: &ImportOutcome) -> String {
    format!(
        "Import complete: {} created, {} failed, {} skipped\n",
        outcome.created, outcome.failed, outcome.skipped
    )
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::CsvImportSession;

    #[test]
    fn test_preview_marks_bad_rows() {
        let names = PartyNames::new("Sam", "Riley");
        let mut session = CsvImportSession::new(names.clone());
        session
            .load("description,amount,date\nDinner,5,2025-01-02\nBad,abc,2025-01-02\n")
            .unwrap();
        let preview = session.preview().unwrap();

        let text = format_preview(&preview, &names);
        assert!(text.contains("OK"));
        assert!(text.contains("Invalid amount"));
        assert!(text.contains("Total: 2  Valid: 1  Invalid: 1"));
    }

    #[test]
    fn test_outcome_summary() {
        let text = format_outcome(&ImportOutcome {
            created: 3,
            failed: 1,
            skipped: 2,
        });
        assert_eq!(text, "Import complete: 3 created, 1 failed, 2 skipped\n");
    }
}
