//! CSV ingestion pipeline
//!
//! A strictly forward-moving session: Upload -> Map -> Preview -> Done, with
//! a reset edge back to Upload from anywhere. Parsing and validation are
//! pure; the only side effect is the commit step's sequential writes through
//! the injected `ExpenseStore`.

pub mod mapping;
pub mod row;
pub mod table;

pub use mapping::{guess_mapping, ColumnMapping, MappingField};
pub use row::{paid_by_from_text, validate_row, PreviewRow, RowOverride};
pub use table::{detect_delimiter, parse_table, ParsedTable};

use std::collections::HashMap;

use crate::error::{SplitmateError, SplitmateResult};
use crate::models::PartyNames;
use crate::storage::ExpenseStore;

/// How many rows the preview renders; counts always cover every parsed row
pub const PREVIEW_ROW_LIMIT: usize = 250;

/// Pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStage {
    Upload,
    Map,
    Preview,
    Done,
}

/// Preview over the whole parsed file
///
/// `rows` is capped at `PREVIEW_ROW_LIMIT`, but the counts are computed over
/// all parsed rows so the commit step can never disagree with the summary.
#[derive(Debug, Clone)]
pub struct ImportPreview {
    pub rows: Vec<PreviewRow>,
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

/// Result of a committed batch
///
/// `created + failed + skipped` always equals the number of parsed rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOutcome {
    pub created: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// One CSV import from upload to commit
pub struct CsvImportSession {
    stage: ImportStage,
    names: PartyNames,
    table: Option<ParsedTable>,
    mapping: ColumnMapping,
    overrides: HashMap<usize, RowOverride>,
    skip_invalid: bool,
}

impl CsvImportSession {
    /// Start a fresh session in the Upload stage
    pub fn new(names: PartyNames) -> Self {
        Self {
            stage: ImportStage::Upload,
            names,
            table: None,
            mapping: ColumnMapping::default(),
            overrides: HashMap::new(),
            skip_invalid: true,
        }
    }

    /// Current stage
    pub fn stage(&self) -> ImportStage {
        self.stage
    }

    /// Start over: drop everything and return to Upload
    pub fn reset(&mut self) {
        self.stage = ImportStage::Upload;
        self.table = None;
        self.mapping = ColumnMapping::default();
        self.overrides.clear();
        self.skip_invalid = true;
    }

    /// Parse raw text and advance to the Map stage
    ///
    /// A fatal parse error (no header row) leaves the session in Upload.
    pub fn load(&mut self, text: &str) -> SplitmateResult<()> {
        if self.stage != ImportStage::Upload {
            return Err(SplitmateError::Import(
                "A file is already loaded; start over to upload a different one".into(),
            ));
        }

        let table = parse_table(text)?;
        tracing::debug!(
            headers = table.headers.len(),
            rows = table.rows.len(),
            "csv parsed"
        );

        self.mapping = guess_mapping(&table.headers);
        self.table = Some(table);
        self.stage = ImportStage::Map;
        Ok(())
    }

    /// Headers of the loaded file
    pub fn headers(&self) -> &[String] {
        self.table.as_ref().map(|t| t.headers.as_slice()).unwrap_or(&[])
    }

    /// Number of parsed data rows
    pub fn row_count(&self) -> usize {
        self.table.as_ref().map(|t| t.rows.len()).unwrap_or(0)
    }

    /// The current column mapping
    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    /// Adjust the column mapping
    pub fn set_mapping(&mut self, field: MappingField, header: Option<String>) {
        self.mapping.set(field, header);
    }

    /// Required fields still unmapped; non-empty blocks progression past Map
    pub fn mapping_errors(&self) -> Vec<MappingField> {
        self.mapping.missing_required()
    }

    /// Set a per-row correction
    pub fn set_override(&mut self, row_index: usize, row_override: RowOverride) {
        self.overrides.insert(row_index, row_override);
    }

    /// Toggle whether invalid rows are skipped at commit
    pub fn set_skip_invalid(&mut self, skip: bool) {
        self.skip_invalid = skip;
    }

    /// Validate every row and advance to the Preview stage
    pub fn preview(&mut self) -> SplitmateResult<ImportPreview> {
        if !matches!(self.stage, ImportStage::Map | ImportStage::Preview) {
            return Err(SplitmateError::Import(
                "Nothing to preview; upload a CSV first".into(),
            ));
        }

        let missing = self.mapping_errors();
        if !missing.is_empty() {
            let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
            return Err(SplitmateError::Import(format!(
                "Required fields are not mapped: {}",
                labels.join(", ")
            )));
        }

        let rows = self.validate_all();
        let total = rows.len();
        let valid = rows.iter().filter(|r| r.is_valid()).count();

        self.stage = ImportStage::Preview;
        Ok(ImportPreview {
            total,
            valid,
            invalid: total - valid,
            rows: rows.into_iter().take(PREVIEW_ROW_LIMIT).collect(),
        })
    }

    /// Commit valid drafts sequentially through the store
    ///
    /// Each row is one `create_expense` call; a per-row failure is logged and
    /// counted but never aborts the batch. With skip-invalid off, any invalid
    /// row refuses the whole commit before a single write happens.
    pub fn commit(&mut self, store: &dyn ExpenseStore) -> SplitmateResult<ImportOutcome> {
        if self.stage != ImportStage::Preview {
            return Err(SplitmateError::Import(
                "Preview the import before committing".into(),
            ));
        }

        let rows = self.validate_all();
        let skipped = rows.iter().filter(|r| !r.is_valid()).count();

        if !self.skip_invalid && skipped > 0 {
            return Err(SplitmateError::Import(format!(
                "{} invalid row(s); enable skipping invalid rows or fix the CSV",
                skipped
            )));
        }

        let mut created = 0usize;
        let mut failed = 0usize;

        // One in-flight create at a time: every row's outcome is observable
        // before the next begins, and a failure affects only its own row.
        for preview_row in &rows {
            let Some(draft) = &preview_row.draft else {
                continue;
            };

            match store.create_expense(draft.clone()) {
                Ok(expense) => {
                    tracing::debug!(row = preview_row.row_number, id = %expense.id, "row committed");
                    created += 1;
                }
                Err(e) => {
                    tracing::warn!(row = preview_row.row_number, error = %e, "row commit failed");
                    failed += 1;
                }
            }
        }

        tracing::info!(created, failed, skipped, "csv import finished");
        self.stage = ImportStage::Done;
        Ok(ImportOutcome {
            created,
            failed,
            skipped,
        })
    }

    /// Validate every parsed row with the current mapping and overrides
    fn validate_all(&self) -> Vec<PreviewRow> {
        let Some(table) = &self.table else {
            return Vec::new();
        };

        (0..table.rows.len())
            .map(|idx| {
                let row_override = self.overrides.get(&idx).copied().unwrap_or_default();
                validate_row(table, idx, &self.mapping, row_override, &self.names)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CreateExpenseInput, Expense, Money, Party};
    use std::cell::RefCell;

    /// Store double that can fail on chosen calls
    struct MockStore {
        created: RefCell<Vec<CreateExpenseInput>>,
        fail_on_calls: Vec<usize>,
        calls: RefCell<usize>,
    }

    impl MockStore {
        fn new() -> Self {
            Self::failing_on(vec![])
        }

        fn failing_on(fail_on_calls: Vec<usize>) -> Self {
            Self {
                created: RefCell::new(Vec::new()),
                fail_on_calls,
                calls: RefCell::new(0),
            }
        }
    }

    impl ExpenseStore for MockStore {
        fn create_expense(&self, input: CreateExpenseInput) -> SplitmateResult<Expense> {
            let call = *self.calls.borrow();
            *self.calls.borrow_mut() += 1;

            if self.fail_on_calls.contains(&call) {
                return Err(SplitmateError::Storage("simulated write failure".into()));
            }

            self.created.borrow_mut().push(input.clone());
            Ok(Expense::from_input(input))
        }
    }

    fn names() -> PartyNames {
        PartyNames::new("Sam", "Riley")
    }

    fn loaded_session(text: &str) -> CsvImportSession {
        let mut session = CsvImportSession::new(names());
        session.load(text).unwrap();
        session
    }

    #[test]
    fn test_round_trip_single_row() {
        let mut session =
            loaded_session("description,amount,date\n\"Dinner\",\"$12.34\",\"2025-01-02\"\n");

        let preview = session.preview().unwrap();
        assert_eq!(preview.total, 1);
        assert_eq!(preview.valid, 1);
        assert_eq!(preview.invalid, 0);

        let draft = preview.rows[0].draft.as_ref().unwrap();
        assert_eq!(draft.amount, Money::from_cents(1234));
        assert_eq!(draft.date.to_string(), "2025-01-02");

        let store = MockStore::new();
        let outcome = session.commit(&store).unwrap();
        assert_eq!(
            outcome,
            ImportOutcome {
                created: 1,
                failed: 0,
                skipped: 0
            }
        );
        assert_eq!(session.stage(), ImportStage::Done);
    }

    #[test]
    fn test_fatal_parse_error_stays_in_upload() {
        let mut session = CsvImportSession::new(names());
        assert!(session.load("").is_err());
        assert_eq!(session.stage(), ImportStage::Upload);
    }

    #[test]
    fn test_unmapped_required_field_blocks_preview() {
        let mut session = loaded_session("foo,bar\n1,2\n");
        assert!(!session.mapping_errors().is_empty());

        let err = session.preview().unwrap_err();
        assert!(err.to_string().contains("not mapped"));
    }

    #[test]
    fn test_commit_requires_preview() {
        let mut session =
            loaded_session("description,amount,date\nDinner,5,2025-01-02\n");
        let store = MockStore::new();
        assert!(session.commit(&store).is_err());
    }

    #[test]
    fn test_counts_cover_all_rows_beyond_render_limit() {
        let mut text = String::from("description,amount,date\n");
        for i in 0..300 {
            // every third row has a bad amount
            let amount = if i % 3 == 0 { "abc" } else { "5.00" };
            text.push_str(&format!("Row {},{},2025-01-02\n", i, amount));
        }

        let mut session = loaded_session(&text);
        let preview = session.preview().unwrap();

        assert_eq!(preview.total, 300);
        assert_eq!(preview.invalid, 100);
        assert_eq!(preview.valid, 200);
        assert_eq!(preview.rows.len(), PREVIEW_ROW_LIMIT);

        // commit agrees with the preview counts
        let store = MockStore::new();
        let outcome = session.commit(&store).unwrap();
        assert_eq!(outcome.created, 200);
        assert_eq!(outcome.skipped, 100);
        assert_eq!(outcome.created + outcome.failed + outcome.skipped, 300);
    }

    #[test]
    fn test_partial_failure_attempts_every_row() {
        let mut text = String::from("description,amount,date\n");
        for i in 0..5 {
            text.push_str(&format!("Row {},5.00,2025-01-02\n", i));
        }

        let mut session = loaded_session(&text);
        session.preview().unwrap();

        // second create call fails
        let store = MockStore::failing_on(vec![1]);
        let outcome = session.commit(&store).unwrap();

        assert_eq!(
            outcome,
            ImportOutcome {
                created: 4,
                failed: 1,
                skipped: 0
            }
        );
        assert_eq!(store.created.borrow().len(), 4);
    }

    #[test]
    fn test_skip_invalid_off_refuses_before_any_write() {
        let mut session = loaded_session(
            "description,amount,date\nGood,5,2025-01-02\nBad,abc,2025-01-02\n",
        );
        session.set_skip_invalid(false);
        session.preview().unwrap();

        let store = MockStore::new();
        let err = session.commit(&store).unwrap_err();
        assert!(err.to_string().contains("invalid row"));
        assert!(store.created.borrow().is_empty());
    }

    #[test]
    fn test_overrides_flow_into_commit() {
        let mut session =
            loaded_session("description,amount,date\nDinner,5,2025-01-02\n");
        session.set_override(
            0,
            RowOverride {
                paid_by: Some(Party::PartyB),
                category: Some(Category::Travel),
            },
        );
        session.preview().unwrap();

        let store = MockStore::new();
        session.commit(&store).unwrap();

        let created = store.created.borrow();
        assert_eq!(created[0].paid_by, Party::PartyB);
        assert_eq!(created[0].category, Category::Travel);
    }

    #[test]
    fn test_reset_returns_to_upload() {
        let mut session =
            loaded_session("description,amount,date\nDinner,5,2025-01-02\n");
        session.preview().unwrap();
        session.reset();

        assert_eq!(session.stage(), ImportStage::Upload);
        assert_eq!(session.row_count(), 0);
        assert!(session
            .load("description,amount,date\nLunch,7,2025-01-03\n")
            .is_ok());
    }

    #[test]
    fn test_tab_delimited_input() {
        let mut session = loaded_session("description\tamount\tdate\nDinner\t$8.00\t2025-01-02\n");
        let preview = session.preview().unwrap();
        assert_eq!(preview.valid, 1);
    }
}
