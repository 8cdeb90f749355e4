//! Raw tabular text parsing
//!
//! Detects the delimiter from the first non-empty line, then hands the text
//! to the csv crate for quote-aware parsing (embedded delimiters and
//! newlines inside quoted fields, doubled-quote escaping). A header row is
//! required: zero detected headers is a fatal parse error.

use crate::error::{SplitmateError, SplitmateResult};

/// A parsed spreadsheet: headers plus raw data rows
#[derive(Debug, Clone)]
pub struct ParsedTable {
    pub delimiter: u8,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ParsedTable {
    /// Index of a header by exact name
    pub fn header_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell text by row and header name; empty when unmapped or short rows
    pub fn cell<'a>(&self, row: &'a [String], header: &str) -> &'a str {
        self.header_index(header)
            .and_then(|idx| row.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Detect the delimiter from the first non-empty line
///
/// Tabs are preferred when present, then commas, then semicolons, by
/// first-line frequency.
pub fn detect_delimiter(text: &str) -> u8 {
    let first_line = text
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");

    let tabs = first_line.matches('\t').count();
    let commas = first_line.matches(',').count();
    let semicolons = first_line.matches(';').count();

    if tabs > 0 && tabs >= commas && tabs >= semicolons {
        b'\t'
    } else if commas >= semicolons {
        b','
    } else {
        b';'
    }
}

/// Parse raw CSV/TSV text into headers and rows
///
/// Rows whose cells are all blank are dropped; rows shorter or longer than
/// the header are kept as-is (lookup pads with empty cells).
pub fn parse_table(text: &str) -> SplitmateResult<ParsedTable> {
    let delimiter = detect_delimiter(text);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| SplitmateError::Import(format!("Failed to read CSV header row: {}", e)))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(SplitmateError::Import(
            "Could not find a header row. Make sure the first row contains column names.".into(),
        ));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| SplitmateError::Import(format!("Failed to parse CSV row: {}", e)))?;
        let row: Vec<String> = record.iter().map(|cell| cell.trim().to_string()).collect();
        if row.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        rows.push(row);
    }

    Ok(ParsedTable {
        delimiter,
        headers,
        rows,
    })
}
