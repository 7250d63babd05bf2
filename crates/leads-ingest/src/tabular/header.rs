//! Header row parsing and the required-header contract.

use std::collections::BTreeSet;

use csv::StringRecord;
use tracing::warn;

use leads_model::RawRow;

use crate::error::{IngestError, Result};

/// Column names from the header row, in file order.
///
/// Order is kept for preview rendering only; rows are keyed by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    pub columns: Vec<String>,
}

impl CsvHeaders {
    /// Builds headers from the first non-empty record.
    ///
    /// Names are trimmed. Blank names are kept as placeholders so column
    /// positions stay aligned, but a repeated non-blank name is rejected.
    pub fn from_record(record: &StringRecord) -> Result<Self> {
        let columns: Vec<String> = record.iter().map(normalize_header).collect();
        let mut seen = BTreeSet::new();
        for column in columns.iter().filter(|c| !c.is_empty()) {
            if !seen.insert(column.as_str()) {
                return Err(IngestError::DuplicateHeader {
                    header: column.clone(),
                });
            }
        }
        Ok(Self { columns })
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns true if the header carries the named column.
    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Keys a data record by header name. Cells past the last header are
    /// dropped; headers past the last cell are left out of the row.
    pub fn key_record(&self, record: &StringRecord) -> RawRow {
        self.columns
            .iter()
            .zip(record.iter())
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, value)| (name.as_str(), value))
            .collect()
    }
}

/// Normalizes a header value by trimming whitespace and a stray BOM.
fn normalize_header(value: &str) -> String {
    value.trim().trim_matches('\u{feff}').to_string()
}

/// Verifies that every required column is present.
///
/// Fails with [`IngestError::MissingHeaders`] listing every missing name in
/// the order given by `required`.
pub fn check_headers<S: AsRef<str>>(headers: &CsvHeaders, required: &[S]) -> Result<()> {
    let missing: Vec<String> = required
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| !headers.contains(name))
        .map(str::to_string)
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    warn!(missing = ?missing, "import file is missing required headers");
    Err(IngestError::MissingHeaders { missing })
}
