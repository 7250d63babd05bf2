//! Error report and preview rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::batch::{CleanRow, ImportBatch};

/// All problems for one spreadsheet row. Row 0 addresses the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub row: usize,
    pub messages: Vec<String>,
}

/// Row-addressed error report, one entry per failing row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorReport {
    pub entries: Vec<ReportEntry>,
}

impl ErrorReport {
    /// A report with a single whole-file entry.
    pub fn structural(message: impl Into<String>) -> Self {
        Self {
            entries: vec![ReportEntry {
                row: 0,
                messages: vec![message.into()],
            }],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl From<&ImportBatch> for ErrorReport {
    fn from(batch: &ImportBatch) -> Self {
        Self {
            entries: batch
                .rejected_rows
                .iter()
                .map(|rejected| ReportEntry {
                    row: rejected.row,
                    messages: rejected.messages.clone(),
                })
                .collect(),
        }
    }
}

impl ImportBatch {
    pub fn error_report(&self) -> ErrorReport {
        ErrorReport::from(self)
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "Row {}: {}", entry.row, entry.messages.join("; "))?;
        }
        Ok(())
    }
}

/// The first `limit` clean rows of a batch.
#[derive(Debug, Clone, Copy)]
pub struct PreviewWindow<'a> {
    pub rows: &'a [CleanRow],
    pub total: usize,
}

impl<'a> PreviewWindow<'a> {
    pub fn new(batch: &'a ImportBatch, limit: usize) -> Self {
        let shown = batch.clean_rows.len().min(limit);
        Self {
            rows: &batch.clean_rows[..shown],
            total: batch.clean_rows.len(),
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.rows.len() < self.total
    }

    /// Footer shown under a truncated preview.
    pub fn truncation_note(&self) -> Option<String> {
        self.is_truncated()
            .then(|| format!("Showing first {} of {} rows...", self.rows.len(), self.total))
    }
}
