//! Error types for import runs.

use std::path::PathBuf;
use thiserror::Error;

use leads_ingest::IngestError;

use crate::report::ErrorReport;

/// Failure reported by an [`ImportCommitter`](crate::ImportCommitter).
#[derive(Debug, Error)]
pub enum CommitError {
    /// The store refused the batch.
    #[error("{message}")]
    Rejected { message: String },

    /// The store could not be read or written.
    #[error("failed to access record store {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store exists but does not hold a record list.
    #[error("record store {path} is unreadable: {message}")]
    Corrupt { path: PathBuf, message: String },
}

/// Whole-run failures.
///
/// Each one terminates the run; none is a per-row result.
#[derive(Debug, Error)]
pub enum ImportError {
    // === Structural Errors ===
    /// The file could not be read, parsed, or failed the header contract.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// The file has more data rows than allowed.
    #[error("CSV has more than {limit} rows. Max {limit} allowed.")]
    RowCountExceeded { limit: usize, found: usize },

    // === Confirm Errors ===
    /// Confirm was called on a batch with no clean rows.
    #[error("No valid rows to import")]
    NothingToImport,

    /// Strict confirm refused a batch that still has rejected rows.
    #[error("{rejected} row(s) failed validation; fix them before importing")]
    PartialBatch { rejected: usize },

    /// The committer failed; its message is relayed verbatim.
    #[error(transparent)]
    Commit(#[from] CommitError),
}

impl ImportError {
    /// Renders the failure as a single whole-file report entry.
    pub fn report(&self) -> ErrorReport {
        ErrorReport::structural(self.to_string())
    }

    /// True for failures found before any row was validated.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Ingest(_) | Self::RowCountExceeded { .. })
    }
}

/// Result type for import operations.
pub type Result<T> = std::result::Result<T, ImportError>;
