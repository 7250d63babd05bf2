//! Error types for lead file ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing lead files.
///
/// Every variant except the file system ones is a structural failure: the
/// whole file is rejected and no row is processed.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// File has no non-empty line to use as a header.
    #[error("CSV file is empty")]
    EmptyInput,

    /// File is encoded in something other than UTF-8.
    #[error("unsupported encoding {encoding}; save the file as UTF-8")]
    UnsupportedEncoding { encoding: &'static str },

    /// The reader could not make sense of the file structure.
    #[error("Malformed CSV: {message}")]
    MalformedInput { message: String },

    /// The same column name appears twice in the header.
    #[error("Malformed CSV: duplicate header '{header}'")]
    DuplicateHeader { header: String },

    // === Header Contract Errors ===
    /// Required columns are missing from the header.
    #[error("Missing headers: {}", missing.join(", "))]
    MissingHeaders { missing: Vec<String> },

    // === Export Errors ===
    /// Failed to serialize records.
    #[error("failed to write CSV: {source}")]
    CsvWrite {
        #[source]
        source: csv::Error,
    },
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        Self::MalformedInput {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
