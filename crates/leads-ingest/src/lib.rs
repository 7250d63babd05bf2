//! Buyer lead file ingestion.
//!
//! This crate turns raw import bytes into header-keyed rows and checks the
//! header contract before any row is looked at. It also writes the reverse
//! direction: a record set serialized under the canonical columns.
//!
//! # Features
//!
//! - **CSV Parsing**: First non-empty line is the header; blank lines are skipped
//! - **Header Contract**: Fail fast when required columns are missing
//! - **Export**: Write normalized records as a CSV that re-imports cleanly
//!
//! # Example
//!
//! ```ignore
//! use leads_ingest::{check_headers, parse_csv};
//! use leads_model::REQUIRED_HEADERS;
//!
//! let parsed = parse_csv(bytes)?;
//! let required: Vec<&str> = REQUIRED_HEADERS.iter().map(|f| f.as_str()).collect();
//! check_headers(&parsed.headers, &required)?;
//! ```

mod error;
mod export;
mod tabular;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use tabular::{
    CsvHeaders, ParsedCsv, check_headers, parse_csv, read_csv_file, read_file_bytes,
};

// === Export ===
pub use export::{export_csv_file, write_csv};
