//! Buyer lead bulk import.
//!
//! Ties the stages together into the two calls a caller makes:
//!
//! 1. [`preview`]: parse, check headers, normalize, validate, and partition
//!    a file into an [`ImportBatch`]. Nothing is persisted.
//! 2. [`confirm`]: hand the batch's clean rows to an [`ImportCommitter`].
//!
//! Structural failures (malformed file, missing headers, row cap) abort
//! the run with an [`ImportError`]; row failures are data in the batch.
//! Both render to the same [`ErrorReport`] shape, with row 0 addressing the
//! whole file.
//!
//! # Example
//!
//! ```
//! use leads_import::{ImportOptions, preview};
//! use leads_model::OwnerId;
//!
//! let csv = "fullName,phone,city,propertyType,purpose,timeline,source\n\
//!            Jane Doe,9876543210,Mohali,Plot,Buy,Exploring,Website\n";
//! let batch = preview(csv.as_bytes(), &OwnerId::new("user-1"), &ImportOptions::default())?;
//! assert_eq!(batch.clean_rows.len(), 1);
//! assert!(batch.rejected_rows.is_empty());
//! # Ok::<(), leads_import::ImportError>(())
//! ```

mod batch;
mod committer;
mod error;
mod options;
mod pipeline;
mod report;

pub use batch::{CleanRow, ImportBatch, RejectedRow, aggregate, check_row_count};
pub use committer::ImportCommitter;
pub use error::{CommitError, ImportError, Result};
pub use options::{DEFAULT_MAX_ROWS, DEFAULT_PREVIEW_LIMIT, ImportOptions};
pub use pipeline::{confirm, gate_confirm, preview, preview_file};
pub use report::{ErrorReport, PreviewWindow, ReportEntry};
