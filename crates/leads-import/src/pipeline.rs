//! Preview and confirm entry points.

use std::path::Path;

use tracing::{info, info_span, warn};

use leads_ingest::{check_headers, parse_csv, read_file_bytes};
use leads_model::OwnerId;
use leads_normalization::{NormalizationContext, normalize_rows};

use crate::batch::{ImportBatch, aggregate, check_row_count};
use crate::committer::ImportCommitter;
use crate::error::{ImportError, Result};
use crate::options::ImportOptions;

/// Runs parse, header check, normalization, and validation over one file.
///
/// Nothing is persisted. Structural failures abort before any row is
/// validated.
pub fn preview(bytes: &[u8], owner: &OwnerId, options: &ImportOptions) -> Result<ImportBatch> {
    let span = info_span!("preview", bytes = bytes.len(), max_rows = options.max_rows);
    let _guard = span.enter();

    let parsed = info_span!("parse").in_scope(|| parse_csv(bytes))?;
    check_headers(&parsed.headers, &options.required_headers)?;
    check_row_count(parsed.rows.len(), options.max_rows)?;

    let context = NormalizationContext::new(owner.clone());
    let rows = info_span!("normalize").in_scope(|| normalize_rows(&parsed.rows, &context));
    aggregate(rows, options.max_rows)
}

/// Reads a file from disk and previews it.
pub fn preview_file(path: &Path, owner: &OwnerId, options: &ImportOptions) -> Result<ImportBatch> {
    let bytes = read_file_bytes(path)?;
    preview(&bytes, owner, options)
}

/// Refuses batches that must not reach the committer.
pub fn gate_confirm(batch: &ImportBatch, options: &ImportOptions) -> Result<()> {
    if batch.clean_rows.is_empty() {
        warn!("confirm requested with no clean rows");
        return Err(ImportError::NothingToImport);
    }
    if !options.allow_partial && batch.has_rejections() {
        warn!(
            rejected = batch.rejected_rows.len(),
            "strict confirm refused a partial batch"
        );
        return Err(ImportError::PartialBatch {
            rejected: batch.rejected_rows.len(),
        });
    }
    Ok(())
}

/// Commits the batch's clean rows.
///
/// The batch is not re-validated. The committer is called at most once and
/// its error, if any, is returned unchanged.
pub fn confirm<C>(
    batch: &ImportBatch,
    owner: &OwnerId,
    committer: &mut C,
    options: &ImportOptions,
) -> Result<usize>
where
    C: ImportCommitter + ?Sized,
{
    let span = info_span!("confirm", rows = batch.clean_rows.len());
    let _guard = span.enter();

    gate_confirm(batch, options)?;
    let records = batch.clean_records();
    let inserted = committer.commit(owner, &records)?;
    info!(inserted, "import committed");
    Ok(inserted)
}
