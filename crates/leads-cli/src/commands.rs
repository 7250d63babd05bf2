use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace};

use leads_cli::batch_file::{read_batch_file, write_batch_file};
use leads_cli::config::CliConfig;
use leads_cli::logging::redact_value;
use leads_cli::store::JsonFileStore;
use leads_import::{ImportBatch, ImportOptions, confirm, preview_file};
use leads_ingest::export_csv_file;
use leads_model::{Field, OwnerId};

use crate::cli::{CommitArgs, ExportArgs, PreviewArgs};
use crate::summary::{print_fields, print_preview};

/// Applies command line overrides on top of the configured options.
fn preview_options(config: &CliConfig, args: &PreviewArgs) -> ImportOptions {
    let mut options = config.import.clone();
    if let Some(max_rows) = args.max_rows {
        options = options.with_max_rows(max_rows);
    }
    if let Some(preview_limit) = args.preview_limit {
        options = options.with_preview_limit(preview_limit);
    }
    options
}

pub fn run_preview(args: &PreviewArgs, config: &CliConfig) -> Result<ImportBatch> {
    let options = preview_options(config, args);
    let owner = OwnerId::new(args.owner.as_str());
    let span = info_span!("preview_command", file = %args.file.display());
    let _guard = span.enter();

    let batch = preview_file(&args.file, &owner, &options)
        .with_context(|| format!("preview {}", args.file.display()))?;

    for clean in &batch.clean_rows {
        trace!(
            row = clean.row,
            full_name = redact_value(clean.values.text(Field::FullName).unwrap_or_default()),
            phone = redact_value(clean.values.text(Field::Phone).unwrap_or_default()),
            "clean row"
        );
    }
    for rejected in &batch.rejected_rows {
        debug!(row = rejected.row, issues = rejected.messages.len(), "rejected row");
    }

    if let Some(out) = &args.out {
        write_batch_file(out, &batch)?;
        info!(path = %out.display(), "batch saved");
        println!("Batch saved to {}", out.display());
    }
    print_preview(&batch, options.preview_limit);
    Ok(batch)
}

pub fn run_commit(args: &CommitArgs, config: &CliConfig) -> Result<usize> {
    let mut options = config.import.clone();
    if args.strict {
        options = options.with_allow_partial(false);
    }
    let owner = OwnerId::new(args.owner.as_str());
    let span = info_span!("commit_command", store = %args.store.display());
    let _guard = span.enter();

    let batch = read_batch_file(&args.batch)?;
    let mut store = JsonFileStore::new(&args.store);
    let inserted = confirm(&batch, &owner, &mut store, &options)
        .with_context(|| format!("commit {}", args.batch.display()))?;
    println!("Successfully inserted {inserted} rows.");
    Ok(inserted)
}

pub fn run_export(args: &ExportArgs) -> Result<usize> {
    let span = info_span!("export_command", store = %args.store.display());
    let _guard = span.enter();

    let store = JsonFileStore::new(&args.store);
    let records = store
        .load()
        .with_context(|| format!("load {}", args.store.display()))?;
    let written = export_csv_file(&args.out, &records)
        .with_context(|| format!("export {}", args.out.display()))?;
    info!(records = written, "export complete");
    println!("Exported {written} records to {}", args.out.display());
    Ok(written)
}

pub fn run_fields() -> Result<()> {
    print_fields();
    Ok(())
}
