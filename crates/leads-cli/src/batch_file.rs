//! Saved preview batches.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use leads_import::ImportBatch;

/// Writes a batch as pretty JSON.
pub fn write_batch_file(path: &Path, batch: &ImportBatch) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, batch)
        .with_context(|| format!("write batch {}", path.display()))?;
    writer.flush().with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

/// Reads a batch written by [`write_batch_file`].
pub fn read_batch_file(path: &Path) -> Result<ImportBatch> {
    let file = File::open(path).with_context(|| format!("open batch {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse batch {}", path.display()))
}
