//! JSON file record store.
//!
//! The store is a single JSON array of records. Each commit rewrites the
//! whole file through a temporary file in the same directory, so readers
//! see either the old or the new contents.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use leads_import::{CommitError, ImportCommitter};
use leads_model::{CellValue, Field, NormalizedRow, OwnerId};

/// Record store backed by one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every stored record. A missing file is an empty store.
    pub fn load(&self) -> Result<Vec<NormalizedRow>, CommitError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(CommitError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_reader(BufReader::new(file)).map_err(|e| CommitError::Corrupt {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn save(&self, records: &[NormalizedRow]) -> Result<(), CommitError> {
        let io_error = |source: std::io::Error| CommitError::Io {
            path: self.path.clone(),
            source,
        };
        let directory = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let temp_file = NamedTempFile::new_in(directory).map_err(io_error)?;
        let mut writer = BufWriter::new(temp_file);
        serde_json::to_writer_pretty(&mut writer, records).map_err(|e| CommitError::Io {
            path: self.path.clone(),
            source: e.into(),
        })?;
        writer.flush().map_err(io_error)?;
        let temp_file = writer
            .into_inner()
            .map_err(|e| io_error(e.into_error()))?;
        temp_file
            .persist(&self.path)
            .map_err(|e| io_error(e.error))?;
        Ok(())
    }
}

impl ImportCommitter for JsonFileStore {
    fn commit(&mut self, owner: &OwnerId, rows: &[NormalizedRow]) -> Result<usize, CommitError> {
        let mut records = self.load()?;
        let existing = records.len();
        records.extend(rows.iter().map(|row| {
            let mut record = row.clone();
            record.insert(Field::OwnerId, CellValue::text(owner.as_str()));
            record
        }));
        self.save(&records)?;
        debug!(existing, path = %self.path.display(), "record store rewritten");
        info!(inserted = rows.len(), "records appended");
        Ok(rows.len())
    }
}
