//! CSV export of stored lead records.
//!
//! Export is a plain serialization under [`CANONICAL_COLUMNS`]: no
//! validation, no error accumulation.

use std::io::Write;
use std::path::Path;

use leads_model::{CANONICAL_COLUMNS, NormalizedRow};

use crate::error::{IngestError, Result};

/// Writes records to `writer` and returns the number of data rows written.
pub fn write_csv<W: Write>(writer: W, rows: &[NormalizedRow]) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(CANONICAL_COLUMNS.iter().map(|field| field.as_str()))
        .map_err(|source| IngestError::CsvWrite { source })?;

    for row in rows {
        csv_writer
            .write_record(CANONICAL_COLUMNS.iter().map(|field| row.get(*field).render()))
            .map_err(|source| IngestError::CsvWrite { source })?;
    }

    csv_writer.flush().map_err(|e| IngestError::CsvWrite {
        source: e.into(),
    })?;
    tracing::debug!(rows = rows.len(), "exported records");
    Ok(rows.len())
}

/// Writes records to a CSV file, replacing any existing file.
pub fn export_csv_file(path: &Path, rows: &[NormalizedRow]) -> Result<usize> {
    let file = std::fs::File::create(path).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(file, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leads_model::{CellValue, Field};

    #[test]
    fn test_write_csv_header_and_cells() {
        let row = NormalizedRow::new()
            .with(Field::FullName, "Doe, Jane")
            .with(Field::Phone, "9876543210")
            .with(Field::BudgetMin, 500000.0)
            .with(Field::Tags, vec!["hot".to_string(), "nri".to_string()])
            .with(Field::Email, CellValue::Absent);

        let mut out = Vec::new();
        let written = write_csv(&mut out, &[row]).unwrap();
        assert_eq!(written, 1);

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some(
                "fullName,email,phone,city,propertyType,bhk,purpose,budgetMin,budgetMax,timeline,source,notes,tags,status"
            )
        );
        assert_eq!(
            lines.next(),
            Some("\"Doe, Jane\",,9876543210,,,,,500000,,,,,\"hot,nri\",")
        );
    }

    #[test]
    fn test_write_csv_empty_set_has_header_only() {
        let mut out = Vec::new();
        assert_eq!(write_csv(&mut out, &[]).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }
}
