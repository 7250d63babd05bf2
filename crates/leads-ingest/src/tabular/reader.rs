//! Whole-file CSV parsing into header-keyed rows.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use leads_model::RawRow;

use crate::error::{IngestError, Result};

use super::header::CsvHeaders;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A parsed import file: the header plus every non-blank data record.
#[derive(Debug, Clone)]
pub struct ParsedCsv {
    pub headers: CsvHeaders,
    pub rows: Vec<RawRow>,
}

/// Parses a complete CSV file held in memory.
///
/// The first non-empty record is the header. Records whose cells are all
/// blank are skipped wherever they appear. Any structural failure aborts
/// the parse with no partial result.
pub fn parse_csv(bytes: &[u8]) -> Result<ParsedCsv> {
    reject_utf16(bytes)?;
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    reject_unterminated_quote(bytes)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut headers: Option<CsvHeaders> = None;
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for record in reader.records() {
        let record = record?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            skipped += 1;
            continue;
        }
        match &headers {
            None => headers = Some(CsvHeaders::from_record(&record)?),
            Some(h) => rows.push(h.key_record(&record)),
        }
    }

    let headers = headers.ok_or(IngestError::EmptyInput)?;
    debug!(
        columns = headers.len(),
        rows = rows.len(),
        blank_lines = skipped,
        "parsed import file"
    );
    Ok(ParsedCsv { headers, rows })
}

/// Reads a whole import file into memory.
pub fn read_file_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Reads and parses a CSV file from disk.
pub fn read_csv_file(path: &Path) -> Result<ParsedCsv> {
    let bytes = read_file_bytes(path)?;
    parse_csv(&bytes)
}

/// The csv reader accepts an open quote at end of input and folds the
/// rest of the file into one cell, so catch it before reading records.
///
/// A quote only opens a quoted field at the start of a field; elsewhere it
/// is a literal character. Inside a quoted field `""` is an escaped quote.
fn reject_unterminated_quote(bytes: &[u8]) -> Result<()> {
    let mut line = 1usize;
    let mut opened_at = 0usize;
    let mut in_quotes = false;
    let mut field_start = true;
    let mut iter = bytes.iter().peekable();

    while let Some(&byte) = iter.next() {
        if byte == b'\n' {
            line += 1;
        }
        if in_quotes {
            if byte == b'"' {
                if iter.peek() == Some(&&b'"') {
                    iter.next();
                } else {
                    in_quotes = false;
                }
            }
            continue;
        }
        if byte == b'"' && field_start {
            in_quotes = true;
            opened_at = line;
        }
        field_start = matches!(byte, b',' | b'\n' | b'\r');
    }

    if in_quotes {
        return Err(IngestError::MalformedInput {
            message: format!("unterminated quoted field starting on line {opened_at}"),
        });
    }
    Ok(())
}

/// UTF-16 files parse as garbage rather than failing, so catch the BOM.
fn reject_utf16(bytes: &[u8]) -> Result<()> {
    match bytes.get(0..2) {
        Some([0xFF, 0xFE]) => Err(IngestError::UnsupportedEncoding {
            encoding: "UTF-16 LE",
        }),
        Some([0xFE, 0xFF]) => Err(IngestError::UnsupportedEncoding {
            encoding: "UTF-16 BE",
        }),
        _ => Ok(()),
    }
}
