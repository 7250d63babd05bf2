//! Delimited table reading utilities.

mod header;
mod reader;

pub use header::{CsvHeaders, check_headers};
pub use reader::{ParsedCsv, parse_csv, read_csv_file, read_file_bytes};
