//! Cell coercions shared by the executor.

use leads_model::CellValue;

/// Trims a raw cell; blank cells become [`CellValue::Absent`].
pub fn trim_cell(raw: Option<&str>) -> CellValue {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => CellValue::text(value),
        _ => CellValue::Absent,
    }
}

/// Splits a comma-separated tag cell.
///
/// Entries are trimmed and empty entries dropped, so `"a, ,b"` yields
/// `["a", "b"]` and a blank cell yields an empty list.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a trimmed numeric cell.
///
/// Only finite values count; `"NaN"`, `"inf"` and friends stay text.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}
