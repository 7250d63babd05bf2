//! Row normalization executor.

use tracing::trace;

use leads_model::{CellValue, Field, NormalizedRow, RawRow, Status};

use crate::normalization::{canonical_alias, parse_number, split_tags, trim_cell};
use crate::types::{NormalizationContext, NormalizationType};

/// Normalizes one raw row.
///
/// Columns outside the canonical set are dropped. The owner always comes
/// from `context`, never from the file.
pub fn normalize_row(raw: &RawRow, context: &NormalizationContext) -> NormalizedRow {
    let mut row = NormalizedRow::new();
    for field in Field::ALL {
        let value = normalize_cell(*field, raw.get(field.as_str()), context);
        row.insert(*field, value);
    }
    row
}

/// Normalizes every row in order.
pub fn normalize_rows(rows: &[RawRow], context: &NormalizationContext) -> Vec<NormalizedRow> {
    let normalized: Vec<NormalizedRow> = rows
        .iter()
        .map(|raw| normalize_row(raw, context))
        .collect();
    trace!(rows = normalized.len(), "normalized rows");
    normalized
}

fn normalize_cell(field: Field, raw: Option<&str>, context: &NormalizationContext) -> CellValue {
    match NormalizationType::for_field(field) {
        NormalizationType::CopyTrimmed => trim_cell(raw),
        NormalizationType::AliasedCode => match trim_cell(raw) {
            CellValue::Text(value) => match canonical_alias(field, &value) {
                Some(canonical) => CellValue::text(canonical),
                None => CellValue::Text(value),
            },
            other => other,
        },
        NormalizationType::TagList => {
            CellValue::TextList(raw.map(split_tags).unwrap_or_default())
        }
        NormalizationType::NumericConversion => match trim_cell(raw) {
            CellValue::Text(value) => match parse_number(&value) {
                Some(number) => CellValue::Number(number),
                None => CellValue::Text(value),
            },
            other => other,
        },
        NormalizationType::DefaultStatus => match trim_cell(raw) {
            CellValue::Absent => CellValue::text(Status::default().as_str()),
            other => other,
        },
        NormalizationType::OwnerStamp => trim_cell(Some(context.owner_id.as_str())),
    }
}
