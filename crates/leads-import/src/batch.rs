//! Batch aggregation.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn};

use leads_model::NormalizedRow;
use leads_validate::validate;

use crate::error::{ImportError, Result};

/// Offset from a row's position in the data to its spreadsheet row number.
const FIRST_DATA_ROW: usize = 2;

/// A row that passed every rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRow {
    pub row: usize,
    pub values: NormalizedRow,
}

/// A row with at least one violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRow {
    pub row: usize,
    pub messages: Vec<String>,
}

/// Partitioned result of one preview.
///
/// Every input row lands in exactly one of the two lists, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportBatch {
    pub clean_rows: Vec<CleanRow>,
    pub rejected_rows: Vec<RejectedRow>,
}

impl ImportBatch {
    pub fn total_rows(&self) -> usize {
        self.clean_rows.len() + self.rejected_rows.len()
    }

    pub fn has_rejections(&self) -> bool {
        !self.rejected_rows.is_empty()
    }

    /// The clean rows' values, in input order.
    pub fn clean_records(&self) -> Vec<NormalizedRow> {
        self.clean_rows.iter().map(|clean| clean.values.clone()).collect()
    }
}

/// Fails if `count` data rows exceed `limit`.
pub fn check_row_count(count: usize, limit: usize) -> Result<()> {
    if count > limit {
        warn!(rows = count, limit, "row cap exceeded");
        return Err(ImportError::RowCountExceeded {
            limit,
            found: count,
        });
    }
    Ok(())
}

/// Validates each row and partitions the result.
///
/// The row cap is enforced before any row is validated. Rows are validated
/// independently; the n-th row (0-based) is reported as row n + 2.
pub fn aggregate(rows: Vec<NormalizedRow>, limit: usize) -> Result<ImportBatch> {
    let span = info_span!("aggregate", rows = rows.len(), limit);
    let _guard = span.enter();

    check_row_count(rows.len(), limit)?;

    let mut batch = ImportBatch::default();
    for (position, values) in rows.into_iter().enumerate() {
        let row = position + FIRST_DATA_ROW;
        let errors = validate(&values, row);
        if errors.is_empty() {
            batch.clean_rows.push(CleanRow { row, values });
        } else {
            batch.rejected_rows.push(RejectedRow {
                row,
                messages: errors.iter().map(ToString::to_string).collect(),
            });
        }
    }

    debug!(
        clean = batch.clean_rows.len(),
        rejected = batch.rejected_rows.len(),
        "partitioned rows"
    );
    info!(
        total = batch.total_rows(),
        clean = batch.clean_rows.len(),
        rejected = batch.rejected_rows.len(),
        "aggregation complete"
    );
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leads_model::Field;

    fn valid_row(name: &str) -> NormalizedRow {
        NormalizedRow::new()
            .with(Field::FullName, name)
            .with(Field::Phone, "9876543210")
            .with(Field::City, "Mohali")
            .with(Field::PropertyType, "Plot")
            .with(Field::Purpose, "Buy")
            .with(Field::Timeline, "Exploring")
            .with(Field::Source, "Website")
            .with(Field::Tags, Vec::<String>::new())
            .with(Field::Status, "New")
            .with(Field::OwnerId, "user-1")
    }

    #[test]
    fn test_partition_keeps_order_and_numbers_rows() {
        let rows = vec![
            valid_row("Alice"),
            valid_row("B"),
            valid_row("Carol"),
            valid_row("Dave").with(Field::City, "Delhi"),
        ];
        let batch = aggregate(rows, 200).unwrap();

        let clean: Vec<usize> = batch.clean_rows.iter().map(|r| r.row).collect();
        let rejected: Vec<usize> = batch.rejected_rows.iter().map(|r| r.row).collect();
        assert_eq!(clean, vec![2, 4]);
        assert_eq!(rejected, vec![3, 5]);
        assert_eq!(
            batch.rejected_rows[0].messages,
            vec!["fullName: Full name must be at least 2 characters"]
        );
        assert_eq!(batch.total_rows(), 4);
    }

    #[test]
    fn test_cap_checked_before_validation() {
        let rows = vec![NormalizedRow::new(); 3];
        let err = aggregate(rows, 2).unwrap_err();
        assert!(matches!(
            err,
            ImportError::RowCountExceeded { limit: 2, found: 3 }
        ));
    }

    #[test]
    fn test_cap_is_inclusive() {
        let rows = vec![valid_row("Alice"); 2];
        let batch = aggregate(rows, 2).unwrap();
        assert_eq!(batch.clean_rows.len(), 2);
    }

    #[test]
    fn test_empty_input_gives_empty_batch() {
        let batch = aggregate(Vec::new(), 200).unwrap();
        assert_eq!(batch, ImportBatch::default());
    }

    #[test]
    fn test_batch_serializes_camel_case() {
        let batch = aggregate(vec![valid_row("B")], 200).unwrap();
        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(json["cleanRows"], serde_json::json!([]));
        assert_eq!(json["rejectedRows"][0]["row"], 2);
    }
}
