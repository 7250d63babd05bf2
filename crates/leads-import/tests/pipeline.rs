//! End-to-end preview and confirm tests.

mod common;

use common::{MemoryCommitter, VALID_LINE, csv};
use leads_import::{ImportBatch, ImportError, ImportOptions, PreviewWindow, confirm, preview};
use leads_ingest::IngestError;
use leads_model::{Field, OwnerId};

fn owner() -> OwnerId {
    OwnerId::new("user-1")
}

fn run(bytes: &[u8]) -> Result<ImportBatch, ImportError> {
    preview(bytes, &owner(), &ImportOptions::default())
}

#[test]
fn required_headers_only_gives_clean_row() {
    let bytes = b"fullName,phone,city,propertyType,purpose,timeline,source\n\
\"Jane Doe\",\"9876543210\",\"Mohali\",\"Plot\",\"Buy\",\"Exploring\",\"Website\"\n";
    let batch = run(bytes).unwrap();

    assert_eq!(batch.clean_rows.len(), 1);
    assert!(batch.rejected_rows.is_empty());
    let clean = &batch.clean_rows[0];
    assert_eq!(clean.row, 2);
    assert_eq!(clean.values.text(Field::OwnerId), Some("user-1"));
    assert_eq!(clean.values.text(Field::Status), Some("New"));
}

#[test]
fn missing_headers_is_a_single_structural_error() {
    let bytes = b"fullName,phone,city\nJane Doe,9876543210,Mohali\n";
    let err = run(bytes).unwrap_err();

    assert!(err.is_structural());
    assert!(matches!(
        err,
        ImportError::Ingest(IngestError::MissingHeaders { .. })
    ));
    let report = err.report();
    assert_eq!(report.len(), 1);
    assert_eq!(report.entries[0].row, 0);
    assert_eq!(
        report.entries[0].messages,
        vec!["Missing headers: propertyType, purpose, timeline, source"]
    );
}

#[test]
fn row_cap_rejects_whole_file() {
    let lines = vec!["A,,1,Nowhere,Castle,,Lease,,,never,Fax,,,"; 201];
    let err = run(&csv(&lines)).unwrap_err();

    assert!(matches!(
        err,
        ImportError::RowCountExceeded {
            limit: 200,
            found: 201
        }
    ));
    assert_eq!(
        err.report().to_string(),
        "Row 0: CSV has more than 200 rows. Max 200 allowed.\n"
    );
}

#[test]
fn row_cap_follows_options() {
    let lines = vec![VALID_LINE; 3];
    let options = ImportOptions::default().with_max_rows(2);
    let err = preview(&csv(&lines), &owner(), &options).unwrap_err();
    assert_eq!(err.to_string(), "CSV has more than 2 rows. Max 2 allowed.");
}

#[test]
fn exactly_at_cap_is_accepted() {
    let lines = vec![VALID_LINE; 200];
    let batch = run(&csv(&lines)).unwrap();
    assert_eq!(batch.clean_rows.len(), 200);
    assert_eq!(batch.clean_rows.last().map(|r| r.row), Some(201));
}

#[test]
fn empty_file_is_structural() {
    let err = run(b"\n  \n").unwrap_err();
    assert_eq!(err.report().entries[0].messages, vec!["CSV file is empty"]);
}

#[test]
fn unterminated_quote_aborts_the_file() {
    let bytes = b"fullName,phone,city,propertyType,purpose,timeline,source\n\
\"Jane Doe,9876543210,Mohali,Plot,Buy,Exploring,Website\n";
    let err = run(bytes).unwrap_err();

    assert!(err.is_structural());
    assert!(matches!(
        err,
        ImportError::Ingest(IngestError::MalformedInput { .. })
    ));
    let report = err.report();
    assert_eq!(report.len(), 1);
    assert_eq!(report.entries[0].row, 0);
    assert_eq!(
        report.entries[0].messages,
        vec!["Malformed CSV: unterminated quoted field starting on line 2"]
    );
}

#[test]
fn blank_separator_lines_do_not_consume_row_numbers() {
    let short_name = "J,,9876543210,Mohali,Plot,,Buy,,,Exploring,Website,,,";
    let batch = run(&csv(&[VALID_LINE, ",,,,,,,,,,,,,", "   ", short_name])).unwrap();

    assert_eq!(batch.total_rows(), 2);
    assert_eq!(batch.clean_rows[0].row, 2);
    assert_eq!(batch.rejected_rows[0].row, 3);
}

#[test]
fn blank_owner_rejects_every_row() {
    let batch = preview(&csv(&[VALID_LINE]), &OwnerId::new("  "), &ImportOptions::default()).unwrap();

    assert!(batch.clean_rows.is_empty());
    assert_eq!(
        batch.rejected_rows[0].messages,
        vec!["ownerId: Owner ID is required"]
    );
}

#[test]
fn residential_without_bhk_is_rejected() {
    let line = "Jane Doe,,9876543210,Mohali,Apartment,,Buy,,,Exploring,Website,,,";
    let batch = run(&csv(&[line])).unwrap();
    assert!(batch.clean_rows.is_empty());
    assert_eq!(
        batch.rejected_rows[0].messages,
        vec!["bhk: BHK is required for Apartment and Villa"]
    );
}

#[test]
fn inverted_budget_is_rejected() {
    let line = "Jane Doe,,9876543210,Mohali,Plot,,Buy,500000,300000,Exploring,Website,,,";
    let batch = run(&csv(&[line])).unwrap();
    assert_eq!(
        batch.rejected_rows[0].messages,
        vec!["budgetMax: Budget max must be greater than or equal to budget min"]
    );
}

#[test]
fn bhk_shorthand_is_canonicalized() {
    let line = "Jane Doe,,9876543210,Mohali,Apartment,2,Buy,,,0-3m,Walk-in,,,";
    let batch = run(&csv(&[line])).unwrap();
    assert_eq!(batch.clean_rows.len(), 1);
    let values = &batch.clean_rows[0].values;
    assert_eq!(values.text(Field::Bhk), Some("Two"));
    assert_eq!(values.text(Field::Timeline), Some("ZeroTo3m"));
    assert_eq!(values.text(Field::Source), Some("WalkIn"));
}

#[test]
fn owner_column_in_file_is_overridden() {
    let bytes = b"fullName,phone,city,propertyType,purpose,timeline,source,ownerId\n\
Jane Doe,9876543210,Mohali,Plot,Buy,Exploring,Website,someone-else\n";
    let batch = run(bytes).unwrap();
    assert_eq!(
        batch.clean_rows[0].values.text(Field::OwnerId),
        Some("user-1")
    );
}

#[test]
fn mixed_file_report() {
    let bytes = csv(&[
        VALID_LINE,
        "Ravi Kumar,ravi@example,98765,Chandigarh,Apartment,,Buy,500000,300000,0-3m,Walk-in,,hot,",
        "A,,9876543210,Delhi,Villa,2,Lease,abc,,soon,Website,,,",
        "Priya,,9876543210,Panchkula,Office,,Rent,1000000,,>6m,Referral,,\"nri, investor\",Qualified",
    ]);
    let batch = run(&bytes).unwrap();

    let clean: Vec<usize> = batch.clean_rows.iter().map(|r| r.row).collect();
    assert_eq!(clean, vec![2, 5]);
    let tags = batch.clean_rows[1].values.get(Field::Tags).as_list().unwrap();
    assert_eq!(tags, ["nri", "investor"]);

    insta::assert_snapshot!("mixed_file_report", batch.error_report().to_string());
}

#[test]
fn preview_window_caps_display() {
    let lines = vec![VALID_LINE; 60];
    let batch = run(&csv(&lines)).unwrap();
    let window = PreviewWindow::new(&batch, ImportOptions::default().preview_limit);
    assert_eq!(window.rows.len(), 50);
    assert_eq!(
        window.truncation_note().as_deref(),
        Some("Showing first 50 of 60 rows...")
    );
}

#[test]
fn confirm_commits_clean_rows_only() {
    let bytes = csv(&[VALID_LINE, "J,,1,Mohali,Plot,,Buy,,,Exploring,Website,,,"]);
    let batch = run(&bytes).unwrap();
    let mut committer = MemoryCommitter::default();

    let inserted = confirm(&batch, &owner(), &mut committer, &ImportOptions::default()).unwrap();

    assert_eq!(inserted, 1);
    assert_eq!(committer.calls, 1);
    assert_eq!(committer.committed[0].0, owner());
    assert_eq!(committer.committed[0].1.text(Field::FullName), Some("Jane Doe"));
}

#[test]
fn confirm_without_clean_rows_never_calls_committer() {
    let batch = run(&csv(&["J,,1,Mohali,Plot,,Buy,,,Exploring,Website,,,"])).unwrap();
    let mut committer = MemoryCommitter::default();

    let err = confirm(&batch, &owner(), &mut committer, &ImportOptions::default()).unwrap_err();

    assert!(matches!(err, ImportError::NothingToImport));
    assert_eq!(err.report().entries[0].messages, vec!["No valid rows to import"]);
    assert_eq!(committer.calls, 0);
}

#[test]
fn strict_confirm_refuses_partial_batch() {
    let bytes = csv(&[VALID_LINE, "J,,1,Mohali,Plot,,Buy,,,Exploring,Website,,,"]);
    let batch = run(&bytes).unwrap();
    let mut committer = MemoryCommitter::default();

    let err = confirm(&batch, &owner(), &mut committer, &ImportOptions::strict()).unwrap_err();

    assert!(matches!(err, ImportError::PartialBatch { rejected: 1 }));
    assert_eq!(committer.calls, 0);
}

#[test]
fn commit_failure_is_relayed_verbatim() {
    let batch = run(&csv(&[VALID_LINE])).unwrap();
    let mut committer = MemoryCommitter::failing("database is read-only");

    let err = confirm(&batch, &owner(), &mut committer, &ImportOptions::default()).unwrap_err();

    assert_eq!(err.to_string(), "database is read-only");
    assert_eq!(committer.calls, 1);
}

#[test]
fn batch_survives_json_between_preview_and_confirm() {
    let batch = run(&csv(&[VALID_LINE, VALID_LINE])).unwrap();
    let json = serde_json::to_string(&batch).unwrap();
    let restored: ImportBatch = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, batch);

    let mut committer = MemoryCommitter::default();
    let inserted =
        confirm(&restored, &owner(), &mut committer, &ImportOptions::default()).unwrap();
    assert_eq!(inserted, 2);
}
