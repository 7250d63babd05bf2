use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use leads_import::{ErrorReport, ImportBatch, PreviewWindow};
use leads_model::{CellValue, Field, NormalizedRow, REQUIRED_HEADERS};
use leads_validate::{Category, FIELD_RULES};

/// Columns shown in the preview table, after the row number.
const PREVIEW_FIELDS: &[(Field, &str)] = &[
    (Field::FullName, "Name"),
    (Field::Phone, "Phone"),
    (Field::City, "City"),
    (Field::PropertyType, "Property"),
    (Field::Bhk, "BHK"),
    (Field::Purpose, "Purpose"),
    (Field::Timeline, "Timeline"),
    (Field::Source, "Source"),
    (Field::Status, "Status"),
];

pub fn print_preview(batch: &ImportBatch, preview_limit: usize) {
    let window = PreviewWindow::new(batch, preview_limit);
    println!(
        "Rows: {}  Valid: {}  Rejected: {}",
        batch.total_rows(),
        batch.clean_rows.len(),
        batch.rejected_rows.len()
    );
    if !window.rows.is_empty() {
        println!("Preview: {} valid rows found", window.total);
        println!("{}", preview_table(&window));
        if let Some(note) = window.truncation_note() {
            println!("{note}");
        }
    }
    let report = batch.error_report();
    if !report.is_empty() {
        println!("{}", error_table(&report));
    }
}

pub fn print_report(report: &ErrorReport) {
    if !report.is_empty() {
        println!("{}", error_table(report));
    }
}

pub fn print_fields() {
    println!("{}", fields_table());
    println!("{}", category_table());
}

pub fn preview_table(window: &PreviewWindow<'_>) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Row")];
    header.extend(PREVIEW_FIELDS.iter().map(|(_, label)| header_cell(label)));
    header.push(header_cell("Budget"));
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);

    for clean in window.rows {
        let mut cells = vec![dim_cell(clean.row)];
        cells.extend(
            PREVIEW_FIELDS
                .iter()
                .map(|(field, _)| value_cell(clean.values.get(*field))),
        );
        cells.push(budget_cell(&clean.values));
        table.add_row(cells);
    }
    table
}

pub fn error_table(report: &ErrorReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Row"), header_cell("Errors")]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for entry in &report.entries {
        let row = if entry.row == 0 {
            Cell::new("file").fg(Color::Red).add_attribute(Attribute::Bold)
        } else {
            Cell::new(entry.row).fg(Color::Red)
        };
        table.add_row(vec![row, Cell::new(entry.messages.join("\n"))]);
    }
    table
}

pub fn fields_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Header"),
        header_cell("Rule"),
        header_cell("Category"),
    ]);
    apply_table_style(&mut table);
    for rule in FIELD_RULES {
        let header = if rule.field == Field::OwnerId {
            dim_cell("from --owner")
        } else if REQUIRED_HEADERS.contains(&rule.field) {
            Cell::new("required").fg(Color::Yellow)
        } else {
            dim_cell("optional")
        };
        table.add_row(vec![
            Cell::new(rule.field.as_str()).add_attribute(Attribute::Bold),
            header,
            Cell::new(rule.describe()),
            dim_cell(rule.category()),
        ]);
    }
    table
}

/// Legend for the category column of the fields table.
pub fn category_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Checks")]);
    apply_table_style(&mut table);
    for category in Category::all() {
        table.add_row(vec![
            Cell::new(category.label()).add_attribute(Attribute::Bold),
            dim_cell(category.description()),
        ]);
    }
    table
}

fn value_cell(value: &CellValue) -> Cell {
    match value {
        CellValue::Absent => dim_cell("-"),
        other => Cell::new(other.render()),
    }
}

fn budget_cell(values: &NormalizedRow) -> Cell {
    match (values.number(Field::BudgetMin), values.number(Field::BudgetMax)) {
        (None, None) => dim_cell("-"),
        (min, max) => {
            let format =
                |value: Option<f64>| value.map_or_else(|| "?".to_string(), |v| v.to_string());
            Cell::new(format!("{} - {}", format(min), format(max)))
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leads_import::{CleanRow, RejectedRow};

    fn batch() -> ImportBatch {
        ImportBatch {
            clean_rows: vec![CleanRow {
                row: 2,
                values: NormalizedRow::new()
                    .with(Field::FullName, "Jane Doe")
                    .with(Field::City, "Mohali")
                    .with(Field::BudgetMin, 500000.0),
            }],
            rejected_rows: vec![RejectedRow {
                row: 3,
                messages: vec!["city: Required".to_string()],
            }],
        }
    }

    #[test]
    fn test_preview_table_lists_clean_rows() {
        let batch = batch();
        let rendered = preview_table(&PreviewWindow::new(&batch, 50)).to_string();
        assert!(rendered.contains("Jane Doe"));
        assert!(rendered.contains("Mohali"));
        assert!(rendered.contains("500000 - ?"));
    }

    #[test]
    fn test_error_table_lists_messages() {
        let rendered = error_table(&batch().error_report()).to_string();
        assert!(rendered.contains("city: Required"));
        let structural = error_table(&ErrorReport::structural("CSV file is empty")).to_string();
        assert!(structural.contains("file"));
        assert!(structural.contains("CSV file is empty"));
    }

    #[test]
    fn test_fields_table_lists_every_rule() {
        let rendered = fields_table().to_string();
        for rule in FIELD_RULES {
            assert!(rendered.contains(rule.field.as_str()));
        }
        assert!(rendered.contains("--owner"));
    }

    #[test]
    fn test_category_table_explains_every_category() {
        let rendered = category_table().to_string();
        for category in Category::all() {
            assert!(rendered.contains(category.label()));
        }
        assert!(rendered.contains("Cross-field checks"));
    }
}
