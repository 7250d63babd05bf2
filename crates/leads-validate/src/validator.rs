//! Row validation.

use tracing::{debug, trace};

use leads_model::NormalizedRow;

use crate::issue::{Issue, ValidationError};
use crate::rules::{CROSS_FIELD_RULES, FIELD_RULES};

/// Runs every field rule, then every cross-field rule, over one row.
///
/// An empty result means the row is clean.
pub fn validate_row(row: &NormalizedRow) -> Vec<Issue> {
    let field_issues = FIELD_RULES
        .iter()
        .filter_map(|rule| rule.check(row.get(rule.field)));
    let cross_issues = CROSS_FIELD_RULES.iter().filter_map(|rule| (rule.check)(row));
    field_issues.chain(cross_issues).collect()
}

/// Validates one row and locates its violations at `row_index`.
pub fn validate(row: &NormalizedRow, row_index: usize) -> Vec<ValidationError> {
    let issues = validate_row(row);
    for issue in &issues {
        trace!(
            row = row_index,
            field = %issue.field(),
            category = %issue.category(),
            "rule violated"
        );
    }
    let errors: Vec<ValidationError> = issues
        .iter()
        .map(|issue| ValidationError::at_row(row_index, issue))
        .collect();
    if !errors.is_empty() {
        debug!(row = row_index, issues = errors.len(), "row rejected");
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use leads_model::Field;

    fn clean_row() -> NormalizedRow {
        NormalizedRow::new()
            .with(Field::FullName, "Jane Doe")
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
    fn test_clean_row_has_no_issues() {
        assert!(validate_row(&clean_row()).is_empty());
    }

    #[test]
    fn test_collects_every_issue() {
        let row = clean_row()
            .with(Field::FullName, "J")
            .with(Field::Phone, "12345")
            .with(Field::PropertyType, "Villa")
            .with(Field::BudgetMin, 500000.0)
            .with(Field::BudgetMax, 300000.0);
        let messages: Vec<String> = validate_row(&row).iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            vec![
                "fullName: Full name must be at least 2 characters",
                "phone: Phone must be 10-15 digits only",
                "bhk: BHK is required for Apartment and Villa",
                "budgetMax: Budget max must be greater than or equal to budget min",
            ]
        );
    }

    #[test]
    fn test_cross_rules_run_despite_field_failures() {
        let row = NormalizedRow::new()
            .with(Field::PropertyType, "Apartment")
            .with(Field::BudgetMin, 10.0)
            .with(Field::BudgetMax, 5.0);
        let issues = validate_row(&row);
        assert!(issues.contains(&Issue::BhkRequired));
        assert!(issues.contains(&Issue::BudgetOrder));
        assert!(issues.contains(&Issue::Required { field: Field::FullName }));
    }

    #[test]
    fn test_validate_locates_errors() {
        let row = clean_row().with(Field::City, "Delhi");
        let errors = validate(&row, 4);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].row, 4);
        assert_eq!(errors[0].field, Some(Field::City));
        assert_eq!(
            errors[0].to_string(),
            "city: Invalid enum value. Expected 'Chandigarh' | 'Mohali' | 'Zirakpur' | 'Panchkula' | 'Other', received 'Delhi'"
        );
    }

    #[test]
    fn test_validation_does_not_touch_row() {
        let row = clean_row().with(Field::Bhk, "5");
        let before = row.clone();
        let _ = validate(&row, 2);
        assert_eq!(row, before);
    }
}
