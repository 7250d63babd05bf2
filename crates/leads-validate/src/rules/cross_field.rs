//! Rules spanning more than one field.

use leads_model::{CellValue, Field, NormalizedRow, PropertyType};

use crate::issue::Issue;

/// A named check over a whole row.
#[derive(Debug, Clone, Copy)]
pub struct CrossFieldRule {
    pub name: &'static str,
    /// Field the violation is addressed to.
    pub field: Field,
    pub check: fn(&NormalizedRow) -> Option<Issue>,
}

pub const CROSS_FIELD_RULES: &[CrossFieldRule] = &[
    CrossFieldRule {
        name: "bhk-required-for-residential",
        field: Field::Bhk,
        check: bhk_required_for_residential,
    },
    CrossFieldRule {
        name: "budget-ordering",
        field: Field::BudgetMax,
        check: budget_ordering,
    },
];

fn bhk_required_for_residential(row: &NormalizedRow) -> Option<Issue> {
    let residential = row
        .text(Field::PropertyType)
        .and_then(|code| code.parse::<PropertyType>().ok())
        .is_some_and(|property_type| property_type.requires_bhk());
    let bhk_missing = match row.get(Field::Bhk) {
        CellValue::Absent => true,
        CellValue::Text(text) => text.trim().is_empty(),
        _ => false,
    };
    (residential && bhk_missing).then_some(Issue::BhkRequired)
}

fn budget_ordering(row: &NormalizedRow) -> Option<Issue> {
    let min = row.number(Field::BudgetMin)?;
    let max = row.number(Field::BudgetMax)?;
    (max < min).then_some(Issue::BudgetOrder)
}
