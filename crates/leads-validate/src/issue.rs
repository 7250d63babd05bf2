//! Validation issue types.
//!
//! Each [`Issue`] variant carries only the data its message needs. Issues
//! are row-relative; [`ValidationError`] pins one to a spreadsheet row.

use serde::{Deserialize, Serialize};
use std::fmt;

use leads_model::Field;

use crate::rules::Category;

/// A single rule violation within one row.
#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    // Presence checks
    /// Required field is absent
    Required { field: Field },
    /// Field is present but empty where a value is mandatory
    Blank {
        field: Field,
        message: &'static str,
    },

    // Type checks
    /// Cell does not have the shape the field expects
    TypeMismatch {
        field: Field,
        expected: &'static str,
        received: &'static str,
    },

    // Limit checks
    TooShort {
        field: Field,
        label: &'static str,
        min: usize,
    },
    TooLong {
        field: Field,
        label: &'static str,
        max: usize,
    },
    NotPositive { field: Field, label: &'static str },

    // Format checks
    InvalidEmail { field: Field },
    InvalidPhone { field: Field },

    // Terminology checks
    /// Value is not one of the field's canonical codes
    InvalidEnum {
        field: Field,
        allowed: &'static [&'static str],
        received: String,
    },

    // Consistency checks
    /// Residential property without a BHK
    BhkRequired,
    /// Budget max below budget min
    BudgetOrder,
}

impl Issue {
    /// Field the issue is addressed to.
    pub fn field(&self) -> Field {
        match self {
            Issue::Required { field }
            | Issue::Blank { field, .. }
            | Issue::TypeMismatch { field, .. }
            | Issue::TooShort { field, .. }
            | Issue::TooLong { field, .. }
            | Issue::NotPositive { field, .. }
            | Issue::InvalidEmail { field }
            | Issue::InvalidPhone { field }
            | Issue::InvalidEnum { field, .. } => *field,
            Issue::BhkRequired => Field::Bhk,
            Issue::BudgetOrder => Field::BudgetMax,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Issue::Required { .. } | Issue::Blank { .. } => Category::Presence,
            Issue::TypeMismatch { .. } | Issue::InvalidEmail { .. } | Issue::InvalidPhone { .. } => {
                Category::Format
            }
            Issue::TooShort { .. } | Issue::TooLong { .. } | Issue::NotPositive { .. } => {
                Category::Limit
            }
            Issue::InvalidEnum { .. } => Category::Terminology,
            Issue::BhkRequired | Issue::BudgetOrder => Category::Consistency,
        }
    }

    /// Message text without the field prefix.
    pub fn message(&self) -> String {
        match self {
            Issue::Required { .. } => "Required".to_string(),
            Issue::Blank { message, .. } => (*message).to_string(),
            Issue::TypeMismatch {
                expected, received, ..
            } => format!("Expected {expected}, received {received}"),
            Issue::TooShort { label, min, .. } => {
                format!("{label} must be at least {min} characters")
            }
            Issue::TooLong { label, max, .. } => {
                format!("{label} must be at most {max} characters")
            }
            Issue::NotPositive { label, .. } => format!("{label} must be positive"),
            Issue::InvalidEmail { .. } => "Invalid email format".to_string(),
            Issue::InvalidPhone { .. } => "Phone must be 10-15 digits only".to_string(),
            Issue::InvalidEnum {
                allowed, received, ..
            } => {
                let expected = allowed
                    .iter()
                    .map(|code| format!("'{code}'"))
                    .collect::<Vec<_>>()
                    .join(" | ");
                format!("Invalid enum value. Expected {expected}, received '{received}'")
            }
            Issue::BhkRequired => "BHK is required for Apartment and Villa".to_string(),
            Issue::BudgetOrder => {
                "Budget max must be greater than or equal to budget min".to_string()
            }
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field(), self.message())
    }
}

/// A violation located in the input file.
///
/// `row` follows spreadsheet numbering: the header is row 1, the first
/// data row is row 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub row: usize,
    pub field: Option<Field>,
    pub message: String,
}

impl ValidationError {
    pub fn at_row(row: usize, issue: &Issue) -> Self {
        Self {
            row,
            field: Some(issue.field()),
            message: issue.message(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            Some(field) => write!(f, "{field}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}
