//! Canonical field names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A canonical buyer lead field.
///
/// The string form (see [`Field::as_str`]) is the column header used in
/// import and export files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    Phone,
    City,
    PropertyType,
    Bhk,
    Purpose,
    BudgetMin,
    BudgetMax,
    Timeline,
    Source,
    Notes,
    Tags,
    Status,
    /// Stamped by the pipeline from the acting user; never read from a file.
    OwnerId,
}

/// Column order for export files and preview tables.
pub const CANONICAL_COLUMNS: &[Field] = &[
    Field::FullName,
    Field::Email,
    Field::Phone,
    Field::City,
    Field::PropertyType,
    Field::Bhk,
    Field::Purpose,
    Field::BudgetMin,
    Field::BudgetMax,
    Field::Timeline,
    Field::Source,
    Field::Notes,
    Field::Tags,
    Field::Status,
];

/// Headers an import file must carry. Optional columns may be left out.
pub const REQUIRED_HEADERS: &[Field] = &[
    Field::FullName,
    Field::Phone,
    Field::City,
    Field::PropertyType,
    Field::Purpose,
    Field::Timeline,
    Field::Source,
];

impl Field {
    /// Every field, including the pipeline-owned `ownerId`.
    pub const ALL: &'static [Field] = &[
        Field::FullName,
        Field::Email,
        Field::Phone,
        Field::City,
        Field::PropertyType,
        Field::Bhk,
        Field::Purpose,
        Field::BudgetMin,
        Field::BudgetMax,
        Field::Timeline,
        Field::Source,
        Field::Notes,
        Field::Tags,
        Field::Status,
        Field::OwnerId,
    ];

    /// Returns the canonical column name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::City => "city",
            Field::PropertyType => "propertyType",
            Field::Bhk => "bhk",
            Field::Purpose => "purpose",
            Field::BudgetMin => "budgetMin",
            Field::BudgetMax => "budgetMax",
            Field::Timeline => "timeline",
            Field::Source => "source",
            Field::Notes => "notes",
            Field::Tags => "tags",
            Field::Status => "status",
            Field::OwnerId => "ownerId",
        }
    }

    /// Looks up a field by its exact column name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.trim()).ok_or_else(|| format!("Unknown field: {s}"))
    }
}
