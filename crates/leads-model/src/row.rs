//! Raw and normalized row types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::field::{CANONICAL_COLUMNS, Field};
use crate::value::CellValue;

static ABSENT: CellValue = CellValue::Absent;

/// One data record as read from the file, keyed by header name.
///
/// A header with no cell in this record (short row) is simply not present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: BTreeMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(header.into(), value.into());
    }

    /// Returns the raw cell text for a header, if the record has one.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells.get(header).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A row after normalization, keyed by canonical field.
///
/// Fields that were never set read as [`CellValue::Absent`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedRow {
    values: BTreeMap<Field, CellValue>,
}

impl NormalizedRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, value: CellValue) {
        self.values.insert(field, value);
    }

    /// Builder form of [`NormalizedRow::insert`].
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<CellValue>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    pub fn get(&self, field: Field) -> &CellValue {
        self.values.get(&field).unwrap_or(&ABSENT)
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        self.get(field).as_text()
    }

    pub fn number(&self, field: Field) -> Option<f64> {
        self.get(field).as_number()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &CellValue)> {
        self.values.iter().map(|(field, value)| (*field, value))
    }

    /// Renders the row back into raw cells under canonical headers.
    ///
    /// The owner is included so that re-normalizing keeps it, although the
    /// normalizer always overrides it with the caller's identity.
    pub fn to_raw_row(&self) -> RawRow {
        CANONICAL_COLUMNS
            .iter()
            .chain(std::iter::once(&Field::OwnerId))
            .filter(|field| !self.get(**field).is_absent())
            .map(|field| (field.as_str(), self.get(*field).render()))
            .collect()
    }
}

/// Identity of the user that owns imported leads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
