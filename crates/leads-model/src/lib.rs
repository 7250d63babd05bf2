//! Buyer lead data model.
//!
//! Shared types for every stage of the bulk import pipeline:
//!
//! - **Fields**: the fixed set of canonical column names ([`Field`])
//! - **Vocabularies**: enumerated values for city, property type, BHK, etc.
//! - **Cells**: the tagged cell value produced by normalization ([`CellValue`])
//! - **Rows**: raw header-keyed rows and normalized field-keyed rows
//!
//! # Example
//!
//! ```
//! use leads_model::{Bhk, CellValue, Field, NormalizedRow};
//!
//! let mut row = NormalizedRow::new();
//! row.insert(Field::Bhk, CellValue::text(Bhk::Two.as_str()));
//! assert_eq!(row.text(Field::Bhk), Some("Two"));
//! ```

mod enums;
mod field;
mod row;
mod value;

pub use enums::{Bhk, City, LeadSource, PropertyType, Purpose, Status, Timeline, Vocabulary};
pub use field::{CANONICAL_COLUMNS, Field, REQUIRED_HEADERS};
pub use row::{NormalizedRow, OwnerId, RawRow};
pub use value::CellValue;
