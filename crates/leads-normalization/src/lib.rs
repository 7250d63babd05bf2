//! Buyer lead row normalization.
//!
//! Turns a header-keyed [`RawRow`](leads_model::RawRow) into a field-keyed
//! [`NormalizedRow`](leads_model::NormalizedRow). Normalization is pure and
//! total: values that cannot be coerced are passed through unchanged so the
//! validator can report them.
//!
//! # Overview
//!
//! Each canonical field is assigned a [`NormalizationType`]; the executor
//! applies, in order:
//!
//! 1. Trim every cell; blank cells become absent
//! 2. Rewrite known legacy spellings to canonical codes ([`ALIASES`])
//! 3. Split the tags cell into a list
//! 4. Coerce budget cells to numbers
//! 5. Default the status to `New`
//! 6. Stamp the owner from the [`NormalizationContext`]
//!
//! # Example
//!
//! ```
//! use leads_model::{Field, OwnerId, RawRow};
//! use leads_normalization::{NormalizationContext, normalize_row};
//!
//! let raw: RawRow = [("bhk", " 2 "), ("timeline", "0-3m")].into_iter().collect();
//! let context = NormalizationContext::new(OwnerId::new("user-1"));
//! let row = normalize_row(&raw, &context);
//!
//! assert_eq!(row.text(Field::Bhk), Some("Two"));
//! assert_eq!(row.text(Field::Timeline), Some("ZeroTo3m"));
//! assert_eq!(row.text(Field::Status), Some("New"));
//! assert_eq!(row.text(Field::OwnerId), Some("user-1"));
//! ```

mod executor;
mod types;

pub mod normalization;

// Core types
pub use types::{NormalizationContext, NormalizationType};

// Alias table
pub use normalization::{ALIASES, Alias, canonical_alias};

// Execution
pub use executor::{normalize_row, normalize_rows};
