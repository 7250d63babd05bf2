//! Normalization context and per-field normalization types.

use serde::{Deserialize, Serialize};

use leads_model::{Field, OwnerId};

/// How a canonical field is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalizationType {
    /// Trimmed text, blank becomes absent.
    CopyTrimmed,
    /// Trimmed text with legacy spellings rewritten to canonical codes.
    AliasedCode,
    /// Comma-separated cell split into a list of trimmed, non-empty tags.
    TagList,
    /// Trimmed text coerced to a finite number when it parses as one.
    NumericConversion,
    /// Trimmed code, defaulting to `New` when absent.
    DefaultStatus,
    /// Replaced by the caller's identity; the file's value is ignored.
    OwnerStamp,
}

impl NormalizationType {
    /// Returns the normalization applied to a field.
    pub fn for_field(field: Field) -> Self {
        match field {
            Field::Bhk | Field::Timeline | Field::Source => NormalizationType::AliasedCode,
            Field::Tags => NormalizationType::TagList,
            Field::BudgetMin | Field::BudgetMax => NormalizationType::NumericConversion,
            Field::Status => NormalizationType::DefaultStatus,
            Field::OwnerId => NormalizationType::OwnerStamp,
            Field::FullName
            | Field::Email
            | Field::Phone
            | Field::City
            | Field::PropertyType
            | Field::Purpose
            | Field::Notes => NormalizationType::CopyTrimmed,
        }
    }
}

/// Inputs the normalizer needs from outside the file.
///
/// The owner is passed explicitly so the pipeline never reads session
/// state.
#[derive(Debug, Clone)]
pub struct NormalizationContext {
    pub owner_id: OwnerId,
}

impl NormalizationContext {
    pub fn new(owner_id: OwnerId) -> Self {
        Self { owner_id }
    }
}
