//! Business-rule validation for normalized buyer lead rows.
//!
//! Every [`FieldRule`] and every [`CrossFieldRule`] is evaluated for every
//! row; nothing short-circuits, so a rejected row carries the complete list
//! of problems.

mod checks;
mod issue;
mod rules;
mod validator;

pub use issue::{Issue, ValidationError};
pub use rules::{
    CROSS_FIELD_RULES, Category, CrossFieldRule, FIELD_RULES, FieldRule, Pattern, RuleKind,
    field_rule,
};
pub use validator::{validate, validate_row};
