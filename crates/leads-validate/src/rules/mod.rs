//! Declarative rule tables.

mod category;
mod cross_field;
mod field_rules;

pub use category::Category;
pub use cross_field::{CROSS_FIELD_RULES, CrossFieldRule};
pub use field_rules::{FIELD_RULES, FieldRule, Pattern, RuleKind, field_rule};
