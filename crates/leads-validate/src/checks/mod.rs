//! Value-level checks used by the rule table.

pub mod patterns;
