//! Single-field rules.

use leads_model::{Bhk, CellValue, City, Field, LeadSource, PropertyType, Purpose, Status};
use leads_model::{Timeline, Vocabulary};

use crate::checks::patterns::{is_email, is_phone};
use crate::issue::Issue;
use crate::rules::Category;

/// Text formats checked by regex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Email,
    Phone,
}

/// What a rule checks once a value is present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleKind {
    /// Text whose length in characters lies within bounds.
    Length {
        label: &'static str,
        min: Option<usize>,
        max: usize,
    },
    Pattern(Pattern),
    /// Text equal to one of the canonical codes.
    Enum { allowed: &'static [&'static str] },
    /// Number strictly greater than zero.
    PositiveNumber { label: &'static str },
    TextList,
    /// Text that must not be empty.
    NonEmpty { message: &'static str },
}

/// Constraint attached to one canonical field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub field: Field,
    pub required: bool,
    pub kind: RuleKind,
}

impl FieldRule {
    const fn required(field: Field, kind: RuleKind) -> Self {
        Self {
            field,
            required: true,
            kind,
        }
    }

    const fn optional(field: Field, kind: RuleKind) -> Self {
        Self {
            field,
            required: false,
            kind,
        }
    }

    pub fn category(&self) -> Category {
        match self.kind {
            RuleKind::Length { .. } | RuleKind::PositiveNumber { .. } => Category::Limit,
            RuleKind::Pattern(_) | RuleKind::TextList => Category::Format,
            RuleKind::Enum { .. } => Category::Terminology,
            RuleKind::NonEmpty { .. } => Category::Presence,
        }
    }

    /// Checks one cell. At most one issue is reported per field.
    pub fn check(&self, value: &CellValue) -> Option<Issue> {
        let field = self.field;
        if value.is_absent() {
            return match self.kind {
                RuleKind::NonEmpty { message } => Some(Issue::Blank { field, message }),
                _ => self.required.then_some(Issue::Required { field }),
            };
        }

        match self.kind {
            RuleKind::TextList => match value {
                CellValue::TextList(_) => None,
                other => Some(type_mismatch(field, "array", other)),
            },
            RuleKind::PositiveNumber { label } => match value {
                CellValue::Number(number) if *number > 0.0 => None,
                CellValue::Number(_) => Some(Issue::NotPositive { field, label }),
                other => Some(type_mismatch(field, "number", other)),
            },
            kind => match value {
                CellValue::Text(text) => check_text(field, kind, text),
                other => Some(type_mismatch(field, "string", other)),
            },
        }
    }

    /// One-line summary for field listings.
    pub fn describe(&self) -> String {
        let presence = if self.required { "required" } else { "optional" };
        let detail = match self.kind {
            RuleKind::Length {
                min: Some(min),
                max,
                ..
            } => format!("{min}-{max} characters"),
            RuleKind::Length { min: None, max, .. } => format!("at most {max} characters"),
            RuleKind::Pattern(Pattern::Email) => "email address".to_string(),
            RuleKind::Pattern(Pattern::Phone) => "10-15 digits".to_string(),
            RuleKind::Enum { allowed } => format!("one of {}", allowed.join(", ")),
            RuleKind::PositiveNumber { .. } => "positive number".to_string(),
            RuleKind::TextList => "comma-separated list".to_string(),
            RuleKind::NonEmpty { .. } => "non-empty".to_string(),
        };
        format!("{presence}, {detail}")
    }
}

fn check_text(field: Field, kind: RuleKind, text: &str) -> Option<Issue> {
    match kind {
        RuleKind::Length { label, min, max } => {
            let length = text.chars().count();
            match min {
                Some(min) if length < min => Some(Issue::TooShort { field, label, min }),
                _ if length > max => Some(Issue::TooLong { field, label, max }),
                _ => None,
            }
        }
        RuleKind::Pattern(Pattern::Email) => (!is_email(text)).then_some(Issue::InvalidEmail { field }),
        RuleKind::Pattern(Pattern::Phone) => (!is_phone(text)).then_some(Issue::InvalidPhone { field }),
        RuleKind::Enum { allowed } => (!allowed.contains(&text)).then(|| Issue::InvalidEnum {
            field,
            allowed,
            received: text.to_string(),
        }),
        RuleKind::NonEmpty { message } => {
            text.trim().is_empty().then_some(Issue::Blank { field, message })
        }
        RuleKind::PositiveNumber { .. } | RuleKind::TextList => None,
    }
}

fn type_mismatch(field: Field, expected: &'static str, value: &CellValue) -> Issue {
    Issue::TypeMismatch {
        field,
        expected,
        received: value.type_name(),
    }
}

/// Every single-field rule, in report order.
///
/// `bhk` is optional here; its residential requirement is a cross-field
/// rule.
pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule::required(
        Field::FullName,
        RuleKind::Length {
            label: "Full name",
            min: Some(2),
            max: 80,
        },
    ),
    FieldRule::optional(Field::Email, RuleKind::Pattern(Pattern::Email)),
    FieldRule::required(Field::Phone, RuleKind::Pattern(Pattern::Phone)),
    FieldRule::required(Field::City, RuleKind::Enum { allowed: City::CODES }),
    FieldRule::required(
        Field::PropertyType,
        RuleKind::Enum {
            allowed: PropertyType::CODES,
        },
    ),
    FieldRule::optional(Field::Bhk, RuleKind::Enum { allowed: Bhk::CODES }),
    FieldRule::required(
        Field::Purpose,
        RuleKind::Enum {
            allowed: Purpose::CODES,
        },
    ),
    FieldRule::optional(
        Field::BudgetMin,
        RuleKind::PositiveNumber {
            label: "Budget min",
        },
    ),
    FieldRule::optional(
        Field::BudgetMax,
        RuleKind::PositiveNumber {
            label: "Budget max",
        },
    ),
    FieldRule::required(
        Field::Timeline,
        RuleKind::Enum {
            allowed: Timeline::CODES,
        },
    ),
    FieldRule::required(
        Field::Source,
        RuleKind::Enum {
            allowed: LeadSource::CODES,
        },
    ),
    FieldRule::optional(
        Field::Notes,
        RuleKind::Length {
            label: "Notes",
            min: None,
            max: 1000,
        },
    ),
    FieldRule::optional(Field::Tags, RuleKind::TextList),
    FieldRule::optional(
        Field::Status,
        RuleKind::Enum {
            allowed: Status::CODES,
        },
    ),
    FieldRule::required(
        Field::OwnerId,
        RuleKind::NonEmpty {
            message: "Owner ID is required",
        },
    ),
];

/// Looks up the rule for a field.
pub fn field_rule(field: Field) -> Option<&'static FieldRule> {
    FIELD_RULES.iter().find(|rule| rule.field == field)
}
