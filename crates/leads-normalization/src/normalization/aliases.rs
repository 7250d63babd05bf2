//! Legacy spellings of enumerated values.
//!
//! This table is the complete set of accepted aliases. Anything not listed
//! here passes through unchanged and is judged by the validator.

use leads_model::{Bhk, Field, LeadSource, Timeline};

/// One accepted alternate spelling of a canonical code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alias {
    pub field: Field,
    pub spelling: &'static str,
    pub canonical: &'static str,
    pub ignore_case: bool,
}

impl Alias {
    const fn exact(field: Field, spelling: &'static str, canonical: &'static str) -> Self {
        Self {
            field,
            spelling,
            canonical,
            ignore_case: false,
        }
    }

    const fn any_case(field: Field, spelling: &'static str, canonical: &'static str) -> Self {
        Self {
            field,
            spelling,
            canonical,
            ignore_case: true,
        }
    }

    /// Returns true if a trimmed cell is this spelling.
    pub fn matches(&self, value: &str) -> bool {
        if self.ignore_case {
            value.eq_ignore_ascii_case(self.spelling)
        } else {
            value == self.spelling
        }
    }
}

pub const ALIASES: &[Alias] = &[
    Alias::exact(Field::Bhk, "0", Bhk::Studio.as_str()),
    Alias::exact(Field::Bhk, "1", Bhk::One.as_str()),
    Alias::exact(Field::Bhk, "2", Bhk::Two.as_str()),
    Alias::exact(Field::Bhk, "3", Bhk::Three.as_str()),
    Alias::exact(Field::Bhk, "4", Bhk::Four.as_str()),
    Alias::any_case(Field::Bhk, "studio", Bhk::Studio.as_str()),
    Alias::exact(Field::Timeline, "0-3m", Timeline::ZeroTo3m.as_str()),
    Alias::exact(Field::Timeline, "3-6m", Timeline::ThreeTo6m.as_str()),
    Alias::exact(Field::Timeline, ">6m", Timeline::MoreThan6m.as_str()),
    Alias::any_case(Field::Timeline, "exploring", Timeline::Exploring.as_str()),
    Alias::exact(Field::Source, "Walk-in", LeadSource::WalkIn.as_str()),
];

/// Looks up the canonical code for a trimmed cell, if it is a known alias.
pub fn canonical_alias(field: Field, value: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|alias| alias.field == field && alias.matches(value))
        .map(|alias| alias.canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bhk_aliases() {
        assert_eq!(canonical_alias(Field::Bhk, "0"), Some("Studio"));
        assert_eq!(canonical_alias(Field::Bhk, "2"), Some("Two"));
        assert_eq!(canonical_alias(Field::Bhk, "4"), Some("Four"));
        assert_eq!(canonical_alias(Field::Bhk, "STUDIO"), Some("Studio"));
        assert_eq!(canonical_alias(Field::Bhk, "5"), None);
        assert_eq!(canonical_alias(Field::Bhk, "Two"), None);
    }

    #[test]
    fn test_timeline_aliases() {
        assert_eq!(canonical_alias(Field::Timeline, "0-3m"), Some("ZeroTo3m"));
        assert_eq!(canonical_alias(Field::Timeline, "3-6m"), Some("ThreeTo6m"));
        assert_eq!(canonical_alias(Field::Timeline, ">6m"), Some("MoreThan6m"));
        assert_eq!(canonical_alias(Field::Timeline, "EXPLORING"), Some("Exploring"));
        assert_eq!(canonical_alias(Field::Timeline, "0-3M"), None);
    }

    #[test]
    fn test_source_alias_is_exact() {
        assert_eq!(canonical_alias(Field::Source, "Walk-in"), Some("WalkIn"));
        assert_eq!(canonical_alias(Field::Source, "walk-in"), None);
    }

    #[test]
    fn test_aliases_are_field_scoped() {
        assert_eq!(canonical_alias(Field::Timeline, "2"), None);
        assert_eq!(canonical_alias(Field::City, "studio"), None);
    }

    #[test]
    fn test_aliases_target_canonical_codes() {
        use leads_model::Vocabulary;
        for alias in ALIASES {
            let codes = match alias.field {
                Field::Bhk => Bhk::CODES,
                Field::Timeline => Timeline::CODES,
                Field::Source => LeadSource::CODES,
                other => panic!("unexpected alias field {other}"),
            };
            assert!(codes.contains(&alias.canonical));
        }
    }
}
