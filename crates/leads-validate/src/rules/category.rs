//! Rule categories.

use serde::{Deserialize, Serialize};

/// Broad class of a rule or issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Presence,
    Format,
    Limit,
    Terminology,
    Consistency,
}

impl Category {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Presence,
            Self::Format,
            Self::Limit,
            Self::Terminology,
            Self::Consistency,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Presence => "Presence",
            Self::Format => "Format",
            Self::Limit => "Limit",
            Self::Terminology => "Terminology",
            Self::Consistency => "Consistency",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Presence => "Required field checks",
            Self::Format => "Value shape and format checks",
            Self::Limit => "Length and range limits",
            Self::Terminology => "Canonical code checks",
            Self::Consistency => "Cross-field checks",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
