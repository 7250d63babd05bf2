//! Enumerated vocabularies for buyer lead fields.
//!
//! Each vocabulary is a closed set of canonical codes. Import files are
//! expected to use these codes exactly; the normalizer rewrites a small
//! number of legacy spellings before validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::field::Field;

/// A closed set of canonical codes attached to one field.
pub trait Vocabulary: Copy + Sized + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];
    /// Canonical codes, in declaration order.
    const CODES: &'static [&'static str];

    /// Returns the canonical code.
    fn as_str(&self) -> &'static str;

    /// Parses an exact canonical code.
    fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.as_str() == code)
    }
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident for $field:ident {
            $($(#[$vmeta:meta])* $variant:ident => $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            /// Returns the canonical code.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }
        }

        impl Vocabulary for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];
            const CODES: &'static [&'static str] = &[$($code),+];

            fn as_str(&self) -> &'static str {
                $name::as_str(self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as Vocabulary>::from_code(s.trim())
                    .ok_or_else(|| format!("Unknown {} value: {s}", Field::$field))
            }
        }
    };
}

vocabulary! {
    /// City the buyer is looking in.
    City for City {
        Chandigarh => "Chandigarh",
        Mohali => "Mohali",
        Zirakpur => "Zirakpur",
        Panchkula => "Panchkula",
        Other => "Other",
    }
}

vocabulary! {
    /// Kind of property the buyer wants.
    PropertyType for PropertyType {
        Apartment => "Apartment",
        Villa => "Villa",
        Plot => "Plot",
        Office => "Office",
        Retail => "Retail",
    }
}

vocabulary! {
    /// Bedroom count (BHK) for residential property.
    Bhk for Bhk {
        Studio => "Studio",
        One => "One",
        Two => "Two",
        Three => "Three",
        Four => "Four",
    }
}

vocabulary! {
    /// Buy or rent.
    Purpose for Purpose {
        Buy => "Buy",
        Rent => "Rent",
    }
}

vocabulary! {
    /// How soon the buyer intends to act.
    Timeline for Timeline {
        ZeroTo3m => "ZeroTo3m",
        ThreeTo6m => "ThreeTo6m",
        MoreThan6m => "MoreThan6m",
        Exploring => "Exploring",
    }
}

vocabulary! {
    /// Channel the lead came in through.
    LeadSource for Source {
        Website => "Website",
        Referral => "Referral",
        WalkIn => "WalkIn",
        Call => "Call",
        Other => "Other",
    }
}

vocabulary! {
    /// Pipeline stage of the lead.
    Status for Status {
        /// Assigned to every imported lead that does not name a status.
        New => "New",
        Qualified => "Qualified",
        Contacted => "Contacted",
        Visited => "Visited",
        Negotiation => "Negotiation",
        Converted => "Converted",
        Dropped => "Dropped",
    }
}

impl PropertyType {
    /// Residential property types must state a BHK.
    pub fn requires_bhk(&self) -> bool {
        matches!(self, PropertyType::Apartment | PropertyType::Villa)
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::New
    }
}
