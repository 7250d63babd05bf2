//! Cell-level normalization functions.

mod aliases;
mod cells;

pub use aliases::{ALIASES, Alias, canonical_alias};
pub use cells::{parse_number, split_tags, trim_cell};
