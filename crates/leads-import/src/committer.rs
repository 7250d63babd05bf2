//! Persistence boundary.

use leads_model::{NormalizedRow, OwnerId};

use crate::error::CommitError;

/// Destination for confirmed clean rows.
///
/// Implementations own atomicity. The pipeline calls `commit` at most
/// once per confirm, never retries, and relays any error verbatim.
pub trait ImportCommitter {
    /// Inserts `rows` on behalf of `owner` and returns the inserted count.
    fn commit(&mut self, owner: &OwnerId, rows: &[NormalizedRow]) -> Result<usize, CommitError>;
}
