//! Shared fixtures for import tests.

#![allow(dead_code)]

use leads_import::{CommitError, ImportCommitter};
use leads_model::{NormalizedRow, OwnerId};

pub const HEADER: &str =
    "fullName,email,phone,city,propertyType,bhk,purpose,budgetMin,budgetMax,timeline,source,notes,tags,status";

pub const VALID_LINE: &str = "Jane Doe,,9876543210,Mohali,Plot,,Buy,,,Exploring,Website,,,";

/// Builds a file from the full header and the given data lines.
pub fn csv(lines: &[&str]) -> Vec<u8> {
    let mut text = String::from(HEADER);
    for line in lines {
        text.push('\n');
        text.push_str(line);
    }
    text.push('\n');
    text.into_bytes()
}

/// Committer that keeps rows in memory.
#[derive(Default)]
pub struct MemoryCommitter {
    pub calls: usize,
    pub committed: Vec<(OwnerId, NormalizedRow)>,
    pub fail_with: Option<String>,
}

impl MemoryCommitter {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }
}

impl ImportCommitter for MemoryCommitter {
    fn commit(&mut self, owner: &OwnerId, rows: &[NormalizedRow]) -> Result<usize, CommitError> {
        self.calls += 1;
        if let Some(message) = &self.fail_with {
            return Err(CommitError::Rejected {
                message: message.clone(),
            });
        }
        self.committed
            .extend(rows.iter().map(|row| (owner.clone(), row.clone())));
        Ok(rows.len())
    }
}
