//! Import configuration.

use serde::{Deserialize, Serialize};

use leads_model::REQUIRED_HEADERS;

/// Maximum number of data rows accepted in one file.
pub const DEFAULT_MAX_ROWS: usize = 200;

/// Number of clean rows shown in a preview.
pub const DEFAULT_PREVIEW_LIMIT: usize = 50;

/// Options controlling an import run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Files with more data rows than this are rejected wholesale.
    pub max_rows: usize,

    /// Header names that must all be present.
    pub required_headers: Vec<String>,

    /// Clean rows shown before the preview is truncated.
    pub preview_limit: usize,

    /// Allow confirming a batch that still has rejected rows.
    ///
    /// Only the clean rows are committed either way.
    pub allow_partial: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            required_headers: REQUIRED_HEADERS
                .iter()
                .map(|field| field.as_str().to_string())
                .collect(),
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            allow_partial: true,
        }
    }
}

impl ImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that refuse to confirm any batch with a rejected row.
    pub fn strict() -> Self {
        Self {
            allow_partial: false,
            ..Self::default()
        }
    }

    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    pub fn with_required_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_preview_limit(mut self, preview_limit: usize) -> Self {
        self.preview_limit = preview_limit;
        self
    }

    pub fn with_allow_partial(mut self, allow_partial: bool) -> Self {
        self.allow_partial = allow_partial;
        self
    }
}
