//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Limit/skip window for list queries
///
/// There is deliberately no upper bound on `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// Maximum number of items to return
    #[serde(default = "default_limit")]
    pub limit: u64,

    /// Number of items to skip
    #[serde(default)]
    pub skip: u64,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            skip: DEFAULT_SKIP,
        }
    }
}

impl PageWindow {
    pub fn new(limit: u64, skip: u64) -> Self {
        Self { limit, skip }
    }

    /// Build a window from raw query values
    ///
    /// Missing or unparsable values fall back to the defaults
    /// (`limit = 10`, `skip = 0`).
    pub fn from_raw(limit: Option<&str>, skip: Option<&str>) -> Self {
        Self {
            limit: parse_or(limit, DEFAULT_LIMIT),
            skip: parse_or(skip, DEFAULT_SKIP),
        }
    }

    /// Apply the window to an already filtered sequence
    ///
    /// A `limit` of 0 means no limit, as it does for the document store.
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        let take = match self.limit {
            0 => usize::MAX,
            limit => usize::try_from(limit).unwrap_or(usize::MAX),
        };
        items
            .into_iter()
            .skip(usize::try_from(self.skip).unwrap_or(usize::MAX))
            .take(take)
            .collect()
    }
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

fn parse_or(raw: Option<&str>, fallback: u64) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(fallback)
}

// Constants
pub const DEFAULT_LIMIT: u64 = 10;
pub const DEFAULT_SKIP: u64 = 0;
