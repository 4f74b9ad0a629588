//! Pagination window for repository queries

use serde::{Deserialize, Serialize};

/// An offset/limit pair applied to a query
///
/// Both bounds are optional; the default window is unrestricted, which is the
/// behavior a query gets when no pagination is supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Number of leading rows to skip
    pub skip: Option<u64>,

    /// Maximum number of rows to return
    pub take: Option<u64>,
}

impl Page {
    /// Create a bounded window
    pub fn window(skip: u64, take: u64) -> Self {
        Self {
            skip: Some(skip),
            take: Some(take),
        }
    }

    /// Create an unrestricted window
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Check whether the window restricts the result set at all
    pub fn is_unrestricted(&self) -> bool {
        self.skip.is_none() && self.take.is_none()
    }

    /// Offset as i64 for SQL queries
    pub fn offset_i64(&self) -> i64 {
        self.skip.unwrap_or(0) as i64
    }

    /// Limit as i64 for SQL queries, if bounded
    pub fn limit_i64(&self) -> Option<i64> {
        self.take.map(|take| take as i64)
    }
}
