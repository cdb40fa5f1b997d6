//! Request and reply types shared by every front-end.

use serde::{Deserialize, Serialize};

/// Input of one calculation: an upper bound and the multiples to sum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplesRequest {
    /// Upper bound (exclusive for the scanner, inclusive for workers).
    #[serde(default)]
    pub total: u64,
    /// Multiples whose sequences are summed.
    #[serde(default)]
    pub multiples: Vec<u32>,
}

impl MultiplesRequest {
    #[must_use]
    pub fn new(total: u64, multiples: Vec<u32>) -> Self {
        Self { total, multiples }
    }
}

/// Result of one calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplesReply {
    pub total: u64,
}

impl From<u64> for MultiplesReply {
    fn from(total: u64) -> Self {
        Self { total }
    }
}
