//! Batch result bookkeeping.

use crate::catalog::SongRecord;

/// A URL that could not be imported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportFailure {
    /// 1-based position in the batch.
    pub index: usize,
    pub url: String,
    /// Full cause chain, one line.
    pub message: String,
}

/// Outcome of one batch: successes in order, and per-URL failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub imported: Vec<SongRecord>,
    pub failures: Vec<ImportFailure>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.imported.len() + self.failures.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}
