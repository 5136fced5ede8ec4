//! Progress events emitted while importing.

use std::fmt;
use std::path::PathBuf;

/// One user-visible step of an import run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportEvent {
    /// Starting URL `index` (1-based) of `total`.
    Processing {
        index: usize,
        total: usize,
        url: String,
    },
    /// About to GET the normalized URL.
    Fetching { url: String },
    /// Document stored and record built.
    Saved { title: String, path: PathBuf },
    /// Processing of `url` failed; the batch moves on.
    Failed { url: String, message: String },
}

impl ImportEvent {
    pub fn is_error(&self) -> bool {
        matches!(self, ImportEvent::Failed { .. })
    }
}

impl fmt::Display for ImportEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportEvent::Processing { index, total, url } => {
                write!(f, "[{}/{}] Processing: {}", index, total, url)
            }
            ImportEvent::Fetching { url } => write!(f, "Fetching ABC from: {}", url),
            ImportEvent::Saved { title, path } => {
                write!(f, "Saved: {} -> {}", title, path.display())
            }
            ImportEvent::Failed { url, message } => {
                write!(f, "Error processing {}: {}", url, message)
            }
        }
    }
}

/// Sink for import progress. Implemented for any `FnMut(&ImportEvent)`.
pub trait Progress {
    fn report(&mut self, event: &ImportEvent);
}

impl<F: FnMut(&ImportEvent)> Progress for F {
    fn report(&mut self, event: &ImportEvent) {
        self(event)
    }
}

/// Discards all events.
pub struct Silent;

impl Progress for Silent {
    fn report(&mut self, _event: &ImportEvent) {}
}
