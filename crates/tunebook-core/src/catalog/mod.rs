//! Song catalog: the `index.json` record set describing imported tunes.
//!
//! The catalog is read once at process start, mutated in memory for a whole
//! batch, and written back once at the end. There is no locking; concurrent
//! writers against the same file are unsupported.

mod persist;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Metadata for one imported document. Identity key is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRecord {
    /// Unique slug; also the stem of the stored document.
    pub id: String,
    /// Title from the `T:` field, or the id when the tune is untitled.
    pub title: String,
    /// URL as given by the user (before format normalization).
    pub source_url: String,
    /// Path of the stored document.
    pub filename: String,
}

/// In-memory catalog, serialized as `{"songs": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    songs: Vec<SongRecord>,
}

/// Errors loading or saving the catalog file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog I/O failed for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file exists but is not a valid catalog; it cannot be trusted.
    #[error("invalid catalog {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode catalog: {0}")]
    Encode(#[source] serde_json::Error),
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entry with the same `id` in place, or appends.
    pub fn upsert(&mut self, record: SongRecord) {
        match self.songs.iter_mut().find(|s| s.id == record.id) {
            Some(existing) => *existing = record,
            None => self.songs.push(record),
        }
    }

    pub fn get(&self, id: &str) -> Option<&SongRecord> {
        self.songs.iter().find(|s| s.id == id)
    }

    pub fn songs(&self) -> &[SongRecord] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl FromIterator<SongRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = SongRecord>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for record in iter {
            catalog.upsert(record);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(super) fn record(id: &str, title: &str) -> SongRecord {
        SongRecord {
            id: id.to_string(),
            title: title.to_string(),
            source_url: format!("https://example.com/{id}"),
            filename: format!("songs/{id}.abc"),
        }
    }

    #[test]
    fn upsert_appends_new_id() {
        let mut c = Catalog::new();
        c.upsert(record("reel", "Reel"));
        c.upsert(record("jig", "Jig"));
        assert_eq!(c.len(), 2);
        assert_eq!(c.songs()[1].id, "jig");
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut c: Catalog = [record("a", "A"), record("b", "B"), record("c", "C")]
            .into_iter()
            .collect();
        c.upsert(record("b", "B (new)"));
        assert_eq!(c.len(), 3);
        assert_eq!(c.songs()[1].title, "B (new)");
        assert_eq!(c.get("b").map(|s| s.title.as_str()), Some("B (new)"));
        let ids: Vec<_> = c.songs().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn serializes_under_songs_key() {
        let mut c = Catalog::new();
        c.upsert(record("reel", "Reel"));
        let v: serde_json::Value = serde_json::to_value(&c).unwrap();
        assert_eq!(v["songs"][0]["id"], "reel");
        assert_eq!(v["songs"][0]["source_url"], "https://example.com/reel");
        assert_eq!(v["songs"][0]["filename"], "songs/reel.abc");
    }
}
