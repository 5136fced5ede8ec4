//! Import orchestration: normalize → fetch → title → slug → write → record.
//!
//! Every URL in a batch is processed to completion before the next one starts.
//! A failing URL is reported and skipped; it never aborts the batch. The
//! catalog is loaded once before the batch and saved once after it.

mod batch;
mod event;

pub use batch::{BatchReport, ImportFailure};
pub use event::{ImportEvent, Progress, Silent};

use anyhow::{Context, Result};

use crate::abc::extract_title;
use crate::catalog::{Catalog, SongRecord};
use crate::config::TunebookConfig;
use crate::fetch::Fetch;
use crate::slug::slugify;
use crate::storage;
use crate::url_model::ensure_format_param;

/// Imports ABC documents into the configured songs directory.
pub struct Importer<F> {
    config: TunebookConfig,
    fetcher: F,
}

impl<F: Fetch> Importer<F> {
    pub fn new(config: TunebookConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &TunebookConfig {
        &self.config
    }

    /// Fallback id for the URL at 1-based position `index` (`tune1`, `tune2`, ...).
    pub fn default_id(&self, index: usize) -> String {
        format!("{}{}", self.config.default_id_prefix, index)
    }

    /// Fetches one URL and stores it. `default_id` is used when the title slugifies to nothing.
    pub fn import_url(
        &self,
        url: &str,
        default_id: &str,
        progress: &mut dyn Progress,
    ) -> Result<SongRecord> {
        let final_url =
            ensure_format_param(url, &self.config.format_param, &self.config.format_value);
        progress.report(&ImportEvent::Fetching {
            url: final_url.clone(),
        });
        let text = self.fetcher.fetch_text(&final_url)?;
        self.save_song(&text, url, default_id, progress)
    }

    /// Stores already-fetched document text under a free slug and returns its record.
    pub fn save_song(
        &self,
        abc_text: &str,
        source_url: &str,
        default_id: &str,
        progress: &mut dyn Progress,
    ) -> Result<SongRecord> {
        let dir = &self.config.songs_dir;
        let ext = &self.config.extension;

        let title = extract_title(abc_text);
        let base_id = slugify(&title, default_id);
        let slug = storage::free_slug(dir, &base_id, ext);
        let dest = storage::write_document(dir, &slug, ext, abc_text)
            .with_context(|| format!("failed to store {}", slug))?;

        let record = SongRecord {
            title: if title.is_empty() { slug.clone() } else { title },
            id: slug,
            source_url: source_url.to_string(),
            filename: dest.display().to_string(),
        };
        tracing::info!(id = %record.id, "saved {} -> {}", record.title, dest.display());
        progress.report(&ImportEvent::Saved {
            title: record.title.clone(),
            path: dest,
        });
        Ok(record)
    }

    /// Imports `urls` in order, upserting every success into `catalog`.
    /// Per-URL failures are reported and collected; the loop always runs to the end.
    pub fn import_batch(
        &self,
        urls: &[String],
        catalog: &mut Catalog,
        progress: &mut dyn Progress,
    ) -> BatchReport {
        let total = urls.len();
        let mut report = BatchReport::default();

        for (i, url) in urls.iter().enumerate() {
            let index = i + 1;
            progress.report(&ImportEvent::Processing {
                index,
                total,
                url: url.clone(),
            });

            match self.import_url(url, &self.default_id(index), progress) {
                Ok(record) => {
                    catalog.upsert(record.clone());
                    report.imported.push(record);
                }
                Err(err) => {
                    let message = format!("{:#}", err);
                    tracing::warn!("import of {} failed: {}", url, message);
                    progress.report(&ImportEvent::Failed {
                        url: url.clone(),
                        message: message.clone(),
                    });
                    report.failures.push(ImportFailure {
                        index,
                        url: url.clone(),
                        message,
                    });
                }
            }
        }

        report
    }

    /// Loads the catalog, imports the batch, and saves the catalog exactly once.
    /// Only catalog load/save failures are returned as errors.
    pub fn run(&self, urls: &[String], progress: &mut dyn Progress) -> Result<BatchReport> {
        let index_path = self.config.index_path();
        let mut catalog = Catalog::load(&index_path)?;
        let report = self.import_batch(urls, &mut catalog, progress);
        catalog
            .save(&index_path)
            .with_context(|| format!("failed to write catalog after {} URLs", report.total()))?;
        Ok(report)
    }
}
