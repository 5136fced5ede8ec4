//! Document files in the songs directory.
//!
//! Documents are named `<slug>.<ext>`. A slug whose file already exists is
//! never overwritten: the next free `<slug>-N` (N starting at 2) is used.
//! Writes go through a `.part` temp file and a rename.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path of the document stored under `slug`.
pub fn document_path(dir: &Path, slug: &str, extension: &str) -> PathBuf {
    dir.join(format!("{slug}.{extension}"))
}

/// First slug among `base`, `base-2`, `base-3`, ... with no document on disk.
pub fn free_slug(dir: &Path, base: &str, extension: &str) -> String {
    let mut slug = base.to_string();
    let mut counter = 1u32;
    while document_path(dir, &slug, extension).exists() {
        counter += 1;
        slug = format!("{base}-{counter}");
    }
    if counter > 1 {
        tracing::debug!("{} taken, using {}", base, slug);
    }
    slug
}

/// Path for the temp file: appends `.part` to the final path.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Writes `text` as the document for `slug`, creating `dir` if needed.
/// Returns the final path.
pub fn write_document(dir: &Path, slug: &str, extension: &str, text: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create songs dir: {}", dir.display()))?;

    let final_path = document_path(dir, slug, extension);
    let temp = temp_path(&final_path);
    std::fs::write(&temp, text)
        .with_context(|| format!("failed to write temp file: {}", temp.display()))?;
    std::fs::rename(&temp, &final_path).with_context(|| {
        format!(
            "failed to rename {} to {}",
            temp.display(),
            final_path.display()
        )
    })?;
    Ok(final_path)
}
