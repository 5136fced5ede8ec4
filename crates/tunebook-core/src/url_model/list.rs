//! Newline-delimited URL list files.

use anyhow::{Context, Result};
use std::path::Path;

/// Parses URL list text: one URL per line, trimmed; blank lines and `#` comments are skipped.
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Reads and parses a URL list file. A missing or unreadable file is an error.
pub fn read_url_list(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read URL list: {}", path.display()))?;
    let urls = parse_url_list(&text);
    tracing::debug!("read {} URLs from {}", urls.len(), path.display());
    Ok(urls)
}
