use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::url_model::{DEFAULT_FORMAT_PARAM, DEFAULT_FORMAT_VALUE};

/// Global configuration loaded from `~/.config/tunebook/config.toml`.
/// Keys missing from the file take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TunebookConfig {
    /// Directory holding the imported documents and the catalog.
    pub songs_dir: PathBuf,
    /// Catalog file name, relative to `songs_dir`.
    pub index_file: String,
    /// Extension of stored documents (without the dot).
    pub extension: String,
    /// Query parameter that selects the plain-text rendering.
    pub format_param: String,
    /// Value requested for `format_param`.
    pub format_value: String,
    /// Total timeout for a single GET, in seconds.
    pub timeout_secs: u64,
    /// Prefix of the per-position fallback id (`tune1`, `tune2`, ...).
    pub default_id_prefix: String,
}

impl Default for TunebookConfig {
    fn default() -> Self {
        Self {
            songs_dir: PathBuf::from("songs"),
            index_file: "index.json".to_string(),
            extension: "abc".to_string(),
            format_param: DEFAULT_FORMAT_PARAM.to_string(),
            format_value: DEFAULT_FORMAT_VALUE.to_string(),
            timeout_secs: 15,
            default_id_prefix: "tune".to_string(),
        }
    }
}

impl TunebookConfig {
    /// Path of the catalog file inside the songs directory.
    pub fn index_path(&self) -> PathBuf {
        self.songs_dir.join(&self.index_file)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Same config with a different storage directory (CLI override).
    pub fn with_songs_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.songs_dir = dir.into();
        self
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tunebook")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TunebookConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TunebookConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: TunebookConfig = toml::from_str(&data)?;
    Ok(cfg)
}
