//! Load/save the catalog as pretty-printed JSON.

use std::path::Path;

use super::{Catalog, CatalogError};

impl Catalog {
    /// Loads the catalog at `path`. A missing file yields an empty catalog;
    /// a file that exists but does not parse is an error.
    pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no catalog at {}, starting empty", path.display());
                return Ok(Catalog::new());
            }
            Err(source) => {
                return Err(CatalogError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let catalog: Catalog = serde_json::from_slice(&bytes).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("loaded {} songs from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Writes the whole catalog to `path` (creating the parent dir), replacing prior content.
    /// Not atomic.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        let io_err = |source: std::io::Error| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(CatalogError::Encode)?;
        std::fs::write(path, json).map_err(io_err)?;
        tracing::info!("wrote {} songs to {}", self.len(), path.display());
        Ok(())
    }
}
