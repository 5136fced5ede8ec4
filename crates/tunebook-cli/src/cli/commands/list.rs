//! `tunebook list` – show the songs in the catalog.

use anyhow::Result;
use tunebook_core::catalog::Catalog;
use tunebook_core::config::TunebookConfig;

pub fn run_list(cfg: &TunebookConfig) -> Result<()> {
    let catalog = Catalog::load(&cfg.index_path())?;
    if catalog.is_empty() {
        println!("No songs in catalog.");
        return Ok(());
    }
    let id_width = catalog
        .songs()
        .iter()
        .map(|s| s.id.chars().count())
        .max()
        .unwrap_or(0)
        .max(2);
    println!("{:<id_width$}  {:<32}  {}", "ID", "TITLE", "FILE");
    for s in catalog.songs() {
        println!("{:<id_width$}  {:<32}  {}", s.id, s.title, s.filename);
    }
    Ok(())
}
