//! `tunebook config` – show config path and effective settings.

use anyhow::Result;
use tunebook_core::config::{self, TunebookConfig};

pub fn run_config(cfg: &TunebookConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
