//! CLI for the tunebook importer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tunebook_core::config;

use commands::{run_config, run_import, run_list, ImportArgs};

/// Top-level CLI for tunebook.
#[derive(Debug, Parser)]
#[command(name = "tunebook")]
#[command(about = "tunebook: import ABC tunes into a local song library", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch ABC tunes and add them to the songs directory and catalog.
    Import {
        /// Text file with one URL per line (blank lines and `#` comments ignored).
        #[arg(long, value_name = "PATH")]
        urls_file: Option<PathBuf>,

        /// Single URL (can be repeated).
        #[arg(long = "url", value_name = "URL")]
        url: Vec<String>,

        /// Further URLs, processed after `--urls-file` and `--url`.
        #[arg(value_name = "URL")]
        urls: Vec<String>,

        /// Store songs and index.json here instead of the configured songs_dir.
        #[arg(long, value_name = "DIR")]
        songs_dir: Option<PathBuf>,
    },

    /// List the songs in the catalog.
    List {
        /// Read the catalog from this directory instead of the configured songs_dir.
        #[arg(long, value_name = "DIR")]
        songs_dir: Option<PathBuf>,
    },

    /// Show the config file location and effective settings.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Import {
                urls_file,
                url,
                urls,
                songs_dir,
            } => {
                let cfg = match songs_dir {
                    Some(dir) => cfg.with_songs_dir(dir),
                    None => cfg,
                };
                let args = ImportArgs {
                    urls_file,
                    url_flags: url,
                    positional: urls,
                };
                run_import(cfg, &args)?;
            }
            CliCommand::List { songs_dir } => {
                let cfg = match songs_dir {
                    Some(dir) => cfg.with_songs_dir(dir),
                    None => cfg,
                };
                run_list(&cfg)?;
            }
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
