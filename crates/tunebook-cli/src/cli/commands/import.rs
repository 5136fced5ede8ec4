//! `tunebook import` – fetch URLs and update the catalog.

use anyhow::Result;
use std::path::PathBuf;
use tunebook_core::config::TunebookConfig;
use tunebook_core::fetch::Fetcher;
use tunebook_core::importer::{ImportEvent, Importer};
use tunebook_core::url_model::read_url_list;

/// URL sources for one import run.
#[derive(Debug, Default)]
pub struct ImportArgs {
    pub urls_file: Option<PathBuf>,
    pub url_flags: Vec<String>,
    pub positional: Vec<String>,
}

impl ImportArgs {
    /// All URLs in processing order: list file first, then `--url`, then positional.
    pub fn collect_urls(&self) -> Result<Vec<String>> {
        let mut urls = match &self.urls_file {
            Some(path) => read_url_list(path)?,
            None => Vec::new(),
        };
        urls.extend(self.url_flags.iter().cloned());
        urls.extend(self.positional.iter().cloned());
        Ok(urls)
    }
}

pub fn run_import(cfg: TunebookConfig, args: &ImportArgs) -> Result<()> {
    let urls = args.collect_urls()?;
    if urls.is_empty() {
        println!("No URLs given. Use --urls-file or --url.");
        return Ok(());
    }

    let fetcher = Fetcher::new(cfg.timeout());
    let importer = Importer::new(cfg, fetcher);
    let report = importer.run(&urls, &mut print_event)?;

    println!(
        "\nDone. Index written to {}",
        importer.config().index_path().display()
    );
    if !report.all_succeeded() {
        println!("{} of {} URLs failed.", report.failures.len(), report.total());
    }
    Ok(())
}

fn print_event(event: &ImportEvent) {
    match event {
        ImportEvent::Processing { .. } => println!("\n{event}"),
        ImportEvent::Failed { .. } => eprintln!("{event}"),
        _ => println!("{event}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_urls_come_first() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"# list\nhttps://a.example/1\n\nhttps://a.example/2\n")
            .unwrap();
        f.flush().unwrap();
        let args = ImportArgs {
            urls_file: Some(f.path().to_path_buf()),
            url_flags: vec!["https://b.example/3".to_string()],
            positional: vec!["https://c.example/4".to_string()],
        };
        assert_eq!(
            args.collect_urls().unwrap(),
            vec![
                "https://a.example/1",
                "https://a.example/2",
                "https://b.example/3",
                "https://c.example/4",
            ]
        );
    }

    #[test]
    fn missing_urls_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let args = ImportArgs {
            urls_file: Some(dir.path().join("urls.txt")),
            ..Default::default()
        };
        assert!(args.collect_urls().is_err());
    }

    #[test]
    fn no_urls_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = TunebookConfig::default().with_songs_dir(dir.path().join("songs"));
        run_import(cfg, &ImportArgs::default()).unwrap();
        assert!(!dir.path().join("songs").exists());
    }
}
