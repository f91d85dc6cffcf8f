//! `pokedex fetch`: rebuild the catalog file from PokeAPI

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use pokedex_core::config::{FetchConfig, PokedexConfig};
use pokedex_core::fetch::{write_catalog, NameFetcher, PokeApiSource};

/// Overrides for the `fetch` section of the config
#[derive(Args, Debug, Default)]
pub struct FetchArgs {
    /// First id to fetch
    #[clap(long)]
    pub start: Option<u32>,

    /// Last id to fetch (inclusive)
    #[clap(long)]
    pub end: Option<u32>,

    /// Language code for localized names
    #[clap(long)]
    pub lang: Option<String>,

    /// Pause between requests in milliseconds
    #[clap(long)]
    pub delay_ms: Option<u64>,

    /// Output file
    #[clap(long, short)]
    pub output: Option<PathBuf>,
}

impl FetchArgs {
    /// Merge these overrides into the configured fetch settings
    pub fn apply(self, base: &FetchConfig) -> FetchConfig {
        FetchConfig {
            start_id: self.start.unwrap_or(base.start_id),
            end_id: self.end.unwrap_or(base.end_id),
            language: self.lang.unwrap_or_else(|| base.language.clone()),
            delay_ms: self.delay_ms.unwrap_or(base.delay_ms),
            output_path: self.output.unwrap_or_else(|| base.output_path.clone()),
            ..base.clone()
        }
    }
}

pub async fn execute_fetch(config: &PokedexConfig, args: FetchArgs) -> Result<()> {
    let mut effective = config.clone();
    effective.fetch = args.apply(&config.fetch);
    effective.validate().context("Invalid fetch settings")?;
    let fetch = &effective.fetch;

    let source = PokeApiSource::new(fetch)?;
    let (entries, report) = NameFetcher::new(source, fetch).run().await;

    write_catalog(&fetch.output_path, &entries)
        .await
        .with_context(|| format!("Failed to write {}", fetch.output_path.display()))?;

    println!(
        "\nDone! Wrote {} entries to {}",
        entries.len(),
        fetch.output_path.display()
    );
    if report.placeholder > 0 {
        println!("  {} entries use placeholder names", report.placeholder);
    }
    if report.fallback > 0 {
        println!("  {} entries use the default name", report.fallback);
    }

    Ok(())
}
