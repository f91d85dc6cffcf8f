//! Non-interactive catalog commands: list and show

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::ErrorKind;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use tracing::{debug, warn};

use pokedex_core::catalog::{self, filter, Catalog, DetailSet};
use pokedex_core::config::PokedexConfig;
use pokedex_core::PokedexError;

/// Table row for list results
#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "#")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Artwork")]
    artwork: String,
}

#[derive(Serialize)]
struct EntryJson<'a> {
    id: u32,
    name: &'a str,
    artwork: String,
    fallback_artwork: String,
}

/// Load the catalog named by the config and install it for this process
pub fn load_catalog(config: &PokedexConfig) -> Result<&'static Catalog> {
    let path = &config.data.catalog_path;
    let loaded = Catalog::load(path)
        .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
    catalog::install(loaded).context("Failed to install catalog")
}

/// Load the detail dataset, if one is configured
/// Load the detail dataset, if any. A missing file leaves only the catalog.
pub fn load_details(config: &PokedexConfig) -> Result<Option<DetailSet>> {
    let Some(path) = &config.data.detail_path else {
        return Ok(None);
    };

    match DetailSet::load(path) {
        Ok(details) => Ok(Some(details)),
        Err(PokedexError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            warn!("No detail dataset at {}, showing catalog entries only", path.display());
            Ok(None)
        }
        Err(e) => Err(e)
            .with_context(|| format!("Failed to load detail dataset from {}", path.display())),
    }
}

pub fn execute_list(config: &PokedexConfig, query: Option<&str>, json_output: bool) -> Result<()> {
    let catalog = load_catalog(config)?;
    let view = filter(catalog, query.unwrap_or(""));
    debug!("List query {:?} matched {} of {}", query, view.len(), catalog.len());

    let artwork = &config.display.artwork;

    if json_output {
        let rows: Vec<EntryJson> = view
            .iter()
            .map(|entry| {
                let urls = artwork.for_id(entry.id);
                EntryJson {
                    id: entry.id,
                    name: &entry.name,
                    artwork: urls.primary,
                    fallback_artwork: urls.fallback,
                }
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if view.is_empty() {
        println!("No Pokémon match '{}'.", query.unwrap_or("").trim());
        return Ok(());
    }

    let rows: Vec<EntryRow> = view
        .iter()
        .map(|entry| EntryRow {
            id: format!("{:03}", entry.id),
            name: entry.name.clone(),
            artwork: artwork.for_id(entry.id).primary,
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();

    println!("{table}");
    println!("{} of {} shown", view.len(), catalog.len());
    Ok(())
}

/// Show one entry. A miss is reported to the user, not treated as a failure.
pub fn execute_show(config: &PokedexConfig, raw_id: &str, json_output: bool) -> Result<()> {
    let catalog = load_catalog(config)?;
    let details = load_details(config)?;
    let display = &config.display;

    if let Some(details) = &details {
        if let Ok(record) = catalog::resolve(details, raw_id) {
            if json_output {
                println!("{}", serde_json::to_string_pretty(record)?);
            } else {
                let name = record.display_name(&display.language, &display.fallback_language);
                println!("{} (#{})", name, record.id);
                if record.cards.is_empty() {
                    println!("  No cards.");
                }
                for card in &record.cards {
                    println!("  {:<30} {}", card.name, card.image_url);
                }
            }
            return Ok(());
        }
    }

    match catalog.resolve(raw_id) {
        Ok(entry) => {
            let urls = display.artwork.for_id(entry.id);
            if json_output {
                let row = EntryJson {
                    id: entry.id,
                    name: &entry.name,
                    artwork: urls.primary,
                    fallback_artwork: urls.fallback,
                };
                println!("{}", serde_json::to_string_pretty(&row)?);
            } else {
                println!("{} (#{})", entry.name, entry.id);
                println!("  Artwork:  {}", urls.primary);
                println!("  Fallback: {}", urls.fallback);
            }
        }
        Err(not_found) => {
            debug!("{}", not_found);
            println!("Pokémon '{}' not found.", raw_id);
        }
    }

    Ok(())
}
