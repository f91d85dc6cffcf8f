//! Terminal browser for the catalog
pub mod app;
pub mod events;
pub mod screens;
pub mod state;
pub mod theme;

use anyhow::Result;
use tokio::sync::mpsc;

use pokedex_core::config::PokedexConfig;

use crate::catalog_cli::{load_catalog, load_details};

/// Entry point for `pokedex browse`
pub async fn run(config: PokedexConfig) -> Result<()> {
    let catalog = load_catalog(&config)?.clone();
    let details = load_details(&config)?;

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let app = app::App::new(catalog, details, config, event_tx.clone());
    app.run(event_tx, event_rx).await
}
