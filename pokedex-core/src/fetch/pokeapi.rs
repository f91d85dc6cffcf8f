//! PokeAPI species source over HTTP

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, warn};

use super::{Species, SpeciesSource};
use crate::config::FetchConfig;

pub struct PokeApiSource {
    client: reqwest::Client,
    api_base: String,
}

impl PokeApiSource {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn species_url(&self, id: u32) -> String {
        format!("{}/pokemon-species/{}", self.api_base, id)
    }
}

#[async_trait]
impl SpeciesSource for PokeApiSource {
    async fn species(&self, id: u32) -> Result<Species> {
        let url = self.species_url(id);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch species from {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            warn!("PokeAPI error for id={}: {}", id, status);
            anyhow::bail!("Fetch failed for id={}: {}", id, status);
        }

        response
            .json::<Species>()
            .await
            .with_context(|| format!("Failed to parse species response from {url}"))
    }

    fn name(&self) -> &'static str {
        "pokeapi"
    }
}
