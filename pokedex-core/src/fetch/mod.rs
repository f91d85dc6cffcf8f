//! Species name fetcher
//!
//! Builds the static catalog file by asking a species API for each id in a
//! range, one request at a time:
//! - the name in the target language is preferred
//! - the species' default name is used when no localized name exists
//! - a failed request yields a `Pokemon{id}` placeholder and the run continues

mod pokeapi;

pub use pokeapi::PokeApiSource;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{error, info};

use crate::catalog::Entry;
use crate::config::FetchConfig;

/// Log progress every this many ids
const PROGRESS_EVERY: u32 = 25;

/// Species record as returned by the API (only the fields we read)
#[derive(Debug, Clone, Deserialize)]
pub struct Species {
    /// Default (English) name
    pub name: String,
    #[serde(default)]
    pub names: Vec<LocalizedName>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedName {
    pub name: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// Where a catalog name came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameOrigin {
    Localized,
    Fallback,
    Placeholder,
}

impl Species {
    /// Name in `language`, or the default name with [`NameOrigin::Fallback`]
    pub fn name_for(&self, language: &str) -> Option<(String, NameOrigin)> {
        let localized = self
            .names
            .iter()
            .find(|n| n.language.name == language && !n.name.trim().is_empty());

        match localized {
            Some(n) => Some((n.name.clone(), NameOrigin::Localized)),
            None if !self.name.trim().is_empty() => Some((self.name.clone(), NameOrigin::Fallback)),
            None => None,
        }
    }
}

/// Placeholder name for an id whose lookup failed
pub fn placeholder_name(id: u32) -> String {
    format!("Pokemon{id}")
}

/// Trait for species data sources
///
/// The HTTP implementation is [`PokeApiSource`]; tests use in-memory mocks.
#[async_trait]
pub trait SpeciesSource: Send + Sync {
    async fn species(&self, id: u32) -> Result<Species>;

    /// Source identifier for logging
    fn name(&self) -> &'static str;
}

/// Counts of how each name was obtained
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReport {
    pub localized: usize,
    pub fallback: usize,
    pub placeholder: usize,
}

impl FetchReport {
    pub fn total(&self) -> usize {
        self.localized + self.fallback + self.placeholder
    }

    fn record(&mut self, origin: NameOrigin) {
        match origin {
            NameOrigin::Localized => self.localized += 1,
            NameOrigin::Fallback => self.fallback += 1,
            NameOrigin::Placeholder => self.placeholder += 1,
        }
    }
}

/// Sequential name fetcher over an id range
pub struct NameFetcher<S> {
    source: S,
    start_id: u32,
    end_id: u32,
    language: String,
    delay: Duration,
}

impl<S: SpeciesSource> NameFetcher<S> {
    pub fn new(source: S, config: &FetchConfig) -> Self {
        Self {
            source,
            start_id: config.start_id,
            end_id: config.end_id,
            language: config.language.clone(),
            delay: config.delay(),
        }
    }

    /// Fetch every id in the range. Never fails; failed ids get placeholders.
    pub async fn run(&self) -> (Vec<Entry>, FetchReport) {
        info!(
            "Fetching '{}' names for ids {}..={} from {}",
            self.language,
            self.start_id,
            self.end_id,
            self.source.name()
        );

        let capacity = self.end_id.saturating_sub(self.start_id) as usize + 1;
        let mut entries = Vec::with_capacity(capacity);
        let mut report = FetchReport::default();

        for id in self.start_id..=self.end_id {
            let (name, origin) = match self.fetch_one(id).await {
                Ok(found) => {
                    if id % PROGRESS_EVERY == 0 || id == self.end_id {
                        info!("Fetched #{}: {}", id, found.0);
                    }
                    tokio::time::sleep(self.delay).await;
                    found
                }
                Err(e) => {
                    error!("Failed to fetch #{}: {:#}", id, e);
                    (placeholder_name(id), NameOrigin::Placeholder)
                }
            };

            report.record(origin);
            entries.push(Entry::new(id, name));
        }

        info!(
            "Fetched {} names ({} localized, {} fallback, {} placeholder)",
            report.total(),
            report.localized,
            report.fallback,
            report.placeholder
        );

        (entries, report)
    }

    async fn fetch_one(&self, id: u32) -> Result<(String, NameOrigin)> {
        let species = self.source.species(id).await?;
        species
            .name_for(&self.language)
            .ok_or_else(|| anyhow::anyhow!("species #{id} has no usable name"))
    }
}

/// Write entries as a pretty-printed JSON array, creating parent directories
pub async fn write_catalog(path: &Path, entries: &[Entry]) -> crate::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let json = serde_json::to_string_pretty(entries)?;
    tokio::fs::write(path, json).await?;

    info!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn species(default: &str, localized: &[(&str, &str)]) -> Species {
        Species {
            name: default.to_string(),
            names: localized
                .iter()
                .map(|(lang, name)| LocalizedName {
                    name: name.to_string(),
                    language: NamedResource {
                        name: lang.to_string(),
                    },
                })
                .collect(),
        }
    }

    struct MockSource {
        species: HashMap<u32, Species>,
    }

    #[async_trait]
    impl SpeciesSource for MockSource {
        async fn species(&self, id: u32) -> Result<Species> {
            self.species
                .get(&id)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("HTTP 404 for id={id}"))
        }

        fn name(&self) -> &'static str {
            "mock"
        }
    }

    #[test]
    fn test_name_for_prefers_language() {
        let s = species("bulbasaur", &[("en", "Bulbasaur"), ("de", "Bisasam")]);
        assert_eq!(
            s.name_for("de"),
            Some(("Bisasam".to_string(), NameOrigin::Localized))
        );
        assert_eq!(
            s.name_for("ja"),
            Some(("bulbasaur".to_string(), NameOrigin::Fallback))
        );
    }

    #[test]
    fn test_name_for_skips_blank_localized_name() {
        let s = species("pikachu", &[("de", "  ")]);
        assert_eq!(s.name_for("de").unwrap().1, NameOrigin::Fallback);
        assert_eq!(species("", &[]).name_for("de"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_substitutes_placeholders() {
        let source = MockSource {
            species: HashMap::from([
                (1, species("bulbasaur", &[("de", "Bisasam")])),
                (3, species("venusaur", &[])),
            ]),
        };
        let config = FetchConfig {
            start_id: 1,
            end_id: 3,
            ..FetchConfig::default()
        };

        let (entries, report) = NameFetcher::new(source, &config).run().await;

        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Bisasam", "Pokemon2", "venusaur"]);
        assert_eq!(
            report,
            FetchReport {
                localized: 1,
                fallback: 1,
                placeholder: 1
            }
        );
    }
}
