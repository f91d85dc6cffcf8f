//! Configuration loading
//!
//! Settings live in a YAML file. Resolution order:
//! 1. Explicit path (CLI `--config`)
//! 2. `POKEDEX_CONFIG` environment variable
//! 3. `config.yaml` in the platform config directory
//!
//! A missing file is not an error; defaults apply.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::artwork::ArtworkTemplates;
use crate::error::{PokedexError, Result};
use crate::selection::DEFAULT_ROTATION_PERIOD;
use crate::tilt::DEFAULT_MAX_TILT_DEG;

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "POKEDEX_CONFIG";

/// Default PokeAPI base URL
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// Highest national dex number known at the time of writing (Terapagos)
pub const DEFAULT_LAST_ID: u32 = 1025;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokedexConfig {
    pub data: DataConfig,
    pub display: DisplayConfig,
    pub fetch: FetchConfig,
}

/// Where the static datasets live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub catalog_path: PathBuf,
    pub detail_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Preferred language for detail names
    pub language: String,
    /// Language used when the preferred one is missing
    pub fallback_language: String,
    /// Auto-rotation period in milliseconds
    pub rotation_ms: u64,
    pub max_tilt_deg: f32,
    pub artwork: ArtworkTemplates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub api_base: String,
    pub start_id: u32,
    pub end_id: u32,
    pub language: String,
    /// Pause after each successful request, in milliseconds
    pub delay_ms: u64,
    pub timeout_secs: u64,
    pub output_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/pokemon.json"),
            detail_path: Some(PathBuf::from("data/pokemon-detail.json")),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            language: "de".to_string(),
            fallback_language: "en".to_string(),
            rotation_ms: DEFAULT_ROTATION_PERIOD.as_millis() as u64,
            max_tilt_deg: DEFAULT_MAX_TILT_DEG,
            artwork: ArtworkTemplates::default(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            start_id: 1,
            end_id: DEFAULT_LAST_ID,
            language: "de".to_string(),
            delay_ms: 80,
            timeout_secs: 30,
            output_path: PathBuf::from("data/pokemon.json"),
        }
    }
}

impl DisplayConfig {
    pub fn rotation_period(&self) -> Duration {
        Duration::from_millis(self.rotation_ms)
    }
}

impl FetchConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl PokedexConfig {
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Load from `path`, falling back to defaults if the file does not exist
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content).map_err(|e| {
            PokedexError::Config(format!("failed to load {}: {e}", path.display()))
        })?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Resolve the config location and load it
    pub fn load(cli_override: Option<&Path>) -> Result<Self> {
        match Self::resolve_path(cli_override) {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Config file location per the resolution order
    pub fn resolve_path(cli_override: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = cli_override {
            return Some(path.to_path_buf());
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(path));
        }

        Self::config_dir().map(|dir| dir.join("config.yaml"))
    }

    fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "pokedex")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(|| dirs::config_dir().map(|d| d.join("pokedex")))
    }

    pub fn validate(&self) -> Result<()> {
        if self.display.rotation_ms == 0 {
            return Err(PokedexError::Config(
                "display.rotation_ms must be greater than zero".to_string(),
            ));
        }

        if self.fetch.start_id == 0 || self.fetch.start_id > self.fetch.end_id {
            return Err(PokedexError::Config(format!(
                "fetch id range {}..={} is empty or starts at 0",
                self.fetch.start_id, self.fetch.end_id
            )));
        }

        if self.fetch.timeout_secs == 0 {
            return Err(PokedexError::Config(
                "fetch.timeout_secs must be greater than zero".to_string(),
            ));
        }

        self.display.artwork.validate().map_err(PokedexError::Config)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = PokedexConfig::default();
        config.validate().unwrap();
        assert_eq!(config.display.rotation_period(), Duration::from_millis(3500));
        assert_eq!(config.fetch.end_id, 1025);
        assert_eq!(config.fetch.delay(), Duration::from_millis(80));
        assert_eq!(
            config.data.detail_path,
            Some(PathBuf::from("data/pokemon-detail.json"))
        );
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = PokedexConfig::from_yaml(
            r#"
display:
  rotation_ms: 1000
fetch:
  language: fr
"#,
        )
        .unwrap();

        assert_eq!(config.display.rotation_ms, 1000);
        assert_eq!(config.display.language, "de");
        assert_eq!(config.fetch.language, "fr");
        assert_eq!(config.data.catalog_path, PathBuf::from("data/pokemon.json"));
    }

    #[test]
    fn test_zero_rotation_rejected() {
        let result = PokedexConfig::from_yaml("display:\n  rotation_ms: 0\n");
        assert!(matches!(result, Err(PokedexError::Config(_))));
    }

    #[test]
    fn test_empty_range_rejected() {
        assert!(PokedexConfig::from_yaml("fetch:\n  start_id: 10\n  end_id: 5\n").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = PokedexConfig::load_from_path(&temp_dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config, PokedexConfig::default());
    }

    #[test]
    fn test_roundtrip_through_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");

        let mut config = PokedexConfig::default();
        config.data.detail_path = None;
        std::fs::write(&path, config.to_yaml().unwrap()).unwrap();

        assert_eq!(PokedexConfig::load_from_path(&path).unwrap(), config);
    }

    #[test]
    #[serial]
    fn test_resolve_path_order() {
        let explicit = PathBuf::from("/tmp/explicit.yaml");
        std::env::set_var(CONFIG_ENV_VAR, "/tmp/from-env.yaml");

        assert_eq!(
            PokedexConfig::resolve_path(Some(&explicit)),
            Some(explicit.clone())
        );
        assert_eq!(
            PokedexConfig::resolve_path(None),
            Some(PathBuf::from("/tmp/from-env.yaml"))
        );

        std::env::remove_var(CONFIG_ENV_VAR);
        let fallback = PokedexConfig::resolve_path(None);
        assert!(fallback.map_or(true, |p| p.ends_with("config.yaml")));
    }
}
