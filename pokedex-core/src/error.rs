use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokedexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

/// Lookup miss from the detail resolver.
///
/// Carries the raw key as it arrived from navigation, which may not be numeric.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No entry found for id '{key}'")]
pub struct NotFound {
    pub key: String,
}

impl NotFound {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

pub type Result<T> = std::result::Result<T, PokedexError>;
