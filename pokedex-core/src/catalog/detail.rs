//! Detail dataset and id resolution
//!
//! The detail dataset is a separate source from the catalog: names are keyed
//! by language and each record carries a list of card images.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::error::{NotFound, Result};

/// Full record shown on the detail screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRecord {
    pub id: u32,

    /// Localized names keyed by language code (`de`, `en`, ...)
    pub name: BTreeMap<String, String>,

    /// Artwork for the record itself, when the dataset provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default)]
    pub cards: Vec<Card>,
}

/// A card image attached to a detail record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub name: String,
    pub image_url: String,
}

impl DetailRecord {
    /// Name in `lang`, else in `fallback_lang`, else any name, else `#id`
    pub fn display_name(&self, lang: &str, fallback_lang: &str) -> String {
        self.name
            .get(lang)
            .or_else(|| self.name.get(fallback_lang))
            .or_else(|| self.name.values().next())
            .cloned()
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

/// All detail records, loaded once
#[derive(Debug, Clone, Default)]
pub struct DetailSet {
    records: Arc<[DetailRecord]>,
}

impl DetailSet {
    pub fn from_records(records: Vec<DetailRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let records: Vec<DetailRecord> = serde_json::from_str(content)?;
        Ok(Self::from_records(records))
    }

    #[instrument(name = "load_details", skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading detail dataset from {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let set = Self::from_json(&content)?;

        info!("Loaded {} detail records from {}", set.len(), path.display());
        Ok(set)
    }

    pub fn records(&self) -> &[DetailRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Resolve a detail record from an id in its external string form
///
/// Non-numeric input and unknown ids both yield [`NotFound`].
pub fn resolve<'a>(
    details: &'a DetailSet,
    raw_id: &str,
) -> std::result::Result<&'a DetailRecord, NotFound> {
    let Ok(id) = raw_id.trim().parse::<u32>() else {
        debug!("Detail lookup with malformed id '{}'", raw_id);
        return Err(NotFound::new(raw_id));
    };

    details
        .records
        .iter()
        .find(|record| record.id == id)
        .ok_or_else(|| NotFound::new(raw_id))
}
