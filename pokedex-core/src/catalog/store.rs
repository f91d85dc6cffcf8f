//! Loaded-once catalog storage

use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::Entry;
use crate::error::{NotFound, PokedexError, Result};

static GLOBAL_CATALOG: OnceCell<Catalog> = OnceCell::new();

/// The full, ordered set of entries
///
/// Cloning a `Catalog` clones a handle; the entries themselves are shared
/// and never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Arc<[Entry]>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids, id 0 and blank names
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());

        for entry in &entries {
            if entry.id == 0 {
                return Err(PokedexError::InvalidCatalog(format!(
                    "entry '{}' has id 0; ids start at 1",
                    entry.name
                )));
            }
            if entry.name.trim().is_empty() {
                return Err(PokedexError::InvalidCatalog(format!(
                    "entry #{} has an empty name",
                    entry.id
                )));
            }
            if !seen.insert(entry.id) {
                return Err(PokedexError::InvalidCatalog(format!(
                    "duplicate id {}",
                    entry.id
                )));
            }
        }

        Ok(Self {
            entries: entries.into(),
        })
    }

    /// Parse a catalog from a JSON array of `{ "id", "name" }` records
    pub fn from_json(content: &str) -> Result<Self> {
        let entries: Vec<Entry> = serde_json::from_str(content)?;
        Self::from_entries(entries)
    }

    /// Load a catalog file from disk
    #[instrument(name = "load_catalog", skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading catalog from {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;

        info!("Loaded {} catalog entries from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by id
    pub fn get(&self, id: u32) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Resolve an id given in its external string form (e.g. a path segment)
    pub fn resolve(&self, raw_id: &str) -> std::result::Result<&Entry, NotFound> {
        raw_id
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(|id| self.get(id))
            .ok_or_else(|| NotFound::new(raw_id))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Install the process-wide catalog. Only the first call succeeds.
pub fn install(catalog: Catalog) -> Result<&'static Catalog> {
    let mut installed = false;
    let stored = GLOBAL_CATALOG.get_or_init(|| {
        installed = true;
        catalog
    });

    if !installed {
        return Err(PokedexError::InvalidCatalog(
            "catalog has already been loaded for this process".to_string(),
        ));
    }

    Ok(stored)
}

/// The process-wide catalog, if one has been installed
pub fn global() -> Option<&'static Catalog> {
    GLOBAL_CATALOG.get()
}
