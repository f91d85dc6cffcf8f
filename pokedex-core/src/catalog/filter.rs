//! Filter engine: query text to an ordered view of the catalog

use super::{Catalog, Entry};

/// Ordered subset of a catalog matching a query
///
/// Holds a handle to the catalog plus the positions of matching entries,
/// so it always iterates in catalog order.
#[derive(Debug, Clone, Default)]
pub struct FilteredView {
    catalog: Catalog,
    positions: Vec<usize>,
    query: String,
}

/// Derive the filtered view for `query`
///
/// Keeps an entry iff the trimmed query is empty or the entry name contains
/// it case-insensitively. Pure and order-preserving.
pub fn filter(catalog: &Catalog, query: &str) -> FilteredView {
    let needle = query.trim().to_lowercase();

    let positions = if needle.is_empty() {
        (0..catalog.len()).collect()
    } else {
        catalog
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.name.to_lowercase().contains(&needle))
            .map(|(pos, _)| pos)
            .collect()
    };

    FilteredView {
        catalog: catalog.clone(),
        positions,
        query: query.to_string(),
    }
}

impl FilteredView {
    /// The query this view was derived from, untrimmed
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.positions
            .get(index)
            .and_then(|&pos| self.catalog.entries().get(pos))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.positions
            .iter()
            .filter_map(|&pos| self.catalog.entries().get(pos))
    }

    pub fn ids(&self) -> Vec<u32> {
        self.iter().map(|e| e.id).collect()
    }

    pub fn contains_id(&self, id: u32) -> bool {
        self.position_of(id).is_some()
    }

    /// Index of `id` within this view
    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.iter().position(|e| e.id == id)
    }

    /// Whether every entry of the catalog is visible
    pub fn is_unfiltered(&self) -> bool {
        self.positions.len() == self.catalog.len()
    }
}

impl PartialEq for FilteredView {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}
