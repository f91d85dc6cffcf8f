use ratatui::layout::Rect;
use tui_input::Input;

use pokedex_core::catalog::{self, Catalog, DetailRecord, DetailSet, Entry};
use pokedex_core::selection::Browser;
use pokedex_core::tilt::Tilt;

/// State for the catalog screen
#[derive(Debug)]
pub struct BrowseState {
    pub browser: Browser,
    pub search_input: Input,
    /// Current hover tilt of the featured card
    pub tilt: Tilt,
    /// Where the featured card was last drawn, for pointer hit-testing
    pub card_area: Option<Rect>,
}

impl BrowseState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            browser: Browser::new(catalog),
            search_input: Input::default(),
            tilt: Tilt::default(),
            card_area: None,
        }
    }
}

/// What the detail screen shows
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    /// Full record from the detail dataset
    Record(DetailRecord),
    /// Only the catalog entry is known
    Entry(Entry),
    /// Lookup miss for this raw id
    NotFound(String),
}

impl DetailView {
    /// Resolve `raw_id` against the detail dataset first, then the catalog
    pub fn resolve(catalog: &Catalog, details: Option<&DetailSet>, raw_id: &str) -> Self {
        if let Some(record) = details.and_then(|d| catalog::resolve(d, raw_id).ok()) {
            return DetailView::Record(record.clone());
        }

        match catalog.resolve(raw_id) {
            Ok(entry) => DetailView::Entry(entry.clone()),
            Err(not_found) => DetailView::NotFound(not_found.key),
        }
    }
}
