//! Catalog browsing state: query text, filtered view and selection together

use tracing::trace;

use super::{SelectionController, TimerDirective};
use crate::catalog::{filter, Catalog, Entry, FilteredView};

/// Catalog plus the mutable browsing state of one mounted view
#[derive(Debug, Clone)]
pub struct Browser {
    catalog: Catalog,
    query: String,
    controller: SelectionController,
}

impl Browser {
    pub fn new(catalog: Catalog) -> Self {
        let view = filter(&catalog, "");
        Self {
            catalog,
            query: String::new(),
            controller: SelectionController::new(view),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn view(&self) -> &FilteredView {
        self.controller.view()
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SelectionController {
        &mut self.controller
    }

    pub fn featured(&self) -> Option<&Entry> {
        self.controller.featured()
    }

    /// Update the query. The view is recomputed on every call, even when the
    /// text is unchanged.
    pub fn set_query(&mut self, query: impl Into<String>) -> TimerDirective {
        self.query = query.into();
        let view = filter(&self.catalog, &self.query);
        trace!("Query '{}' matched {} entries", self.query, view.len());
        self.controller.set_view(view)
    }
}
