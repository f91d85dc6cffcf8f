//! Pokedex Catalog - entries, filtering and lookup
//!
//! The catalog is the static, ordered list of entries produced offline by
//! the name fetcher. It is loaded once per process and never mutated.
//!
//! # Overview
//!
//! ```text
//! pokemon.json (id, name)          pokemon-detail.json (id, name.<lang>, cards)
//!     │                                   │
//!     ▼                                   ▼
//! Catalog ──► filter(query) ──► FilteredView ──► SelectionController
//!                                         DetailSet ──► resolve("2")
//! ```

mod detail;
mod entry;
mod filter;
mod store;

pub use detail::{resolve, Card, DetailRecord, DetailSet};
pub use entry::{Entry, SubItem};
pub use filter::{filter, FilteredView};
pub use store::{global, install, Catalog};

#[cfg(test)]
mod tests;
