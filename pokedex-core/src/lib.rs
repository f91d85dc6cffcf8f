//! Pokedex core library exports
//!
//! Data flows one way: the loaded [`catalog::Catalog`] is narrowed by
//! [`catalog::filter`] into a [`catalog::FilteredView`], which feeds the
//! [`selection::SelectionController`]. The detail resolver is an
//! independent read path keyed by id.

pub mod artwork;
pub mod catalog;
pub mod config;
pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod selection;
pub mod tilt;

pub use error::{NotFound, PokedexError, Result};
