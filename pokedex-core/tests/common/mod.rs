//! Test helper functions for integration tests

use pokedex_core::catalog::{Catalog, Entry};
use std::sync::Once;

/// Initialize logging for tests (only once per test run)
static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// The three-entry catalog used throughout the scenarios
#[allow(dead_code)]
pub fn starter_catalog() -> Catalog {
    Catalog::from_entries(vec![
        Entry::new(1, "Bisasam"),
        Entry::new(2, "Bisaknosp"),
        Entry::new(25, "Pikachu"),
    ])
    .unwrap()
}

/// A larger catalog with German names, including non-ASCII ones
#[allow(dead_code)]
pub fn gen1_sample() -> Catalog {
    Catalog::from_json(
        r#"[
  { "id": 1, "name": "Bisasam" },
  { "id": 2, "name": "Bisaknosp" },
  { "id": 3, "name": "Bisaflor" },
  { "id": 4, "name": "Glumanda" },
  { "id": 5, "name": "Glutexo" },
  { "id": 6, "name": "Glurak" },
  { "id": 7, "name": "Schiggy" },
  { "id": 25, "name": "Pikachu" },
  { "id": 26, "name": "Raichu" },
  { "id": 29, "name": "Nidoran♀" },
  { "id": 32, "name": "Nidoran♂" },
  { "id": 122, "name": "Pantimos" },
  { "id": 150, "name": "Mewtu" },
  { "id": 151, "name": "Mew" }
]"#,
    )
    .unwrap()
}
