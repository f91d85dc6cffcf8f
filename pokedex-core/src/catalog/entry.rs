//! Catalog entry types

use serde::{Deserialize, Serialize};

/// A single catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// National dex number (unique, stable, starts at 1)
    pub id: u32,

    /// Localized display name
    pub name: String,

    /// Optional nested items shown on the detail view
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_items: Vec<SubItem>,
}

/// A nested item attached to an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubItem {
    pub display_name: String,
    pub image_ref: String,
}

impl Entry {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sub_items: Vec::new(),
        }
    }

    /// Label used in lists, e.g. `#025 Pikachu`
    pub fn label(&self) -> String {
        format!("#{:03} {}", self.id, self.name)
    }
}
