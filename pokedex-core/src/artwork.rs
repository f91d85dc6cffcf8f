//! Artwork URL derivation from entry ids

use serde::{Deserialize, Serialize};

/// Official artwork on the PokeAPI sprite host
pub const DEFAULT_PRIMARY_TEMPLATE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/{id}.png";

/// Small sprite used when the artwork fails to load
pub const DEFAULT_FALLBACK_TEMPLATE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{id}.png";

const ID_PLACEHOLDER: &str = "{id}";

/// URL templates containing an `{id}` placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ArtworkTemplates {
    pub primary: String,
    pub fallback: String,
}

impl Default for ArtworkTemplates {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_TEMPLATE.to_string(),
            fallback: DEFAULT_FALLBACK_TEMPLATE.to_string(),
        }
    }
}

/// Both image URLs for one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkUrls {
    pub primary: String,
    pub fallback: String,
}

impl ArtworkTemplates {
    pub fn for_id(&self, id: u32) -> ArtworkUrls {
        let id = id.to_string();
        ArtworkUrls {
            primary: self.primary.replace(ID_PLACEHOLDER, &id),
            fallback: self.fallback.replace(ID_PLACEHOLDER, &id),
        }
    }

    /// Templates must mention `{id}` or every entry would share one image
    pub fn validate(&self) -> Result<(), String> {
        for (label, template) in [("primary", &self.primary), ("fallback", &self.fallback)] {
            if !template.contains(ID_PLACEHOLDER) {
                return Err(format!(
                    "{label} artwork template must contain {ID_PLACEHOLDER}: {template}"
                ));
            }
        }
        Ok(())
    }
}

impl ArtworkUrls {
    /// URL to show, given whether the primary image failed to load
    pub fn resolve(&self, primary_failed: bool) -> &str {
        if primary_failed {
            &self.fallback
        } else {
            &self.primary
        }
    }
}
