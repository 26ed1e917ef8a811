use crate::error::CatalogError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Grid classes used when a pattern is missing from the catalog.
pub const FALLBACK_GRID_CLASSES: &str = "grid-cols-1 lg:grid-cols-2";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPattern {
    pub grid_classes: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub best_for: Vec<String>,
}

/// Named layout patterns keyed by display name, e.g. `"Executive Summary"`.
#[derive(Debug, Clone, Default)]
pub struct LayoutCatalog {
    patterns: IndexMap<String, LayoutPattern>,
}

impl LayoutCatalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let patterns = serde_json::from_str(json).map_err(|source| CatalogError::Parse {
            catalog: "layout",
            source,
        })?;
        Ok(Self { patterns })
    }

    pub fn get(&self, name: &str) -> Option<&LayoutPattern> {
        self.patterns.get(name)
    }

    /// The pattern's grid classes, or [`FALLBACK_GRID_CLASSES`].
    pub fn grid_classes(&self, name: &str) -> &str {
        self.get(name)
            .map(|p| p.grid_classes.as_str())
            .unwrap_or(FALLBACK_GRID_CLASSES)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }
}
