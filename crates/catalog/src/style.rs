use crate::error::CatalogError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A writing style. Styles shape prose elsewhere; the pipeline only carries
/// the name through to the design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDescriptor {
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct StyleCatalog {
    styles: IndexMap<String, StyleDescriptor>,
}

impl StyleCatalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let styles = serde_json::from_str(json).map_err(|source| CatalogError::Parse {
            catalog: "style",
            source,
        })?;
        Ok(Self { styles })
    }

    pub fn get(&self, name: &str) -> Option<&StyleDescriptor> {
        self.styles.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }
}
