//! Per-kind defaults for component weight, priority and grid span.

use crate::error::CatalogError;
use folio_types::{ComponentKind, GridSpan};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    pub weight: u32,
    pub priority: u32,
    #[serde(default)]
    pub grid_span: GridSpan,
    #[serde(default)]
    pub description: String,
}

impl ComponentDescriptor {
    /// The hardcoded descriptor for a kind, used when the catalog has no entry.
    pub fn fallback(kind: ComponentKind) -> Self {
        let (weight, priority, grid_span) = match kind {
            ComponentKind::HeroMetric => (1, 1, GridSpan::Double),
            ComponentKind::TrendIndicator => (1, 2, GridSpan::Single),
            ComponentKind::InsightCard => (1, 2, GridSpan::Single),
            ComponentKind::LineChart => (2, 3, GridSpan::Double),
            ComponentKind::BarChart => (2, 4, GridSpan::Single),
            ComponentKind::DataTable => (3, 5, GridSpan::Full),
            ComponentKind::ComparisonGrid => (2, 6, GridSpan::Full),
            ComponentKind::Unknown => (1, u32::MAX, GridSpan::Single),
        };
        Self {
            weight,
            priority,
            grid_span,
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ComponentCatalog {
    entries: IndexMap<ComponentKind, ComponentDescriptor>,
}

impl ComponentCatalog {
    /// Parses a JSON object keyed by component kind name.
    ///
    /// Entries naming a kind outside the closed set are ignored.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: IndexMap<String, ComponentDescriptor> =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse {
                catalog: "component",
                source,
            })?;

        let mut entries = IndexMap::with_capacity(raw.len());
        for (name, descriptor) in raw {
            match ComponentKind::from_name(&name) {
                ComponentKind::Unknown => log::debug!("Skipping unknown component kind '{}'", name),
                kind => {
                    entries.insert(kind, descriptor);
                }
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, kind: ComponentKind) -> Option<&ComponentDescriptor> {
        self.entries.get(&kind)
    }

    /// Looks up a kind, falling back to its hardcoded descriptor.
    pub fn descriptor(&self, kind: ComponentKind) -> ComponentDescriptor {
        self.get(kind)
            .cloned()
            .unwrap_or_else(|| ComponentDescriptor::fallback(kind))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
