use crate::component::Component;
use serde::Serialize;

/// One titled grid of components.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSection<'a> {
    pub title: Option<String>,
    pub components: Vec<Component<'a>>,
    pub grid_classes: String,
}

/// The ordered section plan for one report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout<'a> {
    pub pattern_name: String,
    pub grid_classes: String,
    pub sections: Vec<LayoutSection<'a>>,
}

impl<'a> Layout<'a> {
    /// All placed components, in document order.
    pub fn components(&self) -> impl Iterator<Item = &Component<'a>> {
        self.sections.iter().flat_map(|s| s.components.iter())
    }

    pub fn component_count(&self) -> usize {
        self.sections.iter().map(|s| s.components.len()).sum()
    }
}
