use folio_types::{CanonicalReport, ComponentKind, DataProfile, Design, GridSpan, Layout};
use serde::Serialize;

/// A placed component without its bound data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentOutline {
    pub kind: ComponentKind,
    pub id: String,
    pub priority: u32,
    pub grid_span: GridSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionOutline {
    pub title: Option<String>,
    pub grid_classes: String,
    pub components: Vec<ComponentOutline>,
}

/// An owned copy of a [`Layout`]'s structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOutline {
    pub pattern_name: String,
    pub grid_classes: String,
    pub sections: Vec<SectionOutline>,
}

impl From<&Layout<'_>> for LayoutOutline {
    fn from(layout: &Layout<'_>) -> Self {
        Self {
            pattern_name: layout.pattern_name.clone(),
            grid_classes: layout.grid_classes.clone(),
            sections: layout
                .sections
                .iter()
                .map(|section| SectionOutline {
                    title: section.title.clone(),
                    grid_classes: section.grid_classes.clone(),
                    components: section
                        .components
                        .iter()
                        .map(|c| ComponentOutline {
                            kind: c.kind,
                            id: c.id.clone(),
                            priority: c.priority,
                            grid_span: c.grid_span,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Every intermediate artifact of one generation call, for debugging and
/// `--format json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSnapshot {
    pub title: String,
    pub report: CanonicalReport,
    pub profile: DataProfile,
    pub layout: LayoutOutline,
    pub design: Design,
}
