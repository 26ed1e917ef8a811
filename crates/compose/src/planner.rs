//! Layout planning: grouping components into titled grid sections.

use folio_catalog::LayoutCatalog;
use folio_types::{Component, ComponentKind, Layout, LayoutSection, Purpose};
use itertools::Itertools;

/// The layout pattern each purpose maps to.
pub fn pattern_name(purpose: Purpose) -> &'static str {
    match purpose {
        Purpose::Executive => "Executive Summary",
        Purpose::Analyst => "Data Deep Dive",
        Purpose::Dashboard => "Dashboard Grid",
        Purpose::Storytelling => "Storytelling",
        Purpose::Comparison => "Comparison Focus",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Bucket {
    Metric,
    Insight,
    Chart,
    Table,
    Other,
}

impl Bucket {
    fn of(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::HeroMetric | ComponentKind::TrendIndicator => Bucket::Metric,
            ComponentKind::InsightCard => Bucket::Insight,
            ComponentKind::LineChart | ComponentKind::BarChart => Bucket::Chart,
            ComponentKind::DataTable => Bucket::Table,
            ComponentKind::ComparisonGrid | ComponentKind::Unknown => Bucket::Other,
        }
    }

    /// Section title and grid classes, or `None` for buckets that get no section.
    fn section(self) -> Option<(Option<&'static str>, &'static str)> {
        match self {
            Bucket::Metric => Some((None, "grid-cols-2 md:grid-cols-4")),
            Bucket::Insight => Some((Some("Key Insights"), "grid-cols-1 md:grid-cols-2")),
            Bucket::Chart => Some((Some("Analysis"), "grid-cols-1 lg:grid-cols-2")),
            Bucket::Table => Some((Some("Detailed Data"), "grid-cols-1")),
            Bucket::Other => None,
        }
    }
}

const SECTION_ORDER: [Bucket; 4] = [Bucket::Metric, Bucket::Insight, Bucket::Chart, Bucket::Table];

pub struct LayoutPlanner<'c> {
    catalog: &'c LayoutCatalog,
}

impl<'c> LayoutPlanner<'c> {
    pub fn new(catalog: &'c LayoutCatalog) -> Self {
        Self { catalog }
    }

    /// Plans the sections for `components`. An unknown `purpose` plans as
    /// [`Purpose::Executive`].
    ///
    /// Section grids are fixed per bucket; the catalog pattern only supplies
    /// the document-level grid classes.
    pub fn plan<'a>(&self, components: Vec<Component<'a>>, purpose: &str) -> Layout<'a> {
        let purpose = purpose.parse::<Purpose>().unwrap_or_default();
        let pattern = pattern_name(purpose);

        let mut buckets = components
            .into_iter()
            .into_group_map_by(|c| Bucket::of(c.kind));

        if let Some(other) = buckets.get(&Bucket::Other) {
            log::trace!("{} components have no layout section", other.len());
        }

        let sections = SECTION_ORDER
            .into_iter()
            .filter_map(|bucket| {
                let components = buckets.remove(&bucket)?;
                let (title, grid) = bucket.section()?;
                Some(LayoutSection {
                    title: title.map(str::to_string),
                    components,
                    grid_classes: grid.to_string(),
                })
            })
            .collect();

        log::debug!("Planned '{}' layout", pattern);
        Layout {
            pattern_name: pattern.to_string(),
            grid_classes: self.catalog.grid_classes(pattern).to_string(),
            sections,
        }
    }
}
