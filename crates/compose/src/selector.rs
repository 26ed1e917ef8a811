//! Component selection: which visual units a report gets, and in what order.

use folio_catalog::ComponentCatalog;
use folio_types::{BoundData, CanonicalReport, Component, ComponentKind, DataProfile};
use std::collections::HashSet;

/// At most this many insights become cards.
pub const MAX_INSIGHT_CARDS: usize = 2;

pub const LINE_CHART_ID: &str = "main-chart";
pub const BAR_CHART_ID: &str = "bar-chart";
pub const TABLE_ID: &str = "main-table";

pub struct ComponentSelector<'c> {
    catalog: &'c ComponentCatalog,
}

impl<'c> ComponentSelector<'c> {
    pub fn new(catalog: &'c ComponentCatalog) -> Self {
        Self { catalog }
    }

    fn component<'a>(&self, kind: ComponentKind, id: String, data: BoundData<'a>) -> Component<'a> {
        let descriptor = self.catalog.descriptor(kind);
        Component {
            kind,
            id,
            data,
            weight: descriptor.weight,
            priority: descriptor.priority,
            grid_span: descriptor.grid_span,
        }
    }

    /// Emits components in a fixed order, then stable-sorts them by priority
    /// so equal priorities keep their emission order.
    pub fn select<'a>(&self, profile: &DataProfile, report: &'a CanonicalReport) -> Vec<Component<'a>> {
        let mut components = Vec::new();

        if profile.has_metrics {
            let mut ids = HashSet::new();
            for (i, (key, metric)) in report.metrics.iter().enumerate() {
                let kind = if i == 0 {
                    ComponentKind::HeroMetric
                } else {
                    ComponentKind::TrendIndicator
                };
                let id = unique_id(&mut ids, &format!("metric-{}", slug::slugify(key)));
                let data = BoundData::Metric { key: key.as_str(), metric };
                components.push(self.component(kind, id, data));
            }
        }

        if profile.has_insights {
            for (i, insight) in report.insights.iter().take(MAX_INSIGHT_CARDS).enumerate() {
                components.push(self.component(
                    ComponentKind::InsightCard,
                    format!("insight-{i}"),
                    BoundData::Insight(insight),
                ));
            }
        }

        if let Some(chart) = &report.time_series {
            components.push(self.component(
                ComponentKind::LineChart,
                LINE_CHART_ID.to_string(),
                BoundData::Chart(chart),
            ));
        }

        if let Some(chart) = &report.comparison {
            components.push(self.component(
                ComponentKind::BarChart,
                BAR_CHART_ID.to_string(),
                BoundData::Chart(chart),
            ));
        }

        if let Some(table) = report.table.as_ref().filter(|t| t.row_count() > 0) {
            components.push(self.component(
                ComponentKind::DataTable,
                TABLE_ID.to_string(),
                BoundData::Table(table),
            ));
        }

        components.sort_by_key(|c| c.priority);
        log::debug!("Selected {} components", components.len());
        components
    }
}

/// Appends `-2`, `-3`, ... until `base` is unused.
fn unique_id(seen: &mut HashSet<String>, base: &str) -> String {
    let mut id = base.to_string();
    let mut n = 2;
    while !seen.insert(id.clone()) {
        id = format!("{base}-{n}");
        n += 1;
    }
    id
}
