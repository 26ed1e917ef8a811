//! Template-facing view models. All text is raw here; escaping happens in
//! the templates.

use crate::format::{cell_to_string, format_delta, format_number, is_non_negative};
use folio_types::{
    CanonicalReport, Chart, Component, Insight, Metric, MetricFormat, MetricValue, Table,
};
use serde::Serialize;

pub const DEFAULT_LINE_TITLE: &str = "Trend Analysis";
pub const DEFAULT_BAR_TITLE: &str = "Category Breakdown";
pub const DEFAULT_COMPARISON_TITLE: &str = "Comparison";
pub const DEFAULT_TABLE_TITLE: &str = "Detailed Data";
pub const BAR_CHART_HEIGHT: u32 = 250;

fn or_default(title: &str, default: &str) -> String {
    if title.trim().is_empty() {
        default.to_string()
    } else {
        title.to_string()
    }
}

/// Value with its unit: currency units prefix, all others suffix.
pub fn display_value(metric: &Metric) -> String {
    let value = match &metric.value {
        MetricValue::Number(n) => format_number(*n),
        MetricValue::Text(s) => s.clone(),
    };
    if metric.format == MetricFormat::Currency {
        format!("{}{}", metric.unit, value)
    } else {
        format!("{}{}", value, metric.unit)
    }
}

#[derive(Debug, Serialize)]
pub struct DeltaBadge {
    pub positive: bool,
    pub class: &'static str,
    pub arrow: &'static str,
    pub text: String,
    pub period: String,
}

impl DeltaBadge {
    pub fn new(delta: f64, period: &str) -> Self {
        let positive = is_non_negative(delta);
        Self {
            positive,
            class: if positive { "text-green-600" } else { "text-red-600" },
            arrow: if positive { "↑" } else { "↓" },
            text: format_delta(delta),
            period: period.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MetricCard {
    pub id: String,
    pub span: &'static str,
    pub label: String,
    pub value: String,
    pub status: &'static str,
    pub delta: Option<DeltaBadge>,
}

impl MetricCard {
    pub fn new(component: &Component<'_>, metric: &Metric) -> Self {
        Self {
            id: component.id.clone(),
            span: component.grid_span.css_class(),
            label: metric.label.clone(),
            value: display_value(metric),
            status: metric.status().as_str(),
            delta: metric.delta.map(|d| DeltaBadge::new(d, &metric.delta_period)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InsightView {
    pub id: String,
    pub span: &'static str,
    pub headline: String,
    pub body: String,
    pub source: Option<String>,
}

impl InsightView {
    pub fn new(component: &Component<'_>, insight: &Insight) -> Self {
        Self {
            id: component.id.clone(),
            span: component.grid_span.css_class(),
            headline: insight.headline.clone(),
            body: insight.body.clone(),
            source: insight.source.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChartCard {
    pub id: String,
    pub span: &'static str,
    pub title: String,
    pub height: u32,
}

impl ChartCard {
    pub fn line(component: &Component<'_>, chart: &Chart) -> Self {
        Self {
            id: component.id.clone(),
            span: component.grid_span.css_class(),
            title: or_default(&chart.title, DEFAULT_LINE_TITLE),
            height: chart.height,
        }
    }

    pub fn bar(component: &Component<'_>, chart: &Chart) -> Self {
        Self {
            id: component.id.clone(),
            span: component.grid_span.css_class(),
            title: or_default(&chart.title, DEFAULT_BAR_TITLE),
            height: BAR_CHART_HEIGHT,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TableView {
    pub id: String,
    pub span: &'static str,
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn new(component: &Component<'_>, table: &Table) -> Self {
        Self {
            id: component.id.clone(),
            span: component.grid_span.css_class(),
            title: or_default(table.title.as_deref().unwrap_or(""), DEFAULT_TABLE_TITLE),
            columns: table.columns.clone(),
            rows: table
                .rows
                .iter()
                .map(|row| row.iter().map(cell_to_string).collect())
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Tile {
    pub label: String,
    pub value: Option<f64>,
}

/// Label/value tiles from the first dataset of a chart.
#[derive(Debug, Serialize)]
pub struct ComparisonView {
    pub id: String,
    pub span: &'static str,
    pub title: String,
    pub series: String,
    pub tiles: Vec<Tile>,
}

impl ComparisonView {
    pub fn new(component: &Component<'_>, chart: &Chart) -> Self {
        let first = chart.datasets.first();
        let tiles = chart
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| Tile {
                label: label.clone(),
                value: first.and_then(|set| set.data.get(i).copied().flatten()),
            })
            .collect();
        Self {
            id: component.id.clone(),
            span: component.grid_span.css_class(),
            title: or_default(&chart.title, DEFAULT_COMPARISON_TITLE),
            series: first.map(|set| set.label.clone()).unwrap_or_default(),
            tiles,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlaceholderView {
    pub id: String,
    pub kind: String,
}

#[derive(Debug, Serialize)]
pub struct CssVar {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct SectionView {
    pub title: Option<String>,
    pub grid_classes: String,
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct ChartScript {
    pub id_json: String,
    pub config_json: String,
}

#[derive(Debug, Default, Serialize)]
pub struct CoverView {
    pub headline: String,
    pub subheadline: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationView {
    pub action: String,
    pub target: Option<String>,
    pub rationale: String,
}

#[derive(Debug, Serialize)]
pub struct DocumentView {
    pub title: String,
    pub pattern_name: String,
    pub grid_classes: String,
    pub subject: Option<String>,
    pub style_name: String,
    pub css_vars: Vec<CssVar>,
    pub cover: Option<CoverView>,
    pub key_points: Vec<String>,
    pub sections: Vec<SectionView>,
    pub recommendation: Option<RecommendationView>,
    pub charts: Vec<ChartScript>,
    pub footer: &'static str,
}

/// Header and summary blocks drawn from the model outside the layout.
pub fn summary_blocks(
    report: &CanonicalReport,
) -> (Option<CoverView>, Vec<String>, Option<RecommendationView>) {
    let cover = report.cover.as_ref().map(|c| CoverView {
        headline: c.headline.clone(),
        subheadline: c.subheadline.clone(),
    });
    let key_points = report
        .executive_summary
        .as_ref()
        .map(|s| s.key_points.clone())
        .unwrap_or_default();
    let recommendation = report.recommendation.as_ref().map(|r| RecommendationView {
        action: r.action.clone(),
        target: r.target.as_ref().map(cell_to_string).filter(|t| !t.is_empty()),
        rationale: r.rationale.clone(),
    });
    (cover, key_points, recommendation)
}
