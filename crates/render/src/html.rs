//! Handlebars-backed HTML renderer.

use crate::chart::ChartConfig;
use crate::error::RenderError;
use crate::format::{css_font_family, format_number, script_safe_json};
use crate::traits::DocumentRenderer;
use crate::view::{
    ChartCard, ChartScript, ComparisonView, CssVar, DocumentView, InsightView, MetricCard,
    PlaceholderView, SectionView, TableView, summary_blocks,
};
use folio_types::{BoundData, CanonicalReport, Component, ComponentKind, Design, Layout};
use handlebars::{Context, Handlebars, Helper, HelperResult, Output, RenderContext};
use serde::Serialize;
use serde_json::Value;

pub const FOOTER_TEXT: &str = "Generated by folio";

const DOCUMENT: &str = "document";
const HERO_METRIC: &str = "hero_metric";
const TREND_INDICATOR: &str = "trend_indicator";
const INSIGHT_CARD: &str = "insight_card";
const CHART_CARD: &str = "chart_card";
const DATA_TABLE: &str = "data_table";
const COMPARISON_GRID: &str = "comparison_grid";
const UNKNOWN: &str = "unknown";

const TEMPLATES: [(&str, &str); 8] = [
    (DOCUMENT, include_str!("../templates/document.hbs")),
    (HERO_METRIC, include_str!("../templates/hero_metric.hbs")),
    (TREND_INDICATOR, include_str!("../templates/trend_indicator.hbs")),
    (INSIGHT_CARD, include_str!("../templates/insight_card.hbs")),
    (CHART_CARD, include_str!("../templates/chart_card.hbs")),
    (DATA_TABLE, include_str!("../templates/data_table.hbs")),
    (COMPARISON_GRID, include_str!("../templates/comparison_grid.hbs")),
    (UNKNOWN, include_str!("../templates/unknown.hbs")),
];

/// `{{formatNumber value}}`: magnitude-formatted numbers, strings as-is,
/// anything else empty.
fn format_number_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let text = match h.param(0).map(|p| p.value()) {
        Some(Value::Number(n)) => n.as_f64().map(format_number).unwrap_or_default(),
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    };
    out.write(&handlebars::html_escape(&text))?;
    Ok(())
}

/// Renders a layout into a single self-contained HTML page.
///
/// Every component kind has its own template; a kind whose bound data does
/// not match (or [`ComponentKind::Unknown`]) renders as an inert placeholder.
#[derive(Clone)]
pub struct HtmlRenderer {
    registry: Handlebars<'static>,
}

impl std::fmt::Debug for HtmlRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlRenderer").finish_non_exhaustive()
    }
}

impl HtmlRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        registry.register_helper("formatNumber", Box::new(format_number_helper));
        for (name, source) in TEMPLATES {
            registry.register_template_string(name, source)?;
        }
        Ok(Self { registry })
    }

    fn render_view<T: Serialize>(&self, template: &str, view: &T) -> Result<String, RenderError> {
        Ok(self.registry.render(template, view)?)
    }

    /// Renders one component's visual block.
    pub fn render_component(&self, component: &Component<'_>) -> Result<String, RenderError> {
        match (component.kind, component.data) {
            (ComponentKind::HeroMetric, BoundData::Metric { metric, .. }) => {
                self.render_view(HERO_METRIC, &MetricCard::new(component, metric))
            }
            (ComponentKind::TrendIndicator, BoundData::Metric { metric, .. }) => {
                self.render_view(TREND_INDICATOR, &MetricCard::new(component, metric))
            }
            (ComponentKind::InsightCard, BoundData::Insight(insight)) => {
                self.render_view(INSIGHT_CARD, &InsightView::new(component, insight))
            }
            (ComponentKind::LineChart, BoundData::Chart(chart)) => {
                self.render_view(CHART_CARD, &ChartCard::line(component, chart))
            }
            (ComponentKind::BarChart, BoundData::Chart(chart)) => {
                self.render_view(CHART_CARD, &ChartCard::bar(component, chart))
            }
            (ComponentKind::DataTable, BoundData::Table(table)) => {
                self.render_view(DATA_TABLE, &TableView::new(component, table))
            }
            (ComponentKind::ComparisonGrid, BoundData::Chart(chart)) => {
                self.render_view(COMPARISON_GRID, &ComparisonView::new(component, chart))
            }
            (kind, _) => {
                log::trace!("Rendering placeholder for {} component '{}'", kind, component.id);
                let view = PlaceholderView {
                    id: component.id.clone(),
                    kind: kind.to_string(),
                };
                self.render_view(UNKNOWN, &view)
            }
        }
    }

    fn css_vars(design: &Design) -> Vec<CssVar> {
        let mut vars: Vec<CssVar> = design
            .colors
            .entries()
            .into_iter()
            .map(|(name, color)| CssVar {
                name: format!("color-{name}"),
                value: color.to_string(),
            })
            .collect();
        vars.push(CssVar {
            name: "font-heading".to_string(),
            value: css_font_family(&design.typography.heading),
        });
        vars.push(CssVar {
            name: "font-body".to_string(),
            value: css_font_family(&design.typography.body),
        });
        vars
    }
}

impl DocumentRenderer for HtmlRenderer {
    fn render(
        &self,
        title: &str,
        layout: &Layout<'_>,
        design: &Design,
        report: &CanonicalReport,
    ) -> Result<String, RenderError> {
        let mut sections = Vec::with_capacity(layout.sections.len());
        let mut charts = Vec::new();

        for section in &layout.sections {
            let mut body = String::new();
            for component in &section.components {
                body.push_str(&self.render_component(component)?);
                body.push('\n');
                if let Some(config) = ChartConfig::for_component(component) {
                    charts.push(ChartScript {
                        id_json: script_safe_json(&component.id)?,
                        config_json: script_safe_json(&config)?,
                    });
                }
            }
            sections.push(SectionView {
                title: section.title.clone(),
                grid_classes: section.grid_classes.clone(),
                body,
            });
        }

        let (cover, key_points, recommendation) = summary_blocks(report);
        let view = DocumentView {
            title: title.to_string(),
            pattern_name: layout.pattern_name.clone(),
            grid_classes: layout.grid_classes.clone(),
            subject: report.metadata_text("subject"),
            style_name: design.style_name.clone(),
            css_vars: Self::css_vars(design),
            cover,
            key_points,
            sections,
            recommendation,
            charts,
            footer: FOOTER_TEXT,
        };

        log::debug!(
            "Rendering {} sections with {} charts",
            view.sections.len(),
            view.charts.len()
        );
        self.render_view(DOCUMENT, &view)
    }

    fn format(&self) -> &'static str {
        "html"
    }
}
