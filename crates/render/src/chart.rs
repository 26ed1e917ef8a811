//! Library-agnostic chart configuration.

use folio_types::{Chart, Color, Component};
use serde::Serialize;

/// Dataset colors, assigned in dataset order and reused cyclically.
pub const CHART_PALETTE: [Color; 5] = [
    Color::rgb(0x3B, 0x82, 0xF6),
    Color::rgb(0x10, 0xB9, 0x81),
    Color::rgb(0xF5, 0x9E, 0x0B),
    Color::rgb(0xEF, 0x44, 0x44),
    Color::rgb(0x8B, 0x5C, 0xF6),
];

pub fn palette_color(index: usize) -> Color {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetConfig<'a> {
    pub label: &'a str,
    pub data: &'a [Option<f64>],
    pub color: Color,
}

/// `{type, labels, datasets: [{label, data, color}]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig<'a> {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub labels: &'a [String],
    pub datasets: Vec<DatasetConfig<'a>>,
}

impl<'a> ChartConfig<'a> {
    pub fn new(chart_type: &'static str, chart: &'a Chart) -> Self {
        let datasets = chart
            .datasets
            .iter()
            .enumerate()
            .map(|(i, set)| DatasetConfig {
                label: &set.label,
                data: &set.data,
                color: palette_color(i),
            })
            .collect();
        Self {
            chart_type,
            labels: &chart.labels,
            datasets,
        }
    }

    /// The configuration for a chart-type component bound to chart data.
    pub fn for_component(component: &Component<'a>) -> Option<Self> {
        let chart_type = component.kind.chart_type()?;
        let chart = component.data.chart()?;
        Some(Self::new(chart_type, chart))
    }
}
