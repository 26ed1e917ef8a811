//! Typed visual units bound to parts of the canonical model.

use crate::model::{Chart, Insight, Metric, Table};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of visual building blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    HeroMetric,
    TrendIndicator,
    InsightCard,
    LineChart,
    BarChart,
    DataTable,
    ComparisonGrid,
    Unknown,
}

impl ComponentKind {
    /// Every kind a catalog may describe.
    pub const KNOWN: [ComponentKind; 7] = [
        ComponentKind::HeroMetric,
        ComponentKind::TrendIndicator,
        ComponentKind::InsightCard,
        ComponentKind::LineChart,
        ComponentKind::BarChart,
        ComponentKind::DataTable,
        ComponentKind::ComparisonGrid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::HeroMetric => "HeroMetric",
            ComponentKind::TrendIndicator => "TrendIndicator",
            ComponentKind::InsightCard => "InsightCard",
            ComponentKind::LineChart => "LineChart",
            ComponentKind::BarChart => "BarChart",
            ComponentKind::DataTable => "DataTable",
            ComponentKind::ComparisonGrid => "ComparisonGrid",
            ComponentKind::Unknown => "Unknown",
        }
    }

    /// Resolves a catalog name; anything unrecognized is [`ComponentKind::Unknown`].
    pub fn from_name(name: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|kind| kind.name() == name)
            .unwrap_or(ComponentKind::Unknown)
    }

    /// Kinds that emit a chart-initialization directive.
    pub fn is_chart(self) -> bool {
        matches!(self, ComponentKind::LineChart | ComponentKind::BarChart)
    }

    /// The chart type string used in the declarative chart configuration.
    pub fn chart_type(self) -> Option<&'static str> {
        match self {
            ComponentKind::LineChart => Some("line"),
            ComponentKind::BarChart => Some("bar"),
            _ => None,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How many grid columns a component occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridSpan {
    #[default]
    Single,
    Double,
    Full,
}

impl GridSpan {
    pub fn css_class(self) -> &'static str {
        match self {
            GridSpan::Single => "",
            GridSpan::Double => "col-span-2",
            GridSpan::Full => "col-span-full",
        }
    }
}

/// A read-only view of the model slice a component presents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "camelCase")]
pub enum BoundData<'a> {
    Metric { key: &'a str, metric: &'a Metric },
    Insight(&'a Insight),
    Chart(&'a Chart),
    Table(&'a Table),
    Empty,
}

impl<'a> BoundData<'a> {
    pub fn chart(&self) -> Option<&'a Chart> {
        match *self {
            BoundData::Chart(chart) => Some(chart),
            _ => None,
        }
    }
}

/// A bound, typed visual unit ready for placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Component<'a> {
    pub kind: ComponentKind,
    /// Document-unique element id.
    pub id: String,
    pub data: BoundData<'a>,
    pub weight: u32,
    /// Sort key; lower comes first.
    pub priority: u32,
    pub grid_span: GridSpan,
}
