//! The canonical report model.
//!
//! Every input dialect is normalized into a [`CanonicalReport`]; all later
//! stages read it and never mutate it.

use indexmap::IndexMap;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Free-form descriptive keys (report type, subject, title).
pub type Metadata = serde_json::Map<String, Value>;

/// Metrics keyed by a unique name, in insertion order.
pub type MetricMap = IndexMap<String, Metric>;

pub const DEFAULT_DELTA_PERIOD: &str = "vs prev";
pub const DEFAULT_CHART_KIND: &str = "line";
pub const DEFAULT_CHART_HEIGHT: u32 = 300;

/// Direction of a metric's change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl MetricStatus {
    /// The status is a pure function of the delta sign.
    pub fn from_delta(delta: Option<f64>) -> Self {
        match delta {
            Some(d) if d > 0.0 => MetricStatus::Positive,
            Some(d) if d < 0.0 => MetricStatus::Negative,
            _ => MetricStatus::Neutral,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MetricStatus::Positive => "positive",
            MetricStatus::Negative => "negative",
            MetricStatus::Neutral => "neutral",
        }
    }
}

/// How a metric's value should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricFormat {
    #[default]
    Number,
    Currency,
    Percentage,
    Text,
}

impl MetricFormat {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "number" => Some(MetricFormat::Number),
            "currency" => Some(MetricFormat::Currency),
            "percentage" | "percent" => Some(MetricFormat::Percentage),
            "text" => Some(MetricFormat::Text),
            _ => None,
        }
    }

    /// Infers the format from the unit and the value when none is given.
    pub fn infer(unit: &str, value: &MetricValue) -> Self {
        match (unit, value) {
            (_, MetricValue::Text(_)) => MetricFormat::Text,
            ("$", _) => MetricFormat::Currency,
            ("%", _) => MetricFormat::Percentage,
            _ => MetricFormat::Number,
        }
    }
}

/// A metric value: numeric when the input was a number, otherwise its text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl Default for MetricValue {
    fn default() -> Self {
        MetricValue::Number(0.0)
    }
}

impl MetricValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Number(n) => Some(*n),
            MetricValue::Text(_) => None,
        }
    }
}

/// A single headline number.
///
/// There is no stored status: [`Metric::status`] is always derived from
/// `delta`, so the two can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: String,
    pub value: MetricValue,
    pub unit: String,
    pub delta: Option<f64>,
    pub delta_period: String,
    pub format: MetricFormat,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: MetricValue) -> Self {
        Self {
            label: label.into(),
            value,
            unit: String::new(),
            delta: None,
            delta_period: DEFAULT_DELTA_PERIOD.to_string(),
            format: MetricFormat::Number,
        }
    }

    pub fn status(&self) -> MetricStatus {
        MetricStatus::from_delta(self.delta)
    }
}

impl Serialize for Metric {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Metric", 7)?;
        state.serialize_field("label", &self.label)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("unit", &self.unit)?;
        state.serialize_field("delta", &self.delta)?;
        state.serialize_field("deltaPeriod", &self.delta_period)?;
        state.serialize_field("status", &self.status())?;
        state.serialize_field("format", &self.format)?;
        state.end()
    }
}

/// One named series of a chart. `None` points are gaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
}

/// A labelled chart.
///
/// Invariant: every dataset has exactly `labels.len()` points. Build charts
/// through [`Chart::new`] to get that guarantee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub kind: String,
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub height: u32,
}

impl Chart {
    /// Builds a chart, conforming every dataset to the label count.
    ///
    /// Longer datasets are truncated and shorter ones padded with gaps. With no
    /// labels at all, integer labels are synthesized from the longest dataset.
    pub fn new(
        kind: impl Into<String>,
        title: impl Into<String>,
        mut labels: Vec<String>,
        mut datasets: Vec<Dataset>,
        height: u32,
    ) -> Self {
        if labels.is_empty() {
            let longest = datasets.iter().map(|d| d.data.len()).max().unwrap_or(0);
            labels = (0..longest).map(|i| i.to_string()).collect();
        }
        for dataset in &mut datasets {
            dataset.data.resize(labels.len(), None);
        }
        Self {
            kind: kind.into(),
            title: title.into(),
            labels,
            datasets,
            height,
        }
    }

    /// A single-series chart over synthetic labels `0..n-1`.
    pub fn series(title: impl Into<String>, series_label: impl Into<String>, data: Vec<f64>) -> Self {
        let dataset = Dataset {
            label: series_label.into(),
            data: data.into_iter().map(Some).collect(),
        };
        Self::new(DEFAULT_CHART_KIND, title, Vec::new(), vec![dataset], DEFAULT_CHART_HEIGHT)
    }

    pub fn is_well_formed(&self) -> bool {
        self.datasets.iter().all(|d| d.data.len() == self.labels.len())
    }
}

/// A rectangular table.
///
/// Invariant: every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Builds a table, padding short rows with `""` and truncating long ones.
    pub fn new(title: Option<String>, columns: Vec<String>, mut rows: Vec<Vec<Value>>) -> Self {
        for row in &mut rows {
            row.resize(columns.len(), Value::String(String::new()));
        }
        Self { title, columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_well_formed(&self) -> bool {
        self.rows.iter().all(|r| r.len() == self.columns.len())
    }
}

/// A short narrative finding.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Insight {
    pub headline: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// One analysis grouping from the sectioned dialect.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AnalysisSection {
    pub title: String,
    pub narrative: String,
    pub insights: Vec<Insight>,
    pub charts: Vec<Chart>,
    pub tables: Vec<Table>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Cover {
    pub headline: String,
    pub subheadline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveSummary {
    pub key_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Recommendation {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Value>,
    pub rationale: String,
}

/// The single normalized representation every downstream stage consumes.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalReport {
    pub metadata: Metadata,
    pub metrics: MetricMap,
    pub time_series: Option<Chart>,
    pub table: Option<Table>,
    pub insights: Vec<Insight>,
    pub sections: Vec<AnalysisSection>,
    /// Categorical data meant for side-by-side comparison.
    pub comparison: Option<Chart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<Cover>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executive_summary: Option<ExecutiveSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
}

impl CanonicalReport {
    /// Reads a metadata entry as text, if it is a scalar.
    pub fn metadata_text(&self, key: &str) -> Option<String> {
        match self.metadata.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
            && self.time_series.is_none()
            && self.table.is_none()
            && self.insights.is_empty()
            && self.sections.is_empty()
            && self.comparison.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_follows_delta_sign() {
        assert_eq!(MetricStatus::from_delta(Some(3.0)), MetricStatus::Positive);
        assert_eq!(MetricStatus::from_delta(Some(-0.5)), MetricStatus::Negative);
        assert_eq!(MetricStatus::from_delta(Some(0.0)), MetricStatus::Neutral);
        assert_eq!(MetricStatus::from_delta(None), MetricStatus::Neutral);
    }

    #[test]
    fn metric_serializes_derived_status() {
        let mut metric = Metric::new("Revenue", MetricValue::Number(10.0));
        metric.delta = Some(-5.0);
        let value = serde_json::to_value(&metric).unwrap();
        assert_eq!(value["status"], json!("negative"));
        assert_eq!(value["deltaPeriod"], json!("vs prev"));
    }

    #[test]
    fn chart_conforms_datasets_to_labels() {
        let chart = Chart::new(
            "line",
            "",
            vec!["a".into(), "b".into()],
            vec![
                Dataset { label: "long".into(), data: vec![Some(1.0), Some(2.0), Some(3.0)] },
                Dataset { label: "short".into(), data: vec![Some(1.0)] },
            ],
            300,
        );
        assert!(chart.is_well_formed());
        assert_eq!(chart.datasets[0].data, vec![Some(1.0), Some(2.0)]);
        assert_eq!(chart.datasets[1].data, vec![Some(1.0), None]);
    }

    #[test]
    fn chart_synthesizes_labels_when_missing() {
        let chart = Chart::series("Quarterly", "quarterly", vec![1.0, 2.0, 3.0]);
        assert_eq!(chart.labels, vec!["0", "1", "2"]);
        assert!(chart.is_well_formed());
    }

    #[test]
    fn table_pads_and_truncates_rows() {
        let table = Table::new(
            None,
            vec!["a".into(), "b".into()],
            vec![vec![json!(1)], vec![json!(1), json!(2), json!(3)]],
        );
        assert!(table.is_well_formed());
        assert_eq!(table.rows[0], vec![json!(1), json!("")]);
        assert_eq!(table.rows[1], vec![json!(1), json!(2)]);
    }

    #[test]
    fn empty_report_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(CanonicalReport::default()).unwrap();
        assert!(value.get("timeSeries").is_some());
        assert!(value.get("cover").is_none());
    }
}
