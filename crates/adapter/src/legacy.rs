//! The flat legacy dialect: `{metadata?, metrics?, time_series?, table?,
//! insights?, categories?}`. Mostly a passthrough.

use crate::normalize;
use folio_types::{CanonicalReport, Metadata, MetricMap};
use serde_json::{Map, Value};

pub fn default_metadata(title: &str) -> Metadata {
    let mut metadata = Metadata::new();
    metadata.insert("type".to_string(), Value::from("custom"));
    metadata.insert("title".to_string(), Value::from(title));
    metadata
}

pub fn adapt(root: &Map<String, Value>) -> CanonicalReport {
    let metadata = root
        .get("metadata")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_else(|| default_metadata("Report"));

    let metrics: MetricMap = root
        .get("metrics")
        .and_then(Value::as_object)
        .map(|entries| {
            entries
                .iter()
                .map(|(key, raw)| (key.clone(), normalize::metric(key, raw)))
                .collect()
        })
        .unwrap_or_default();

    let comparison = root
        .get("categories")
        .or_else(|| root.get("comparison"))
        .and_then(|raw| normalize::chart(raw, ""));

    CanonicalReport {
        metadata,
        metrics,
        time_series: root.get("time_series").and_then(|raw| normalize::chart(raw, "")),
        table: root.get("table").and_then(normalize::table),
        insights: normalize::insights(root.get("insights")),
        comparison,
        ..CanonicalReport::default()
    }
}
