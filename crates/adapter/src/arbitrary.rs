//! Shape inference over arbitrary JSON objects.

use crate::legacy::default_metadata;
use crate::normalize::{self, key_to_label};
use crate::shape::{Shape, classify};
use folio_types::{CanonicalReport, Chart, Insight, Metric, MetricFormat, MetricValue};
use serde_json::{Map, Value};

pub fn adapt(root: &Map<String, Value>) -> CanonicalReport {
    let mut report = CanonicalReport {
        metadata: default_metadata("Auto-Generated Report"),
        ..CanonicalReport::default()
    };

    for (key, value) in root {
        let shape = classify(value);
        log::trace!("Key '{}' classified as {:?}", key, shape);
        match shape {
            Shape::Scalar(n) => {
                let mut metric = Metric::new(key_to_label(key), MetricValue::Number(n));
                metric.unit = normalize::infer_unit(key).to_string();
                metric.format = MetricFormat::infer(&metric.unit, &metric.value);
                report.metrics.insert(key.clone(), metric);
            }
            Shape::MetricObject(obj) => {
                report.metrics.insert(key.clone(), normalize::metric_object(key, obj));
            }
            Shape::ChartObject(obj) => {
                report.time_series = normalize::chart_object(obj, "");
            }
            Shape::TableObject(obj) => {
                report.table = normalize::table_object(obj);
            }
            Shape::InsightList(items) => {
                report.insights.extend(items.iter().filter_map(normalize::insight));
            }
            Shape::RecordList(items) => {
                report.table = normalize::records_to_table(items);
            }
            Shape::NumberSeries(points) => {
                report.time_series = Some(Chart::series(key_to_label(key), key.as_str(), points));
            }
            Shape::Narrative(body) => report.insights.push(Insight {
                headline: key_to_label(key),
                body: body.to_string(),
                source: None,
            }),
            Shape::Unrecognized => {}
        }
    }

    report
}
