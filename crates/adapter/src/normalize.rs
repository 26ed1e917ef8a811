//! Lenient conversions from raw JSON fragments to model values.
//!
//! Every function here is total: wrong types and missing fields become
//! defaults, never errors.

use folio_types::model::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_KIND, DEFAULT_DELTA_PERIOD};
use folio_types::{Chart, Dataset, Insight, Metric, MetricFormat, MetricValue, Table};
use serde_json::{Map, Value};

const CURRENCY_KEYWORDS: [&str; 4] = ["price", "revenue", "cost", "value"];
const PERCENT_KEYWORDS: [&str; 4] = ["rate", "ratio", "percent", "growth"];

/// `"gross_margin-rate"` → `"Gross Margin Rate"`.
pub fn key_to_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len());
    let mut prev_alpha = false;
    for c in key.chars() {
        let c = if c == '_' || c == '-' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_alpha {
                label.extend(c.to_lowercase());
            } else {
                label.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            label.push(c);
            prev_alpha = false;
        }
    }
    label
}

/// Guesses a unit from keywords in a key name. Currency wins over percentage.
pub fn infer_unit(key: &str) -> &'static str {
    let key = key.to_lowercase();
    if CURRENCY_KEYWORDS.iter().any(|k| key.contains(k)) {
        "$"
    } else if PERCENT_KEYWORDS.iter().any(|k| key.contains(k)) {
        "%"
    } else {
        ""
    }
}

/// Reads a scalar as display text. Null, arrays and objects are not text.
pub fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub fn text_or(value: Option<&Value>, default: &str) -> String {
    text(value).unwrap_or_else(|| default.to_string())
}

/// A strictly numeric JSON value. Booleans are not numbers.
pub fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Reads a delta from a number or a string such as `"+12.5%"`.
pub fn delta(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim().trim_start_matches('+');
            let numeric_part: String = s
                .chars()
                .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            numeric_part.parse::<f64>().ok()
        }
        _ => None,
    }
}

fn metric_value(value: Option<&Value>) -> MetricValue {
    match value {
        Some(Value::Number(n)) => n.as_f64().map(MetricValue::Number).unwrap_or_default(),
        Some(Value::String(s)) => MetricValue::Text(s.clone()),
        Some(Value::Bool(b)) => MetricValue::Text(b.to_string()),
        _ => MetricValue::default(),
    }
}

/// Normalizes one metric entry.
///
/// Objects are read field by field with the key's label as the default label;
/// any other value is taken as the metric value itself, with a unit guessed
/// from the key.
pub fn metric(key: &str, raw: &Value) -> Metric {
    match raw.as_object() {
        Some(obj) => metric_object(key, obj),
        None => {
            let mut metric = Metric::new(key_to_label(key), metric_value(Some(raw)));
            metric.unit = infer_unit(key).to_string();
            metric.format = MetricFormat::infer(&metric.unit, &metric.value);
            metric
        }
    }
}

pub fn metric_object(key: &str, obj: &Map<String, Value>) -> Metric {
    let label = text(obj.get("label"))
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| key_to_label(key));
    let value = metric_value(obj.get("value"));
    let unit = text_or(obj.get("unit"), "");
    let format = obj
        .get("format")
        .and_then(Value::as_str)
        .and_then(MetricFormat::parse)
        .unwrap_or_else(|| MetricFormat::infer(&unit, &value));

    Metric {
        label,
        value,
        unit,
        delta: delta(obj.get("delta")),
        delta_period: text(obj.get("delta_period").or_else(|| obj.get("deltaPeriod")))
            .unwrap_or_else(|| DEFAULT_DELTA_PERIOD.to_string()),
        format,
    }
}

fn chart_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn dataset(index: usize, raw: &Value) -> Option<Dataset> {
    let default_label = || format!("Dataset {}", index + 1);
    match raw {
        Value::Object(obj) => Some(Dataset {
            label: text(obj.get("label")).unwrap_or_else(default_label),
            data: obj
                .get("data")
                .and_then(Value::as_array)
                .map(|points| points.iter().map(number).collect())
                .unwrap_or_default(),
        }),
        Value::Array(points) => Some(Dataset {
            label: default_label(),
            data: points.iter().map(number).collect(),
        }),
        _ => None,
    }
}

/// Normalizes a chart object. Labels and datasets may sit at the top level or
/// inside a nested `data` object. An object carrying neither is not a chart.
pub fn chart(raw: &Value, default_title: &str) -> Option<Chart> {
    chart_object(raw.as_object()?, default_title)
}

pub fn chart_object(obj: &Map<String, Value>, default_title: &str) -> Option<Chart> {
    let nested = obj.get("data").and_then(Value::as_object);
    let field = |name: &str| obj.get(name).or_else(|| nested.and_then(|n| n.get(name)));
    if field("labels").is_none() && field("datasets").is_none() {
        return None;
    }

    let labels = field("labels")
        .and_then(Value::as_array)
        .map(|labels| labels.iter().map(chart_label).collect())
        .unwrap_or_default();
    let datasets = field("datasets")
        .and_then(Value::as_array)
        .map(|sets| {
            sets.iter()
                .enumerate()
                .filter_map(|(i, set)| dataset(i, set))
                .collect()
        })
        .unwrap_or_default();
    let height = obj
        .get("height")
        .and_then(Value::as_u64)
        .and_then(|h| u32::try_from(h).ok())
        .unwrap_or(DEFAULT_CHART_HEIGHT);

    Some(Chart::new(
        obj.get("type").and_then(Value::as_str).unwrap_or(DEFAULT_CHART_KIND),
        text_or(obj.get("title"), default_title),
        labels,
        datasets,
        height,
    ))
}

fn column_name(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn project(record: &Map<String, Value>, columns: &[String]) -> Vec<Value> {
    columns
        .iter()
        .map(|col| record.get(col).cloned().unwrap_or_else(|| Value::from("")))
        .collect()
}

/// Turns a list of records into a table whose columns are the first record's
/// keys, in order. Returns `None` unless the first item is an object.
pub fn records_to_table(items: &[Value]) -> Option<Table> {
    let first = items.first()?.as_object()?;
    let columns: Vec<String> = first.keys().cloned().collect();
    let empty = Map::new();
    let rows = items
        .iter()
        .map(|item| project(item.as_object().unwrap_or(&empty), &columns))
        .collect();
    Some(Table::new(None, columns, rows))
}

/// Normalizes a `{columns, rows}` object or a list of records.
pub fn table(raw: &Value) -> Option<Table> {
    match raw {
        Value::Object(obj) => table_object(obj),
        Value::Array(items) => records_to_table(items),
        _ => None,
    }
}

pub fn table_object(obj: &Map<String, Value>) -> Option<Table> {
    let columns: Vec<String> = obj
        .get("columns")?
        .as_array()?
        .iter()
        .map(column_name)
        .collect();
    let rows = obj
        .get("rows")?
        .as_array()?
        .iter()
        .filter_map(|row| match row {
            Value::Array(cells) => Some(cells.clone()),
            Value::Object(record) => Some(project(record, &columns)),
            _ => None,
        })
        .collect();
    Some(Table::new(text(obj.get("title")), columns, rows))
}

pub fn insight(raw: &Value) -> Option<Insight> {
    match raw {
        Value::Object(obj) => Some(Insight {
            headline: text_or(obj.get("headline"), ""),
            body: text_or(obj.get("body"), ""),
            source: text(obj.get("source")).filter(|s| !s.is_empty()),
        }),
        Value::String(body) => Some(Insight {
            body: body.clone(),
            ..Insight::default()
        }),
        _ => None,
    }
}

pub fn insights(raw: Option<&Value>) -> Vec<Insight> {
    raw.and_then(Value::as_array)
        .map(|items| items.iter().filter_map(insight).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::MetricStatus;
    use serde_json::json;

    #[test]
    fn labels_are_title_cased() {
        assert_eq!(key_to_label("revenue"), "Revenue");
        assert_eq!(key_to_label("gross_margin-rate"), "Gross Margin Rate");
        assert_eq!(key_to_label("q1REVENUE"), "Q1Revenue");
    }

    #[test]
    fn units_follow_keywords() {
        assert_eq!(infer_unit("Total_Revenue"), "$");
        assert_eq!(infer_unit("churn_rate"), "%");
        assert_eq!(infer_unit("value_growth"), "$");
        assert_eq!(infer_unit("headcount"), "");
    }

    #[test]
    fn delta_accepts_signed_strings() {
        assert_eq!(delta(Some(&json!("+12.5%"))), Some(12.5));
        assert_eq!(delta(Some(&json!("-3"))), Some(-3.0));
        assert_eq!(delta(Some(&json!(true))), None);
        assert_eq!(delta(Some(&json!("n/a"))), None);
    }

    #[test]
    fn metric_object_defaults() {
        let m = metric("active_users", &json!({"value": 10, "delta": -5}));
        assert_eq!(m.label, "Active Users");
        assert_eq!(m.unit, "");
        assert_eq!(m.delta_period, "vs prev");
        assert_eq!(m.status(), MetricStatus::Negative);
        assert_eq!(m.format, MetricFormat::Number);
    }

    #[test]
    fn metric_explicit_format_wins() {
        let m = metric("x", &json!({"value": 3, "unit": "$", "format": "percentage"}));
        assert_eq!(m.format, MetricFormat::Percentage);
        let inferred = metric("x", &json!({"value": "n/a", "unit": "$"}));
        assert_eq!(inferred.format, MetricFormat::Text);
    }

    #[test]
    fn chart_reads_nested_data() {
        let c = chart(
            &json!({"type": "bar", "data": {"labels": ["a", "b"], "datasets": [{"data": [1, "x", 3]}]}}),
            "",
        )
        .unwrap();
        assert_eq!(c.kind, "bar");
        assert_eq!(c.labels, vec!["a", "b"]);
        assert_eq!(c.datasets[0].label, "Dataset 1");
        assert_eq!(c.datasets[0].data, vec![Some(1.0), None]);
    }

    #[test]
    fn chart_needs_labels_or_datasets() {
        assert!(chart(&json!({}), "").is_none());
        assert!(chart(&json!({"title": "Trend", "height": 200}), "").is_none());
        assert!(chart(&json!({"data": {"labels": ["a"]}}), "").is_some());
        assert!(chart(&json!({"datasets": []}), "").is_some());
    }

    #[test]
    fn table_projects_record_rows() {
        let t = table(&json!({
            "columns": ["name", "qty"],
            "rows": [{"qty": 2, "name": "A"}, ["B"]]
        }))
        .unwrap();
        assert_eq!(t.rows, vec![vec![json!("A"), json!(2)], vec![json!("B"), json!("")]]);
    }

    #[test]
    fn insight_source_drops_empty() {
        let i = insight(&json!({"headline": "H", "body": "B", "source": ""})).unwrap();
        assert_eq!(i.source, None);
    }
}
