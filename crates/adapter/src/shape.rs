//! Classification of arbitrary top-level values into a closed set of shapes.

use crate::normalize::number;
use serde_json::{Map, Value};

/// Strings longer than this many characters read as narrative text.
pub const NARRATIVE_MIN_CHARS: usize = 50;

/// What a top-level value looks like, decided once per key.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<'a> {
    /// A bare number.
    Scalar(f64),
    /// An object carrying a `value` key.
    MetricObject(&'a Map<String, Value>),
    /// An object carrying `labels` and `datasets`.
    ChartObject(&'a Map<String, Value>),
    /// An object carrying `columns` and `rows`.
    TableObject(&'a Map<String, Value>),
    /// A list whose first element has a `headline` or `body`.
    InsightList(&'a [Value]),
    /// A list of objects.
    RecordList(&'a [Value]),
    /// A list of numbers.
    NumberSeries(Vec<f64>),
    Narrative(&'a str),
    Unrecognized,
}

pub fn classify(value: &Value) -> Shape<'_> {
    match value {
        Value::Number(_) => number(value).map_or(Shape::Unrecognized, Shape::Scalar),
        Value::Object(obj) => {
            if obj.contains_key("value") {
                Shape::MetricObject(obj)
            } else if obj.contains_key("labels") && obj.contains_key("datasets") {
                Shape::ChartObject(obj)
            } else if obj.contains_key("columns") && obj.contains_key("rows") {
                Shape::TableObject(obj)
            } else {
                Shape::Unrecognized
            }
        }
        Value::Array(items) => classify_list(items),
        Value::String(s) if s.chars().count() > NARRATIVE_MIN_CHARS => Shape::Narrative(s),
        _ => Shape::Unrecognized,
    }
}

fn classify_list(items: &[Value]) -> Shape<'_> {
    match items.first() {
        None => Shape::Unrecognized,
        Some(Value::Object(first)) => {
            if first.contains_key("headline") || first.contains_key("body") {
                Shape::InsightList(items)
            } else if items.iter().all(Value::is_object) {
                Shape::RecordList(items)
            } else {
                Shape::Unrecognized
            }
        }
        Some(_) => items
            .iter()
            .map(number)
            .collect::<Option<Vec<f64>>>()
            .map_or(Shape::Unrecognized, Shape::NumberSeries),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_and_bools() {
        assert_eq!(classify(&json!(1.5)), Shape::Scalar(1.5));
        assert_eq!(classify(&json!(true)), Shape::Unrecognized);
    }

    #[test]
    fn object_shapes_in_precedence_order() {
        let both = json!({"value": 1, "labels": [], "datasets": []});
        assert!(matches!(classify(&both), Shape::MetricObject(_)));
        assert!(matches!(classify(&json!({"labels": [], "datasets": []})), Shape::ChartObject(_)));
        assert!(matches!(classify(&json!({"columns": [], "rows": []})), Shape::TableObject(_)));
        assert_eq!(classify(&json!({"labels": []})), Shape::Unrecognized);
    }

    #[test]
    fn list_shapes() {
        assert!(matches!(classify(&json!([{"headline": "h"}])), Shape::InsightList(_)));
        assert!(matches!(classify(&json!([{"a": 1}, {"a": 2}])), Shape::RecordList(_)));
        assert_eq!(classify(&json!([{"a": 1}, 2])), Shape::Unrecognized);
        assert_eq!(classify(&json!([1, 2])), Shape::NumberSeries(vec![1.0, 2.0]));
        assert_eq!(classify(&json!([1, "2"])), Shape::Unrecognized);
        assert_eq!(classify(&json!([])), Shape::Unrecognized);
    }

    #[test]
    fn only_long_strings_are_narrative() {
        assert_eq!(classify(&json!("short")), Shape::Unrecognized);
        let long = "x".repeat(NARRATIVE_MIN_CHARS + 1);
        let value = json!(long.clone());
        assert_eq!(classify(&value), Shape::Narrative(&long));
    }
}
