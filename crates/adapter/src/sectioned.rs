//! The sectioned dialect: `{metadata, sections: {cover, executive_summary,
//! data_analysis, risks, recommendation}}`.

use crate::normalize::{self, text, text_or};
use folio_types::{AnalysisSection, CanonicalReport, Cover, ExecutiveSummary, Insight, Recommendation};
use serde_json::{Map, Value};

const NOT_AVAILABLE: &str = "N/A";

pub fn adapt(root: &Map<String, Value>) -> CanonicalReport {
    let mut report = CanonicalReport {
        metadata: root
            .get("metadata")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default(),
        ..CanonicalReport::default()
    };

    let Some(sections) = root.get("sections").and_then(Value::as_object) else {
        return report;
    };

    if let Some(cover) = sections.get("cover").and_then(Value::as_object) {
        adapt_cover(&mut report, cover);
    }
    if let Some(summary) = sections.get("executive_summary").and_then(Value::as_object) {
        adapt_summary(&mut report, summary);
    }
    for block in objects(sections.get("data_analysis")) {
        adapt_analysis(&mut report, block);
    }
    if let Some(risks) = sections.get("risks").and_then(Value::as_object) {
        report.insights.extend(objects(risks.get("risks")).map(risk_insight));
    }
    if let Some(rec) = sections.get("recommendation").and_then(Value::as_object) {
        report.recommendation = Some(Recommendation {
            action: text_or(rec.get("action"), ""),
            target: rec.get("target").filter(|t| !t.is_null()).cloned(),
            rationale: text_or(rec.get("rationale"), ""),
        });
    }

    report
}

fn objects(value: Option<&Value>) -> impl Iterator<Item = &Map<String, Value>> {
    value
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
}

/// `"Net Revenue"` → `"net_revenue"`.
fn metric_key(label: &str) -> String {
    label.to_lowercase().replace(' ', "_")
}

fn adapt_cover(report: &mut CanonicalReport, cover: &Map<String, Value>) {
    report.cover = Some(Cover {
        headline: text_or(cover.get("headline"), ""),
        subheadline: text_or(cover.get("subheadline"), ""),
        rating: cover.get("rating").filter(|r| !r.is_null()).cloned(),
    });

    for (i, raw) in cover
        .get("hero_metrics")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .enumerate()
    {
        let key = raw
            .get("label")
            .and_then(Value::as_str)
            .map(metric_key)
            .unwrap_or_else(|| format!("metric_{i}"));
        let metric = normalize::metric(&key, raw);
        // IndexMap::insert keeps the original position of a repeated key.
        report.metrics.insert(key, metric);
    }
}

fn adapt_summary(report: &mut CanonicalReport, summary: &Map<String, Value>) {
    let key_points = summary
        .get("key_points")
        .and_then(Value::as_array)
        .map(|points| points.iter().filter_map(|p| text(Some(p))).collect())
        .unwrap_or_default();
    report.executive_summary = Some(ExecutiveSummary { key_points });

    for raw in summary.get("highlights").and_then(Value::as_array).into_iter().flatten() {
        let key = raw
            .get("label")
            .and_then(Value::as_str)
            .map(metric_key)
            .unwrap_or_default();
        if !key.is_empty() && !report.metrics.contains_key(&key) {
            let metric = normalize::metric(&key, raw);
            report.metrics.insert(key, metric);
        }
    }

    if let Some(chart) = summary
        .get("primary_chart")
        .and_then(|c| normalize::chart(c, ""))
    {
        report.time_series = Some(chart);
    }
}

fn adapt_analysis(report: &mut CanonicalReport, block: &Map<String, Value>) {
    let insights = normalize::insights(block.get("insights"));
    report.insights.extend(insights.iter().cloned());

    let charts: Vec<_> = block
        .get("visualizations")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|viz| normalize::chart(viz, ""))
        .collect();
    let tables: Vec<_> = block.get("data").and_then(normalize::table).into_iter().collect();

    // First chart and table across all analysis blocks fill the singletons.
    if report.time_series.is_none() {
        report.time_series = charts.first().cloned();
    }
    if report.table.is_none() {
        report.table = tables.first().cloned();
    }

    report.sections.push(AnalysisSection {
        title: text_or(block.get("title"), "Analysis"),
        narrative: text_or(block.get("narrative"), ""),
        insights,
        charts,
        tables,
    });
}

fn risk_insight(risk: &Map<String, Value>) -> Insight {
    Insight {
        headline: format!("Risk: {}", text_or(risk.get("title"), "")),
        body: text_or(risk.get("description"), ""),
        source: Some(format!(
            "Probability: {}, Impact: {}",
            text_or(risk.get("probability"), NOT_AVAILABLE),
            text_or(risk.get("impact"), NOT_AVAILABLE),
        )),
    }
}
