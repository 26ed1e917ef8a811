mod common;

use common::fixtures::*;
use common::{TEST_TITLE, TestResult, count, generator, render, render_with};
use folio::types::{ComponentKind, MetricStatus, MetricValue};
use folio::{Catalogs, ReportOptions};
use serde_json::json;

#[test]
fn test_scenario_a_scalar_revenue() -> TestResult {
    let data = json!({"revenue": 1500000});
    let snapshot = generator().inspect(&data, &ReportOptions::new(TEST_TITLE));
    let metric = &snapshot.report.metrics["revenue"];
    assert_eq!(metric.label, "Revenue");
    assert_eq!(metric.unit, "$");

    let html = render(&data)?;
    assert!(html.contains("$1.5M"));
    assert!(html.contains(TEST_TITLE));
    Ok(())
}

#[test]
fn test_scenario_b_negative_delta() -> TestResult {
    let data = json!({"metrics": {"a": {"value": 10, "delta": -5}}});
    let snapshot = generator().inspect(&data, &ReportOptions::new(TEST_TITLE));
    assert_eq!(snapshot.report.metrics["a"].status(), MetricStatus::Negative);

    let html = render(&data)?;
    assert!(html.contains("text-red-600"));
    assert!(html.contains("↓ -5%"));
    assert!(!html.contains("↑"));
    Ok(())
}

#[test]
fn test_scenario_c_number_series() {
    let snapshot = generator().inspect(&json!({"quarterly": [1, 2, 3]}), &ReportOptions::new("C"));
    let series = snapshot.report.time_series.expect("series synthesized");
    assert_eq!(series.labels, vec!["0", "1", "2"]);
    assert_eq!(series.datasets.len(), 1);
    assert_eq!(series.datasets[0].label, "quarterly");
    assert_eq!(series.datasets[0].data, vec![Some(1.0), Some(2.0), Some(3.0)]);
}

#[test]
fn test_scenario_d_record_list() {
    let data = json!({"products": [{"name": "A", "sales": 5}, {"name": "B", "sales": 3}]});
    let snapshot = generator().inspect(&data, &ReportOptions::new("D"));
    let table = snapshot.report.table.expect("table inferred");
    assert_eq!(table.columns, vec!["name", "sales"]);
    assert_eq!(table.rows, vec![vec![json!("A"), json!(5)], vec![json!("B"), json!(3)]]);
}

#[test]
fn test_columns_and_metrics_keep_input_key_order() {
    let data = json!({
        "rows_of": [{"zeta": 1, "alpha": 2}, {"zeta": 3, "alpha": 4}],
        "score": 1,
        "alpha_score": 2
    });
    let snapshot = generator().inspect(&data, &ReportOptions::new("Order"));
    let table = snapshot.report.table.expect("table inferred");
    assert_eq!(table.columns, vec!["zeta", "alpha"]);
    assert_eq!(table.rows[1], vec![json!(3), json!(4)]);

    let keys: Vec<_> = snapshot.report.metrics.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["score", "alpha_score"]);

    let legacy = json!({"metrics": {"zeta": {"value": 1}, "alpha": {"value": 2}}});
    let snapshot = generator().inspect(&legacy, &ReportOptions::new("Order"));
    let ids: Vec<_> = snapshot
        .layout
        .sections
        .iter()
        .flat_map(|s| s.components.iter())
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ids, vec!["metric-zeta", "metric-alpha"]);
}

#[test]
fn test_empty_time_series_object_draws_no_chart() -> TestResult {
    let data = json!({"metrics": {"a": {"value": 1}}, "time_series": {}, "categories": {}});
    let snapshot = generator().inspect(&data, &ReportOptions::new(TEST_TITLE));
    assert!(snapshot.report.time_series.is_none());
    assert!(!snapshot.profile.has_time_series);

    let html = render(&data)?;
    assert!(!html.contains("initChart"));
    Ok(())
}

#[test]
fn test_empty_object_renders_title() -> TestResult {
    let html = render(&json!({}))?;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(TEST_TITLE));
    assert_eq!(count(&html, "<section"), 0);
    assert!(!html.contains("initChart"));
    Ok(())
}

#[test]
fn test_non_object_inputs_are_total() -> TestResult {
    for data in [json!(null), json!([]), json!([1, 2]), json!("text"), json!(3.5)] {
        let html = render(&data)?;
        assert!(html.contains(TEST_TITLE), "no title for {data}");
    }
    Ok(())
}

#[test]
fn test_sectioned_report_end_to_end() -> TestResult {
    let options = ReportOptions::new("ACME Review").with_purpose("analyst");
    let snapshot = generator().inspect(&sectioned_report(), &options);
    let keys: Vec<_> = snapshot.report.metrics.keys().cloned().collect();
    assert_eq!(keys, vec!["net_revenue", "gross_margin", "headcount"]);
    assert_eq!(
        snapshot.report.metrics["net_revenue"].value,
        MetricValue::Number(2_500_000.0)
    );
    assert_eq!(snapshot.report.sections.len(), 1);
    assert_eq!(snapshot.report.time_series.as_ref().map(|c| c.title.as_str()), Some("Revenue by Quarter"));
    assert_eq!(snapshot.layout.pattern_name, "Data Deep Dive");

    let html = render_with(&sectioned_report(), &options)?;
    assert!(html.contains("Margins recover"));
    assert!(html.contains("Revenue beat guidance"));
    assert!(html.contains("Recommendation: Buy"));
    assert!(html.contains("Target: 145"));
    assert!(html.contains("Risk: FX"));
    assert!(html.contains("Probability: High, Impact: N/A"));
    assert!(html.contains("Generated Report • Data Deep Dive • ACME Corp"));
    assert!(html.contains("$2.5M"));
    assert!(html.contains("41%"));
    assert!(html.contains("QoQ"));
    assert_eq!(count(&html, "<script>initChart("), 1);
    Ok(())
}

#[test]
fn test_legacy_report_components_and_sections() -> TestResult {
    let snapshot = generator().inspect(&legacy_report(), &ReportOptions::new(TEST_TITLE));
    assert!(snapshot.profile.has_comparison);
    assert_eq!(snapshot.profile.row_count, 2);

    let titles: Vec<_> = snapshot
        .layout
        .sections
        .iter()
        .map(|s| s.title.as_deref())
        .collect();
    assert_eq!(titles, vec![None, Some("Key Insights"), Some("Analysis"), Some("Detailed Data")]);

    let kinds: Vec<_> = snapshot
        .layout
        .sections
        .iter()
        .flat_map(|s| s.components.iter().map(|c| c.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ComponentKind::HeroMetric,
            ComponentKind::TrendIndicator,
            ComponentKind::TrendIndicator,
            ComponentKind::InsightCard,
            ComponentKind::InsightCard,
            ComponentKind::LineChart,
            ComponentKind::BarChart,
            ComponentKind::DataTable,
        ]
    );

    let html = render(&legacy_report())?;
    assert_eq!(count(&html, "<section"), 4);
    assert_eq!(count(&html, "<script>initChart("), 2);
    assert!(html.contains("North leads"));
    assert!(!html.contains("West pending"));
    assert!(html.contains("By Region"));
    Ok(())
}

#[test]
fn test_chart_config_is_generic_and_padded() -> TestResult {
    let html = render(&legacy_report())?;
    assert!(html.contains(
        r##"{"label":"2023","data":[8.0,9.0,null],"color":"#10B981"}"##
    ));
    assert!(html.contains(r#""type":"bar""#));
    Ok(())
}

#[test]
fn test_arbitrary_mix() -> TestResult {
    let snapshot = generator().inspect(&arbitrary_mix(), &ReportOptions::new(TEST_TITLE));
    let report = &snapshot.report;
    assert_eq!(report.metadata_text("title").as_deref(), Some("Auto-Generated Report"));
    assert_eq!(report.metrics["total_revenue"].unit, "$");
    assert_eq!(report.metrics["growth_rate"].unit, "%");
    assert!(!report.metrics.contains_key("flags"));
    assert_eq!(report.insights.len(), 1);
    assert_eq!(report.insights[0].headline, "Analyst Commentary");
    assert!(report.table.is_some());
    assert!(report.time_series.is_some());

    let html = render(&arbitrary_mix())?;
    assert!(html.contains("$1.2M"));
    Ok(())
}

#[test]
fn test_generation_is_deterministic() -> TestResult {
    for data in [sectioned_report(), legacy_report(), arbitrary_mix()] {
        assert_eq!(render(&data)?, render(&data)?);
    }
    Ok(())
}

#[test]
fn test_purpose_selects_pattern_and_scheme() {
    let expectations = [
        ("executive", "Executive Summary", "Executive Gray"),
        ("analyst", "Data Deep Dive", "Analyst Orange"),
        ("dashboard", "Dashboard Grid", "Tech Purple"),
        ("storytelling", "Storytelling", "Growth Green"),
        ("comparison", "Comparison Focus", "Finance Blue"),
        ("unheard-of", "Executive Summary", "Finance Blue"),
    ];
    let generator = generator();
    for (purpose, pattern, scheme) in expectations {
        let options = ReportOptions::new(TEST_TITLE).with_purpose(purpose);
        let snapshot = generator.inspect(&legacy_report(), &options);
        assert_eq!(snapshot.layout.pattern_name, pattern, "{purpose}");
        assert_eq!(snapshot.design.scheme_name.as_deref(), Some(scheme), "{purpose}");
    }
}

#[test]
fn test_text_is_escaped_in_document() -> TestResult {
    let data = json!({
        "metrics": {"x": {"label": "<img src=x>", "value": 1}},
        "insights": [{"headline": "</script><script>alert(1)</script>", "body": "b"}],
        "time_series": {"labels": ["</script>"], "datasets": [{"label": "s", "data": [1]}]}
    });
    let html = render_with(&data, &ReportOptions::new("<b>Title</b>"))?;
    assert!(!html.contains("<img src=x>"));
    assert!(!html.contains("<b>Title</b>"));
    assert!(!html.contains("alert(1)</script>"));
    assert!(html.contains("&lt;b&gt;Title&lt;/b&gt;"));
    Ok(())
}

#[test]
fn test_catalog_dir_overrides_colors() -> TestResult {
    let dir = tempfile::tempdir()?;
    std::fs::write(
        dir.path().join("color_schemes.json"),
        r##"{"Executive Gray": {"primary": "#123456"}}"##,
    )?;
    let generator = folio::GeneratorBuilder::new().with_catalog_dir(dir.path()).build()?;
    let html = generator.generate(&json!({"a": 1}), &ReportOptions::new(TEST_TITLE))?;
    assert!(html.contains("--color-primary: #123456;"));
    assert!(html.contains("--color-border: #E2E8F0;"));
    Ok(())
}

#[test]
fn test_missing_catalog_dir_fails_to_build() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = folio::GeneratorBuilder::new()
        .with_catalog_dir(dir.path().join("absent"))
        .build();
    assert!(result.is_err());
}

#[test]
fn test_empty_catalogs_degrade_to_defaults() -> TestResult {
    let generator = folio::GeneratorBuilder::new()
        .with_catalogs(Catalogs::default())
        .build()?;
    let options = ReportOptions::new(TEST_TITLE);
    let snapshot = generator.inspect(&legacy_report(), &options);
    assert_eq!(snapshot.design.scheme_name, None);
    assert_eq!(snapshot.layout.grid_classes, folio::catalog::FALLBACK_GRID_CLASSES);

    let html = generator.generate(&legacy_report(), &options)?;
    assert!(html.contains("--color-primary: #1E40AF;"));
    Ok(())
}

#[test]
fn test_batch_generation_matches_single_calls() -> TestResult {
    let generator = generator();
    let inputs = vec![sectioned_report(), legacy_report(), arbitrary_mix(), json!({})];
    let jobs = inputs
        .iter()
        .enumerate()
        .map(|(i, data)| (data.clone(), ReportOptions::new(format!("Report {i}"))))
        .collect();
    let batch = generator.generate_batch(jobs);
    assert_eq!(batch.len(), inputs.len());
    for (i, (data, result)) in inputs.iter().zip(batch).enumerate() {
        let single = generator.generate(data, &ReportOptions::new(format!("Report {i}")))?;
        assert_eq!(result?, single);
    }
    Ok(())
}

#[cfg(feature = "rayon-executor")]
#[test]
fn test_rayon_batch_keeps_order() -> TestResult {
    let generator = folio::GeneratorBuilder::new()
        .with_executor(folio::ExecutorImpl::Rayon(folio::RayonExecutor::new()))
        .build()?;
    let jobs = (0..16)
        .map(|i| (json!({"value": i}), ReportOptions::new(format!("Batch {i}"))))
        .collect();
    for (i, result) in generator.generate_batch(jobs).into_iter().enumerate() {
        assert!(result?.contains(&format!("Batch {i}")));
    }
    Ok(())
}
