use folio_types::{CanonicalReport, ComponentKind, DataProfile};

/// Summarizes which data categories a report carries.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataProfiler;

impl DataProfiler {
    pub fn new() -> Self {
        Self
    }

    /// Suggestions follow a fixed order that mirrors default component
    /// priority: metrics, time series, table, insights, comparison.
    pub fn analyze(&self, report: &CanonicalReport) -> DataProfile {
        let metric_count = report.metrics.len();
        let row_count = report.table.as_ref().map_or(0, |t| t.row_count());
        let dataset_count = report.time_series.as_ref().map_or(0, |c| c.datasets.len());

        let mut profile = DataProfile {
            has_metrics: metric_count > 0,
            has_time_series: report.time_series.is_some(),
            has_table: report.table.is_some(),
            has_insights: !report.insights.is_empty(),
            has_comparison: report.comparison.is_some(),
            metric_count,
            row_count,
            dataset_count,
            suggested_components: Vec::new(),
        };

        let suggestions = &mut profile.suggested_components;
        if profile.has_metrics {
            suggestions.push(ComponentKind::HeroMetric);
            if metric_count > 1 {
                suggestions.push(ComponentKind::TrendIndicator);
            }
        }
        if profile.has_time_series {
            suggestions.push(ComponentKind::LineChart);
        }
        if profile.has_table && row_count > 0 {
            suggestions.push(ComponentKind::DataTable);
        }
        if profile.has_insights {
            suggestions.push(ComponentKind::InsightCard);
        }
        if profile.has_comparison {
            suggestions.push(ComponentKind::ComparisonGrid);
        }

        log::trace!("Profiled report: {:?}", profile);
        profile
    }
}
