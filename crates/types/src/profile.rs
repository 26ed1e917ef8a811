use crate::component::ComponentKind;
use serde::Serialize;

/// A read-only summary of which data categories a report carries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataProfile {
    pub has_metrics: bool,
    pub has_time_series: bool,
    pub has_table: bool,
    pub has_insights: bool,
    pub has_comparison: bool,
    pub metric_count: usize,
    pub row_count: usize,
    pub dataset_count: usize,
    /// Suggested component kinds, highest priority first.
    pub suggested_components: Vec<ComponentKind>,
}

impl DataProfile {
    pub fn suggests(&self, kind: ComponentKind) -> bool {
        self.suggested_components.contains(&kind)
    }
}
