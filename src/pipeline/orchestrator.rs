use super::config::ReportOptions;
use super::snapshot::{LayoutOutline, ReportSnapshot};
use crate::error::GenerateError;
use folio_adapter::SchemaAdapter;
use folio_catalog::Catalogs;
use folio_compose::design::scheme_name;
use folio_compose::{ComponentSelector, DataProfiler, DesignSelector, LayoutPlanner};
use folio_executor::{Executor, ExecutorImpl};
use folio_render::{DocumentRenderer, HtmlRenderer};
use folio_types::{CanonicalReport, DataProfile, Design, Layout, Purpose};
use serde_json::Value;
use std::sync::Arc;

/// Runs the full pipeline: adapt, analyze, select, plan, design, render.
///
/// Cheap to clone; catalogs and compiled templates are shared read-only, so
/// clones may generate reports concurrently.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    catalogs: Arc<Catalogs>,
    renderer: Arc<HtmlRenderer>,
    executor: ExecutorImpl,
}

impl ReportGenerator {
    pub(crate) fn new(
        catalogs: Arc<Catalogs>,
        renderer: Arc<HtmlRenderer>,
        executor: ExecutorImpl,
    ) -> Self {
        Self {
            catalogs,
            renderer,
            executor,
        }
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    pub fn executor(&self) -> &ExecutorImpl {
        &self.executor
    }

    /// Renders `raw` into a complete HTML document.
    pub fn generate(&self, raw: &Value, options: &ReportOptions) -> Result<String, GenerateError> {
        self.warn_on_catalog_misses(options);

        let report = SchemaAdapter::new().adapt(raw);
        let (_, layout, design) = self.plan(&report, options);
        let html = self
            .renderer
            .render(&options.title, &layout, &design, &report)?;

        log::debug!(
            "Generated '{}' ({} components, {} bytes)",
            options.title,
            layout.component_count(),
            html.len()
        );
        Ok(html)
    }

    /// Runs every stage except rendering and returns the intermediate results.
    pub fn inspect(&self, raw: &Value, options: &ReportOptions) -> ReportSnapshot {
        self.warn_on_catalog_misses(options);

        let report = SchemaAdapter::new().adapt(raw);
        let (profile, layout, design) = self.plan(&report, options);
        let layout = LayoutOutline::from(&layout);
        ReportSnapshot {
            title: options.title.clone(),
            report,
            profile,
            layout,
            design,
        }
    }

    /// Generates many reports on the configured executor. Results are in
    /// input order and one failure does not affect the others.
    pub fn generate_batch(
        &self,
        jobs: Vec<(Value, ReportOptions)>,
    ) -> Vec<Result<String, GenerateError>> {
        log::info!(
            "Generating {} reports on {} (parallelism {})",
            jobs.len(),
            self.executor.name(),
            self.executor.parallelism()
        );
        self.executor
            .map_ordered(jobs, |(raw, options)| self.generate(&raw, &options))
    }

    fn plan<'a>(
        &self,
        report: &'a CanonicalReport,
        options: &ReportOptions,
    ) -> (DataProfile, Layout<'a>, Design) {
        let profile = DataProfiler::new().analyze(report);
        let components = ComponentSelector::new(&self.catalogs.components).select(&profile, report);
        let layout = LayoutPlanner::new(&self.catalogs.layouts).plan(components, &options.purpose);
        let design = DesignSelector::new(&self.catalogs.color_schemes)
            .select(&options.purpose, &options.style);
        (profile, layout, design)
    }

    fn warn_on_catalog_misses(&self, options: &ReportOptions) {
        if options.purpose.parse::<Purpose>().is_err() {
            log::warn!(
                "Unknown purpose '{}', using '{}' layout and colors",
                options.purpose,
                Purpose::default()
            );
        }
        if !self.catalogs.styles.contains(&options.style) {
            log::warn!("Unknown style '{}', keeping it as a label only", options.style);
        }
        let scheme = scheme_name(&options.purpose);
        if self.catalogs.color_schemes.get(scheme).is_none() {
            log::warn!("Color scheme '{}' not in catalog, falling back", scheme);
        }
    }
}
