use super::orchestrator::ReportGenerator;
use crate::error::GenerateError;
use folio_catalog::Catalogs;
use folio_executor::ExecutorImpl;
use folio_render::HtmlRenderer;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A builder for creating a [`ReportGenerator`].
#[derive(Debug, Default)]
pub struct GeneratorBuilder {
    catalogs: Option<Catalogs>,
    catalog_dir: Option<PathBuf>,
    executor: Option<ExecutorImpl>,
}

impl GeneratorBuilder {
    /// Starts from the built-in catalogs and the default executor.
    pub fn new() -> Self {
        Default::default()
    }

    /// Uses the given catalogs. Takes precedence over [`Self::with_catalog_dir`].
    pub fn with_catalogs(mut self, catalogs: Catalogs) -> Self {
        self.catalogs = Some(catalogs);
        self
    }

    /// Overrides built-in tables with any catalog files found in `dir`.
    pub fn with_catalog_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.catalog_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Selects the executor used by [`ReportGenerator::generate_batch`].
    pub fn with_executor(mut self, executor: ExecutorImpl) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Loads the catalogs and compiles the templates.
    pub fn build(self) -> Result<ReportGenerator, GenerateError> {
        let catalogs = match (self.catalogs, self.catalog_dir) {
            (Some(catalogs), _) => catalogs,
            (None, Some(dir)) => {
                log::info!("Loading catalogs from {}", dir.display());
                Catalogs::from_dir(&dir)?
            }
            (None, None) => Catalogs::builtin()?,
        };
        let executor = self.executor.unwrap_or_default();
        log::debug!("Report generator using {} executor", folio_executor::Executor::name(&executor));

        Ok(ReportGenerator::new(
            Arc::new(catalogs),
            Arc::new(HtmlRenderer::new()?),
            executor,
        ))
    }
}
