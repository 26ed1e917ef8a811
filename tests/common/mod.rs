pub mod fixtures;

use folio::{ExecutorImpl, GenerateError, GeneratorBuilder, ReportGenerator, ReportOptions, SyncExecutor};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub const TEST_TITLE: &str = "Test Report";

/// A generator on the built-in catalogs with a sequential executor.
pub fn generator() -> ReportGenerator {
    let _ = env_logger::builder().is_test(true).try_init();
    GeneratorBuilder::new()
        .with_executor(ExecutorImpl::Sync(SyncExecutor::new()))
        .build()
        .expect("built-in catalogs and templates load")
}

/// Renders `data` with default options and [`TEST_TITLE`].
pub fn render(data: &Value) -> Result<String, GenerateError> {
    render_with(data, &ReportOptions::new(TEST_TITLE))
}

pub fn render_with(data: &Value, options: &ReportOptions) -> Result<String, GenerateError> {
    generator().generate(data, options)
}

/// Number of non-overlapping occurrences of `needle`.
pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}
