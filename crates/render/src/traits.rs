use crate::error::RenderError;
use folio_types::{CanonicalReport, Design, Layout};

/// Projects a planned layout onto a finished document.
///
/// Rendering is a pure projection: the same inputs always produce the same
/// output, and nothing in `layout` or `report` is modified.
pub trait DocumentRenderer: Send + Sync {
    fn render(
        &self,
        title: &str,
        layout: &Layout<'_>,
        design: &Design,
        report: &CanonicalReport,
    ) -> Result<String, RenderError>;

    /// Short name of the output format, e.g. `"html"`.
    fn format(&self) -> &'static str;
}
