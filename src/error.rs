use folio_catalog::CatalogError;
use folio_render::RenderError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised around the pipeline: construction, input loading and
/// rendering. The planning stages themselves never fail.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Catalog could not be loaded: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to read input '{path}': {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input '{path}' is not valid JSON: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
