//! folio: adaptive report composition.
//!
//! Loosely structured JSON goes in; a self-contained HTML report comes out.
//! The pipeline is split across crates:
//!
//! | Stage | Crate |
//! |---|---|
//! | Schema adapter | [`folio_adapter`] |
//! | Profiler, selector, planner, design | [`folio_compose`] |
//! | Renderer | [`folio_render`] |
//! | Static catalogs | [`folio_catalog`] |
//! | Batch executors | [`folio_executor`] |
//!
//! This crate wires them together behind [`ReportGenerator`] and provides the
//! `folio` command-line tool.

pub mod error;
pub mod export;
pub mod input;
pub mod pipeline;

pub use error::GenerateError;
pub use export::{ExportError, PdfExporter};
pub use input::load_input;
pub use pipeline::{GeneratorBuilder, ReportGenerator, ReportOptions, ReportSnapshot};

pub use folio_adapter as adapter;
pub use folio_catalog as catalog;
pub use folio_compose as compose;
pub use folio_executor as executor;
pub use folio_render as render;
pub use folio_types as types;

pub use folio_catalog::Catalogs;
pub use folio_executor::{Executor, ExecutorImpl, SyncExecutor};
#[cfg(feature = "rayon-executor")]
pub use folio_executor::RayonExecutor;
pub use folio_types::{CanonicalReport, Purpose};
