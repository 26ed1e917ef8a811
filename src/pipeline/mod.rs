//! Report generation orchestration.
//!
//! - [`GeneratorBuilder`]: loads catalogs, compiles templates, picks an executor
//! - [`ReportGenerator`]: runs the pipeline for one report or a batch
//! - [`ReportOptions`]: title, purpose and style for one report
//!
//! # Example
//!
//! ```ignore
//! use folio::{GeneratorBuilder, ReportOptions};
//!
//! let generator = GeneratorBuilder::new().build()?;
//! let html = generator.generate(&data, &ReportOptions::new("Q3 Review"))?;
//! ```

mod builder;
pub mod config;
mod orchestrator;
pub mod snapshot;

pub use builder::GeneratorBuilder;
pub use config::{DEFAULT_PURPOSE, DEFAULT_STYLE, ReportOptions};
pub use orchestrator::ReportGenerator;
pub use snapshot::{ComponentOutline, LayoutOutline, ReportSnapshot, SectionOutline};
