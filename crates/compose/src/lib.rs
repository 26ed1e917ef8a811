//! The planning stages of the folio pipeline.
//!
//! ```text
//! CanonicalReport ─▶ DataProfiler ─▶ ComponentSelector ─▶ LayoutPlanner
//!                                                   purpose, style ─▶ DesignSelector
//! ```
//!
//! Every stage is a pure function of its inputs plus the read-only catalog
//! it was constructed with. None of them can fail.

pub mod design;
pub mod planner;
pub mod profiler;
pub mod selector;

pub use design::DesignSelector;
pub use planner::LayoutPlanner;
pub use profiler::DataProfiler;
pub use selector::ComponentSelector;
