//! Foundation types shared by every stage of the folio pipeline.
//!
//! The [`CanonicalReport`] is produced once per generation call by the schema
//! adapter; the profile, components, layout and design are all derived from it
//! and discarded after rendering.

pub mod color;
pub mod component;
pub mod design;
pub mod layout;
pub mod model;
pub mod profile;
pub mod purpose;

pub use color::Color;
pub use component::{BoundData, Component, ComponentKind, GridSpan};
pub use design::{ColorTokens, Design, Typography};
pub use layout::{Layout, LayoutSection};
pub use model::{
    AnalysisSection, CanonicalReport, Chart, Cover, Dataset, ExecutiveSummary, Insight, Metadata,
    Metric, MetricFormat, MetricMap, MetricStatus, MetricValue, Recommendation, Table,
};
pub use profile::DataProfile;
pub use purpose::{Purpose, UnknownPurpose};
