//! Rendering for folio: layout + design + model in, one document out.
//!
//! [`HtmlRenderer`] is the built-in [`DocumentRenderer`]. It produces a
//! single HTML page with:
//!
//! - `:root` CSS variables for the six color tokens and two font tokens
//! - one `<section>` per layout section and one block per component
//! - one `initChart(id, config)` call per chart component, where `config` is
//!   the library-agnostic [`ChartConfig`]

pub mod chart;
pub mod error;
pub mod format;
pub mod html;
pub mod traits;
pub mod view;

pub use chart::{CHART_PALETTE, ChartConfig};
pub use error::RenderError;
pub use format::{format_delta, format_number};
pub use html::HtmlRenderer;
pub use traits::DocumentRenderer;
