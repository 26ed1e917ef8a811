//! Schema adapter: any JSON value in, one [`CanonicalReport`] out.
//!
//! Three input dialects are recognized, checked in order:
//!
//! 1. **Sectioned**: the root has both `metadata` and `sections`.
//! 2. **Legacy**: the root has any of `metrics`, `time_series`, `table`.
//! 3. **Arbitrary**: anything else; each top-level value is classified by
//!    [`shape::classify`] and normalized according to its shape.
//!
//! Adaptation never fails. A non-object root yields an empty report.

pub mod arbitrary;
pub mod legacy;
pub mod normalize;
pub mod sectioned;
pub mod shape;

use folio_types::CanonicalReport;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Sectioned,
    Legacy,
    Arbitrary,
}

impl Dialect {
    pub fn detect(root: &Map<String, Value>) -> Self {
        if root.contains_key("metadata") && root.contains_key("sections") {
            Dialect::Sectioned
        } else if ["metrics", "time_series", "table"]
            .iter()
            .any(|k| root.contains_key(*k))
        {
            Dialect::Legacy
        } else {
            Dialect::Arbitrary
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaAdapter;

impl SchemaAdapter {
    pub fn new() -> Self {
        Self
    }

    pub fn adapt(&self, raw: &Value) -> CanonicalReport {
        let Some(root) = raw.as_object() else {
            log::debug!("Input root is not an object; producing an empty report");
            return CanonicalReport::default();
        };

        let dialect = Dialect::detect(root);
        log::debug!("Adapting input as {:?} dialect", dialect);
        match dialect {
            Dialect::Sectioned => sectioned::adapt(root),
            Dialect::Legacy => legacy::adapt(root),
            Dialect::Arbitrary => arbitrary::adapt(root),
        }
    }
}

/// Shorthand for `SchemaAdapter::new().adapt(raw)`.
pub fn adapt(raw: &Value) -> CanonicalReport {
    SchemaAdapter::new().adapt(raw)
}
